use super::actions::Action;
use crate::api::CampaignSource;
use crate::dashboard::{fetch_page, FetchTicket, ListQuery};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs API calls off the UI loop and reports results as actions.
///
/// At most one list fetch and one detail fetch are kept alive: issuing a new
/// one aborts its predecessor. Results still carry their ticket so the
/// dashboard can discard anything that finishes before the abort lands.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
    list_task: Option<TaskId>,
    detail_task: Option<TaskId>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
                list_task: None,
                detail_task: None,
            },
            rx,
        )
    }

    /// Spawn a list fetch, superseding the previous one
    pub fn spawn_list_fetch(
        &mut self,
        source: Arc<dyn CampaignSource>,
        query: ListQuery,
        ticket: FetchTicket,
    ) -> TaskId {
        if let Some(previous) = self.list_task.take() {
            self.abort(previous);
        }

        let action_sender = self.action_sender.clone();
        let description = format!("List fetch #{}: {}", ticket.seq, query.describe());

        let task_id = self.spawn(description, async move {
            let result = fetch_page(source.as_ref(), &query).await;
            let _ = action_sender.send(Action::ListLoaded { seq: ticket.seq, result });
        });
        self.list_task = Some(task_id);
        task_id
    }

    /// Spawn a detail fetch, superseding the previous one
    pub fn spawn_detail_fetch(&mut self, source: Arc<dyn CampaignSource>, name: String, ticket: FetchTicket) -> TaskId {
        self.cancel_detail_fetch();

        let action_sender = self.action_sender.clone();
        let description = format!("Detail fetch #{}: '{}'", ticket.seq, name);

        let task_id = self.spawn(description, async move {
            let result = source.get_detail(&name).await;
            let _ = action_sender.send(Action::DetailLoaded { seq: ticket.seq, result });
        });
        self.detail_task = Some(task_id);
        task_id
    }

    /// Abort the pending detail fetch, if any
    pub fn cancel_detail_fetch(&mut self) {
        if let Some(previous) = self.detail_task.take() {
            self.abort(previous);
        }
    }

    fn spawn<F>(&mut self, description: String, future: F) -> TaskId
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let task = BackgroundTask {
            id: task_id,
            handle: tokio::spawn(future),
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    fn abort(&mut self, task_id: TaskId) {
        if let Some(task) = self.tasks.remove(&task_id) {
            if !task.handle.is_finished() {
                log::debug!(
                    "Aborting superseded task '{}' after {:?}",
                    task.description,
                    task.started_at.elapsed()
                );
            }
            task.handle.abort();
        }
    }

    /// Drop bookkeeping for finished tasks and return their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
            if self.list_task == Some(*task_id) {
                self.list_task = None;
            }
            if self.detail_task == Some(*task_id) {
                self.detail_task = None;
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
        self.list_task = None;
        self.detail_task = None;
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
