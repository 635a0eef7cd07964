use crate::fake_source::FakeSource;
use campaign_dashboard::api::CampaignSource;
use campaign_dashboard::dashboard::{FetchTicket, FilterState};
use campaign_dashboard::models::Campaign;
use campaign_dashboard::ui::core::{Action, TaskManager};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_list_fetch_reports_back_with_its_ticket() {
    let (mut manager, mut rx) = TaskManager::new();
    let source: Arc<dyn CampaignSource> = Arc::new(FakeSource::with_names(&["a", "b"]));

    manager.spawn_list_fetch(source, FilterState::new().query(), FetchTicket { seq: 7 });

    match rx.recv().await {
        Some(Action::ListLoaded { seq, result }) => {
            assert_eq!(seq, 7);
            assert_eq!(result.unwrap().total, 2);
        }
        other => panic!("expected ListLoaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_new_list_fetch_supersedes_pending_one() {
    let (mut manager, mut rx) = TaskManager::new();
    let source: Arc<dyn CampaignSource> = Arc::new(FakeSource::with_names(&["a"]));

    manager.spawn_list_fetch(Arc::clone(&source), FilterState::new().query(), FetchTicket { seq: 1 });
    manager.spawn_list_fetch(source, FilterState::new().query(), FetchTicket { seq: 2 });

    match rx.recv().await {
        Some(Action::ListLoaded { seq, .. }) => assert_eq!(seq, 2),
        other => panic!("expected ListLoaded, got {:?}", other),
    }
    let next = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(next.is_err(), "aborted fetch should not report: {:?}", next);
}

#[tokio::test]
async fn test_detail_fetch_and_cancel() {
    let (mut manager, mut rx) = TaskManager::new();
    let source: Arc<dyn CampaignSource> = Arc::new(FakeSource::with_names(&["campania_demo"]));

    manager.spawn_detail_fetch(Arc::clone(&source), "campania_demo".to_string(), FetchTicket { seq: 3 });
    match rx.recv().await {
        Some(Action::DetailLoaded { seq, result }) => {
            assert_eq!(seq, 3);
            assert_eq!(result.unwrap().campaign.name, "campania_demo");
        }
        other => panic!("expected DetailLoaded, got {:?}", other),
    }

    manager.spawn_detail_fetch(source, "campania_demo".to_string(), FetchTicket { seq: 4 });
    manager.cancel_detail_fetch();
    let next = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(next.is_err(), "cancelled fetch should not report: {:?}", next);
}

#[tokio::test]
async fn test_finished_tasks_are_cleaned_up() {
    let (mut manager, mut rx) = TaskManager::new();
    let source: Arc<dyn CampaignSource> = Arc::new(FakeSource::with_names(&[]));

    manager.spawn_list_fetch(source, FilterState::new().query(), FetchTicket { seq: 1 });
    assert_eq!(manager.task_count(), 1);
    rx.recv().await.unwrap();

    // Give the task a moment to finish after sending
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(manager.cleanup_finished_tasks().len(), 1);
    assert_eq!(manager.task_count(), 0);
}

#[test]
fn test_actions_compare_by_value() {
    let campaign = Campaign::new("a", "mensual", "2024-01-01", "2024-01-31");
    assert_eq!(Action::OpenDetail(campaign.clone()), Action::OpenDetail(campaign));
    assert_ne!(Action::NextPage, Action::PreviousPage);
}
