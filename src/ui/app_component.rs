use crate::api::CampaignSource;
use crate::dashboard::{DateRangeForm, DetailOrchestrator, FilterState, ListOrchestrator, ListOutcome};
use crate::logger::Logger;
use crate::ui::components::{
    CampaignTableComponent, DetailModalComponent, DialogComponent, FilterBarComponent, PaginationComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    AppContext, Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Dashboard state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub filters: FilterState,
    pub list: ListOrchestrator,
    pub detail: DetailOrchestrator,
}

pub struct AppComponent {
    // Component composition
    filter_bar: FilterBarComponent,
    table: CampaignTableComponent,
    pagination: PaginationComponent,
    detail_modal: DetailModalComponent,
    dialog: DialogComponent,

    // Dashboard state
    state: AppState,

    // Services
    source: Arc<dyn CampaignSource>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
    mouse_enabled: bool,
}

impl AppComponent {
    pub fn new(context: AppContext) -> Self {
        let AppContext { source, config, logger } = context;
        let (task_manager, background_action_rx) = TaskManager::new();

        let filters = FilterState::with_page_size(config.ui.default_page_size).unwrap_or_else(|e| {
            logger.log(format!("Config: {}, using the default page size", e));
            FilterState::new()
        });

        let mut table = CampaignTableComponent::new();
        table.set_date_format(&config.display.date_format);
        let mut detail_modal = DetailModalComponent::new();
        detail_modal.set_date_format(&config.display.date_format);
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            filter_bar: FilterBarComponent::new(),
            table,
            pagination: PaginationComponent::new(),
            detail_modal,
            dialog,
            state: AppState {
                filters,
                ..Default::default()
            },
            source,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
            mouse_enabled: config.ui.mouse_enabled,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Fetch the first page on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("AppComponent: Loading first page".to_string());
        self.refresh_list();
    }

    /// Issue a fetch for the current query
    fn refresh_list(&mut self) {
        let query = self.state.filters.query();
        let ticket = self.state.list.begin(&query);
        self.logger
            .log(format!("List: Fetch #{} ({})", ticket.seq, query.describe()));
        self.task_manager
            .spawn_list_fetch(Arc::clone(&self.source), query, ticket);
    }

    fn open_detail(&mut self, name: String) {
        let ticket = self.state.detail.open(&name);
        self.logger
            .log(format!("Detail: Fetch #{} for campaign '{}'", ticket.seq, name));
        self.task_manager
            .spawn_detail_fetch(Arc::clone(&self.source), name, ticket);
    }

    /// Push the current state into the components
    fn sync_component_data(&mut self) {
        let filters = &self.state.filters;
        let list = &self.state.list;

        self.filter_bar
            .update_data(filters.type_filter(), filters.date_filter(), filters.page_size());
        self.table
            .update_data(list.records(), list.is_loading(), list.error(), filters.page_size());
        self.pagination.update_data(
            filters.page(),
            filters.total_pages(),
            filters.confirmed_total(),
            list.is_loading(),
        );
        self.detail_modal.update_data(self.state.detail.state());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - retrying current query".to_string());
                Action::Retry
            }
            _ => Action::None,
        }
    }

    /// Route a key to the topmost component that wants it
    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+C always quits, whatever overlay is open
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_global_key(key);
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if self.detail_modal.is_visible() {
            let action = self.detail_modal.handle_key_events(key);
            return match action {
                Action::None if matches!(key.code, KeyCode::Char('?') | KeyCode::Char('G')) => {
                    self.handle_global_key(key)
                }
                action => action,
            };
        }

        for action in [
            self.filter_bar.handle_key_events(key),
            self.pagination.handle_key_events(key),
            self.table.handle_key_events(key),
        ] {
            if action != Action::None {
                return action;
            }
        }

        self.handle_global_key(key)
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || self.dialog.is_visible() || self.detail_modal.is_visible() {
            return Action::None;
        }
        self.table.handle_mouse_events(mouse)
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }

    /// Run an action through the components, then through the app
    pub fn dispatch(&mut self, action: Action) -> Action {
        match &action {
            Action::ShowDialog(dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
            }
            Action::HideDialog => self.logger.log("Dialog: Hiding current dialog".to_string()),
            _ => {}
        }

        let action = self.update(action);
        self.handle_app_action(action)
    }

    /// Handle app-level actions that require dashboard logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        let result = match action {
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                Action::None
            }
            Action::NextPage => {
                if self.state.filters.next_page() {
                    self.logger
                        .log(format!("Pagination: Moving to page {}", self.state.filters.page()));
                    self.refresh_list();
                }
                Action::None
            }
            Action::PreviousPage => {
                if self.state.filters.prev_page() {
                    self.logger
                        .log(format!("Pagination: Moving to page {}", self.state.filters.page()));
                    self.refresh_list();
                }
                Action::None
            }
            Action::CycleTypeFilter => {
                self.state.filters.cycle_type_filter();
                self.logger.log(format!(
                    "Filter: Campaign type set to {}",
                    self.state.filters.type_filter().map(|t| t.as_str()).unwrap_or("all")
                ));
                self.refresh_list();
                Action::None
            }
            Action::CyclePageSize => {
                self.state.filters.cycle_page_size();
                self.logger
                    .log(format!("Filter: Page size set to {}", self.state.filters.page_size()));
                self.refresh_list();
                Action::None
            }
            Action::ApplyDateFilter { start, end } => {
                match DateRangeForm::validate(&start, &end) {
                    Ok(range) => {
                        self.logger
                            .log(format!("Filter: Date range set to {} .. {}", start, end));
                        self.state.filters.set_date_filter(range);
                        self.refresh_list();
                    }
                    Err(errors) => {
                        self.logger
                            .log(format!("Filter: Rejected date range {} .. {}: {:?}", start, end, errors));
                    }
                }
                Action::None
            }
            Action::ClearDateFilter => {
                if self.state.filters.date_filter().is_some() {
                    self.logger.log("Filter: Date range cleared".to_string());
                    self.state.filters.clear_date_filter();
                    self.refresh_list();
                }
                Action::None
            }
            Action::Retry => {
                self.refresh_list();
                Action::None
            }
            Action::ListLoaded { seq, result } => {
                match self.state.list.complete(seq, result) {
                    ListOutcome::Applied => {
                        let total = self.state.list.total();
                        self.logger.log(format!(
                            "List: Fetch #{} returned {} of {} campaigns",
                            seq,
                            self.state.list.records().len(),
                            total
                        ));
                        if self.state.filters.confirm_total(total) {
                            self.logger.log(format!(
                                "Pagination: Page out of range, moving to page {}",
                                self.state.filters.page()
                            ));
                            self.refresh_list();
                        }
                    }
                    ListOutcome::Failed => {
                        self.state.filters.reset_total();
                        self.logger.log(format!(
                            "List: Fetch #{} failed: {}",
                            seq,
                            self.state.list.error().unwrap_or_default()
                        ));
                    }
                    ListOutcome::Stale => {
                        self.logger.log(format!("List: Ignoring stale result #{}", seq));
                    }
                }
                Action::None
            }
            Action::OpenDetail(campaign) => {
                self.open_detail(campaign.name);
                Action::None
            }
            Action::CloseDetail => {
                self.logger.log("Detail: Closing".to_string());
                self.state.detail.close();
                self.task_manager.cancel_detail_fetch();
                Action::None
            }
            Action::DetailLoaded { seq, result } => {
                if self.state.detail.complete(seq, result) {
                    match self.state.detail.error() {
                        Some(error) => self.logger.log(format!("Detail: Fetch #{} failed: {}", seq, error)),
                        None => self.logger.log(format!("Detail: Fetch #{} loaded", seq)),
                    }
                } else {
                    self.logger.log(format!("Detail: Ignoring stale result #{}", seq));
                }
                Action::None
            }
            other => other,
        };

        self.sync_component_data();
        result
    }

    /// Drain results sent by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        // Clean up finished tasks
        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: Cleaned up {} finished tasks", finished.len());
        }

        actions
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.detail_modal.update(action);
        self.table.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.filter_bar.render(f, chunks[0]);
        self.table.render(f, chunks[1]);
        self.pagination.render(f, chunks[2]);

        // Overlays, topmost last
        self.detail_modal.render(f, rect);
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
