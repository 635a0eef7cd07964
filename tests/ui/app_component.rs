use crate::fake_source::FakeSource;
use campaign_dashboard::api::{ApiError, CampaignSource};
use campaign_dashboard::config::Config;
use campaign_dashboard::dashboard::DetailState;
use campaign_dashboard::logger::Logger;
use campaign_dashboard::models::CampaignType;
use campaign_dashboard::ui::core::{AppContext, EventType};
use campaign_dashboard::ui::{AppComponent, AppState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

fn app_with(source: Arc<FakeSource>) -> AppComponent {
    let source: Arc<dyn CampaignSource> = source;
    AppComponent::new(AppContext::new(source, Config::default(), Logger::new()))
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Let background fetches finish and feed their results back in
async fn settle(app: &mut AppComponent) {
    for _ in 0..20 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        for action in app.process_background_actions() {
            app.dispatch(action);
        }
        if !app.state().list.is_loading() && !app.state().detail.is_loading() {
            break;
        }
    }
}

fn names(state: &AppState) -> Vec<String> {
    state.list.records().iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.filters.page(), 1);
    assert!(state.list.records().is_empty());
    assert!(!state.list.is_loading());
    assert_eq!(state.detail.state(), &DetailState::Closed);
}

#[tokio::test]
async fn test_initial_load_and_paging() {
    let source = Arc::new(FakeSource::with_names(&["a", "b", "c", "d", "e", "f", "g"]));
    let mut app = app_with(Arc::clone(&source));

    app.trigger_initial_load();
    assert!(app.state().list.is_loading());
    settle(&mut app).await;

    assert_eq!(names(app.state()), vec!["a", "b", "c", "d", "e"]);
    assert_eq!(app.state().filters.total_pages(), 2);

    press(&mut app, KeyCode::Char('n'));
    settle(&mut app).await;
    assert_eq!(app.state().filters.page(), 2);
    assert_eq!(names(app.state()), vec!["f", "g"]);

    // Already on the last page
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.state().filters.page(), 2);

    assert_eq!(
        source.calls(),
        vec![
            "list page=1 limit=5 type=all".to_string(),
            "list page=2 limit=5 type=all".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_filters_drive_queries() {
    let source = Arc::new(FakeSource::with_names(&["a", "b"]));
    let mut app = app_with(Arc::clone(&source));
    app.trigger_initial_load();
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('t'));
    settle(&mut app).await;
    assert_eq!(app.state().filters.type_filter(), Some(CampaignType::Mensual));

    press(&mut app, KeyCode::Char('d'));
    assert!(app.is_dialog_visible());
    type_text(&mut app, "2024-01-01");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2024-02-01");
    press(&mut app, KeyCode::Enter);
    assert!(!app.is_dialog_visible());
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('s'));
    settle(&mut app).await;
    assert_eq!(app.state().filters.page_size(), 10);

    press(&mut app, KeyCode::Char('c'));
    settle(&mut app).await;
    assert!(app.state().filters.date_filter().is_none());

    assert_eq!(
        source.calls(),
        vec![
            "list page=1 limit=5 type=all".to_string(),
            "list page=1 limit=5 type=mensual".to_string(),
            "search 2024-01-01..2024-02-01 page=1 limit=5 type=mensual".to_string(),
            "search 2024-01-01..2024-02-01 page=1 limit=10 type=mensual".to_string(),
            "list page=1 limit=10 type=mensual".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_invalid_date_range_keeps_dialog_open() {
    let source = Arc::new(FakeSource::with_names(&["a"]));
    let mut app = app_with(Arc::clone(&source));
    app.trigger_initial_load();
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('d'));
    type_text(&mut app, "2024-05-01");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2024-04-01");
    press(&mut app, KeyCode::Enter);

    assert!(app.is_dialog_visible());
    assert!(app.state().filters.date_filter().is_none());
    assert_eq!(source.calls().len(), 1);

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());
}

#[tokio::test]
async fn test_detail_opens_and_closes() {
    let source = Arc::new(FakeSource::with_names(&["campania_demo"]));
    let mut app = app_with(Arc::clone(&source));
    app.trigger_initial_load();
    settle(&mut app).await;

    press(&mut app, KeyCode::Enter);
    assert!(app.state().detail.is_loading());
    assert_eq!(app.state().detail.selected_name(), Some("campania_demo"));
    settle(&mut app).await;

    let detail = app.state().detail.detail().expect("detail should be loaded");
    assert_eq!(detail.campaign.name, "campania_demo");

    // Paging keys are swallowed while the modal is open
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(source.calls().len(), 2);

    press(&mut app, KeyCode::Esc);
    assert!(!app.state().detail.is_open());
}

#[tokio::test]
async fn test_closing_detail_discards_late_result() {
    let source = Arc::new(FakeSource::with_names(&["campania_demo"]));
    let mut app = app_with(Arc::clone(&source));
    app.trigger_initial_load();
    settle(&mut app).await;

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    settle(&mut app).await;

    assert_eq!(app.state().detail.state(), &DetailState::Closed);
}

#[tokio::test]
async fn test_failed_list_and_retry() {
    let source = Arc::new(FakeSource {
        fail_with: Some(ApiError::Timeout(5000)),
        ..Default::default()
    });
    let mut app = app_with(Arc::clone(&source));
    app.trigger_initial_load();
    settle(&mut app).await;

    assert_eq!(app.state().list.error(), Some("Request timed out after 5000 ms"));
    assert!(app.state().list.records().is_empty());

    press(&mut app, KeyCode::Char('r'));
    settle(&mut app).await;
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn test_failed_fetch_resets_page_bounds() {
    let names: Vec<String> = (1..=12).map(|i| format!("campania_{}", i)).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let source = Arc::new(FakeSource {
        fail_after: Some(1),
        ..FakeSource::with_names(&names)
    });
    let mut app = app_with(Arc::clone(&source));
    app.trigger_initial_load();
    settle(&mut app).await;
    assert_eq!(app.state().filters.total_pages(), 3);

    press(&mut app, KeyCode::Char('n'));
    settle(&mut app).await;

    assert_eq!(app.state().list.error(), Some("Request failed with status code 500"));
    assert_eq!(app.state().list.total(), 0);
    assert_eq!(app.state().filters.confirmed_total(), 0);
    assert_eq!(app.state().filters.total_pages(), 1);
    assert_eq!(app.state().filters.page(), 1);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.state().filters.page(), 1);
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn test_quit_keys() {
    let source = Arc::new(FakeSource::default());
    let mut app = app_with(source);

    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_dialog_visible());

    // Ctrl+C quits even with a dialog open
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());

    let mut app = app_with(Arc::new(FakeSource::default()));
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
