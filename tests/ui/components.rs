use crate::buffer_contains;
use campaign_dashboard::dashboard::{DetailState, FormField};
use campaign_dashboard::models::{Campaign, CampaignDetail, GeneralSummary, PeriodSummary, SiteSummary};
use campaign_dashboard::ui::components::{
    CampaignTableComponent, DetailModalComponent, DialogComponent, FilterBarComponent, PaginationComponent,
};
use campaign_dashboard::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char(c))), Action::None);
    }
}

fn render<C: Component>(component: &mut C, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            component.render(f, area);
        })
        .unwrap();
    terminal
}

fn demo_campaign() -> Campaign {
    Campaign::new("campania_demo", "mensual", "2024-01-01", "2024-01-31")
}

fn demo_table() -> CampaignTableComponent {
    let mut table = CampaignTableComponent::new();
    table.update_data(&[demo_campaign()], false, None, 5);
    table
}

#[test]
fn test_table_enter_opens_selected_campaign() {
    let mut table = demo_table();
    assert_eq!(
        table.handle_key_events(key(KeyCode::Enter)),
        Action::OpenDetail(demo_campaign())
    );
}

#[test]
fn test_table_enter_on_empty_page_does_nothing() {
    let mut table = CampaignTableComponent::new();
    table.update_data(&[], false, None, 5);
    assert_eq!(table.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_table_row_click_opens_detail() {
    let mut table = demo_table();
    render(&mut table, 140, 20);

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 5,
        row: 2,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(
        table.handle_mouse_events(click),
        Action::OpenDetail(demo_campaign())
    );

    // Header row is not a campaign
    let header_click = MouseEvent { row: 1, ..click };
    assert_eq!(table.handle_mouse_events(header_click), Action::None);
}

#[test]
fn test_table_selection_wraps() {
    let mut table = CampaignTableComponent::new();
    table.update_data(
        &[
            Campaign::new("a", "mensual", "2024-01-01", "2024-01-31"),
            Campaign::new("b", "catorcenal", "2024-02-01", "2024-02-14"),
        ],
        false,
        None,
        5,
    );

    assert_eq!(table.update(Action::PreviousRow), Action::None);
    assert_eq!(table.get_selected_campaign().map(|c| c.name.as_str()), Some("b"));
    table.update(Action::NextRow);
    assert_eq!(table.get_selected_campaign().map(|c| c.name.as_str()), Some("a"));
}

#[test]
fn test_table_renders_rows() {
    let mut table = demo_table();
    let terminal = render(&mut table, 140, 20);
    let buffer = terminal.backend().buffer();

    assert!(buffer_contains(buffer, "Tipo"));
    assert!(buffer_contains(buffer, "campania_demo"));
    assert!(buffer_contains(buffer, "MENSUAL"));
    assert!(buffer_contains(buffer, "01/01/2024"));
}

#[test]
fn test_empty_table_renders_message() {
    let mut table = CampaignTableComponent::new();
    table.update_data(&[], false, None, 5);
    let terminal = render(&mut table, 100, 20);

    assert!(buffer_contains(terminal.backend().buffer(), "No hay campañas para los filtros actuales"));
}

#[test]
fn test_table_error_replaces_rows() {
    let mut table = demo_table();
    table.update_data(&[], false, Some("Network error: connection refused"), 5);
    let terminal = render(&mut table, 100, 20);
    let buffer = terminal.backend().buffer();

    assert!(buffer_contains(buffer, "Error loading campaigns"));
    assert!(buffer_contains(buffer, "Network error: connection refused"));
    assert!(!buffer_contains(buffer, "campania_demo"));
}

#[test]
fn test_date_dialog_submits_typed_range() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::DateRange {
        start: String::new(),
        end: String::new(),
    }));
    assert!(dialog.is_visible());

    type_text(&mut dialog, "2024-01-01");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "2024-02-01");

    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::ApplyDateFilter {
            start: "2024-01-01".to_string(),
            end: "2024-02-01".to_string(),
        }
    );
}

#[test]
fn test_date_dialog_rejects_reversed_range() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::DateRange {
        start: String::new(),
        end: String::new(),
    }));

    type_text(&mut dialog, "2024-05-01");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "2024-04-01");

    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(dialog.is_visible());
    assert_eq!(
        dialog.date_form.error_for(FormField::End),
        Some("La fecha final debe ser posterior")
    );
    assert_eq!(dialog.date_form.error_for(FormField::Start), None);

    let terminal = render(&mut dialog, 100, 30);
    assert!(buffer_contains(terminal.backend().buffer(), "La fecha final debe ser posterior"));
}

#[test]
fn test_date_dialog_prefills_and_escapes() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::DateRange {
        start: "2024-01-01".to_string(),
        end: "2024-02-01".to_string(),
    }));
    assert_eq!(dialog.date_form.start, "2024-01-01");
    assert_eq!(dialog.date_form.end, "2024-02-01");

    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);
    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_help_dialog_close_keys() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::ScrollDown);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('q'))), Action::HideDialog);
}

#[test]
fn test_filter_bar_keys() {
    let mut bar = FilterBarComponent::new();
    bar.update_data(None, None, 5);

    assert_eq!(bar.handle_key_events(key(KeyCode::Char('t'))), Action::CycleTypeFilter);
    assert_eq!(bar.handle_key_events(key(KeyCode::Char('s'))), Action::CyclePageSize);
    assert_eq!(
        bar.handle_key_events(key(KeyCode::Char('d'))),
        Action::ShowDialog(DialogType::DateRange {
            start: String::new(),
            end: String::new(),
        })
    );
    // Nothing to clear yet
    assert_eq!(bar.handle_key_events(key(KeyCode::Char('c'))), Action::None);
}

#[test]
fn test_pagination_label_and_keys() {
    let mut pagination = PaginationComponent::new();
    pagination.update_data(2, 7, 33, false);

    assert_eq!(pagination.page_label(), "Page 2 of 7");
    assert_eq!(pagination.handle_key_events(key(KeyCode::Char('n'))), Action::NextPage);
    assert_eq!(pagination.handle_key_events(key(KeyCode::Left)), Action::PreviousPage);

    let terminal = render(&mut pagination, 120, 1);
    assert!(buffer_contains(terminal.backend().buffer(), "Page 2 of 7"));
}

#[test]
fn test_detail_modal_states() {
    let mut modal = DetailModalComponent::new();
    assert!(!modal.is_visible());

    modal.update_data(&DetailState::Opening {
        name: "campania_demo".to_string(),
        seq: 1,
    });
    assert!(modal.is_visible());
    let terminal = render(&mut modal, 120, 40);
    assert!(buffer_contains(terminal.backend().buffer(), "Cargando detalle"));

    modal.update_data(&DetailState::Loaded {
        name: "campania_demo".to_string(),
        detail: Box::new(CampaignDetail {
            campaign: Campaign::new("campania_demo", "mensual", "2024-01-01", "2024-01-31"),
            periods: Vec::new(),
            sites: Vec::new(),
            general_summary: GeneralSummary::default(),
            period_summary: PeriodSummary::default(),
            site_summary: SiteSummary::default(),
        }),
    });
    let terminal = render(&mut modal, 120, 40);
    let buffer = terminal.backend().buffer();
    assert!(buffer_contains(buffer, "MENSUAL"));
    assert!(buffer_contains(buffer, "Resumen general"));

    assert_eq!(modal.handle_key_events(key(KeyCode::Esc)), Action::CloseDetail);
}

#[test]
fn test_render_into_small_area_does_not_panic() {
    let mut table = demo_table();
    let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
    terminal
        .draw(|f| table.render(f, Rect::new(0, 0, 10, 3)))
        .unwrap();
}
