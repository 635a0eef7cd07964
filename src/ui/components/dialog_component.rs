//! Modal dialog component.
//!
//! Hosts the overlays that sit above the dashboard: the date-range form, the
//! help screen and the logs viewer. At most one is visible at a time; while
//! visible it receives every key event.

use crate::dashboard::DateRangeForm;
use crate::logger::Logger;
use crate::ui::components::dialogs::{date_range_dialog, scroll_behavior::DialogScroll, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

#[derive(Default)]
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub date_form: DateRangeForm,
    pub scroll: DialogScroll,
    logger: Option<Logger>,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.date_form = DateRangeForm::new();
        self.scroll.reset();
    }

    fn handle_date_form_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.date_form.toggle_focus();
                Action::None
            }
            KeyCode::Backspace => {
                self.date_form.backspace();
                Action::None
            }
            KeyCode::Char(c) => {
                self.date_form.input(c);
                Action::None
            }
            KeyCode::Enter => match self.date_form.submit() {
                Some((start, end)) => {
                    self.clear_dialog();
                    Action::ApplyDateFilter { start, end }
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent, close_keys: &[KeyCode]) -> Action {
        if key.code == KeyCode::Esc || close_keys.contains(&key.code) {
            return Action::HideDialog;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
            KeyCode::PageUp => {
                self.scroll.page_up();
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll.page_down();
                Action::None
            }
            KeyCode::Home => Action::ScrollToTop,
            KeyCode::End => Action::ScrollToBottom,
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            Some(DialogType::DateRange { .. }) => self.handle_date_form_key(key),
            Some(DialogType::Help) => self.handle_scroll_key(key, &[KeyCode::Char('?'), KeyCode::Char('q')]),
            Some(DialogType::Logs) => self.handle_scroll_key(key, &[KeyCode::Char('G'), KeyCode::Char('q')]),
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.date_form = match &dialog_type {
                    DialogType::DateRange { start, end } => DateRangeForm::with_values(start, end),
                    _ => DateRangeForm::new(),
                };
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::ScrollUp if self.is_visible() => {
                self.scroll.up();
                Action::None
            }
            Action::ScrollDown if self.is_visible() => {
                self.scroll.down();
                Action::None
            }
            Action::ScrollToTop if self.is_visible() => {
                self.scroll.to_top();
                Action::None
            }
            Action::ScrollToBottom if self.is_visible() => {
                self.scroll.to_bottom();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::DateRange { .. }) => date_range_dialog::render_date_range_dialog(f, rect, &self.date_form),
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll);
            }
            None => {}
        }
    }
}
