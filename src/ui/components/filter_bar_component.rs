use crate::constants::{FILTER_ALL_TYPES, FILTER_DATE_TITLE, FILTER_NO_DATE, FILTER_TYPE_LABEL};
use crate::models::{CampaignType, DateRange};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Top bar showing the active filters and the keys that change them
#[derive(Default)]
pub struct FilterBarComponent {
    pub type_filter: Option<CampaignType>,
    pub date_filter: Option<DateRange>,
    pub page_size: u32,
}

impl FilterBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, type_filter: Option<CampaignType>, date_filter: Option<DateRange>, page_size: u32) {
        self.type_filter = type_filter;
        self.date_filter = date_filter;
        self.page_size = page_size;
    }

    fn type_label(&self) -> &'static str {
        self.type_filter.map(|t| t.label()).unwrap_or(FILTER_ALL_TYPES)
    }

    fn date_label(&self) -> String {
        match self.date_filter {
            Some(range) => format!("{} → {}", range.start_param(), range.end_param()),
            None => FILTER_NO_DATE.to_string(),
        }
    }

    fn date_dialog(&self) -> DialogType {
        match self.date_filter {
            Some(range) => DialogType::DateRange {
                start: range.start_param(),
                end: range.end_param(),
            },
            None => DialogType::DateRange {
                start: String::new(),
                end: String::new(),
            },
        }
    }
}

fn key_hint(key: &'static str) -> Span<'static> {
    Span::styled(format!(" ({})", key), Style::default().fg(Color::DarkGray))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}

impl Component for FilterBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('t') => Action::CycleTypeFilter,
            KeyCode::Char('s') => Action::CyclePageSize,
            KeyCode::Char('d') => Action::ShowDialog(self.date_dialog()),
            KeyCode::Char('c') if self.date_filter.is_some() => Action::ClearDateFilter,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let separator = Span::styled("  │  ", Style::default().fg(Color::Gray));
        let mut spans = vec![
            Span::raw(format!("{}: ", FILTER_TYPE_LABEL)),
            value(self.type_label().to_string()),
            key_hint("t"),
            separator.clone(),
            Span::raw(format!("{}: ", FILTER_DATE_TITLE)),
            value(self.date_label()),
        ];
        if self.date_filter.is_some() {
            spans.push(key_hint("d, c clears"));
        } else {
            spans.push(key_hint("d"));
        }
        spans.push(separator);
        spans.push(Span::raw("Page size: "));
        spans.push(value(self.page_size.to_string()));
        spans.push(key_hint("s"));

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} ", crate::constants::APP_TITLE))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
        f.render_widget(bar, rect);
    }
}
