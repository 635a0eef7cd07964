//! Pagination footer

use crate::constants::STATUS_LOADING;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One-line footer: current page, total results and shortcuts
#[derive(Default)]
pub struct PaginationComponent {
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub loading: bool,
}

impl PaginationComponent {
    pub fn new() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            ..Self::default()
        }
    }

    pub fn update_data(&mut self, page: u32, total_pages: u32, total: u64, loading: bool) {
        self.page = page;
        self.total_pages = total_pages;
        self.total = total;
        self.loading = loading;
    }

    /// `Page X of Y`
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

impl Component for PaginationComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('n') | KeyCode::Right => Action::NextPage,
            KeyCode::Char('p') | KeyCode::Left => Action::PreviousPage,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).split(rect);

        let mut left = vec![
            Span::styled(self.page_label(), Style::default().fg(Color::White)),
            Span::styled(format!(" • {} results", self.total), Style::default().fg(Color::Gray)),
        ];
        if self.loading {
            left.push(Span::styled(format!(" • {}", STATUS_LOADING), Style::default().fg(Color::Yellow)));
        }
        f.render_widget(Paragraph::new(Line::from(left)), chunks[0]);

        let shortcuts = "p/← prev • n/→ next • Enter: detail • r: retry • ?: help • q: quit";
        let right = Paragraph::new(shortcuts)
            .style(Style::default().fg(Color::Gray))
            .alignment(ratatui::layout::Alignment::Right);
        f.render_widget(right, chunks[1]);
    }
}
