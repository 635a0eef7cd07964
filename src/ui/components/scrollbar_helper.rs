//! Scrollbar for the campaign table.
//!
//! The table only needs a scrollbar when a large page size meets a short
//! terminal; this helper decides that and draws it in the table's style.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Debug, Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record content length, selected row and visible rows
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_items).position(current_position);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    /// Whether `total_lines` overflow a bordered area of `rect`'s height
    pub fn needs_scrollbar(total_lines: usize, rect: Rect) -> bool {
        total_lines > rect.height.saturating_sub(2) as usize
    }

    /// Split `rect` into the content area and, when needed, a one-column
    /// scrollbar track inside the right border
    pub fn calculate_areas(rect: Rect, total_lines: usize) -> (Rect, Option<Rect>) {
        if !Self::needs_scrollbar(total_lines, rect) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
