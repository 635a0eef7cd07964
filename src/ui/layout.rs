//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the filter bar, borders included
const FILTER_BAR_HEIGHT: u16 = 3;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into filter bar, campaign table and pagination footer
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FILTER_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Detail modal size; narrow terminals get almost the whole screen
    #[must_use]
    pub fn detail_modal_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 100 { 96 } else { 80 };
        let height = if screen_height < 40 { 96 } else { 85 };
        (width, height)
    }

    /// Whether a screen position falls inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
