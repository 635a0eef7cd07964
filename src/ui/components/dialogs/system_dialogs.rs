use super::scroll_behavior::DialogScroll;
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation},
    Frame,
};

pub const HELP_CONTENT: &str = r"
CAMPAIGN ANALYTICS
==================

NAVIGATION
----------
j/k, ↓/↑    Move row selection
Enter       Open campaign detail
Click       Open campaign detail for the clicked row
Esc         Close the detail or the current dialog

PAGINATION
----------
n, →        Next page
p, ←        Previous page
s           Cycle page size (5, 10, 15)

FILTERS
-------
t           Cycle campaign type (all, mensual, catorcenal)
d           Search by date range
c           Clear the date range
r           Retry the current query

DATE RANGE FORM
---------------
0-9, -      Type a date (YYYY-MM-DD)
Tab         Switch between start and end
Enter       Search
Esc         Cancel

DETAIL
------
j/k         Scroll
Esc, q      Close

GENERAL
-------
?           Toggle this help
G           Show logs
q, Ctrl+C   Quit

Missing values are shown as —
";

/// Render a scrollable block of text in a large centered overlay
fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll: &mut DialogScroll,
) {
    let overlay = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, overlay);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        overlay.x + margin_x,
        overlay.y + margin_y,
        overlay.width.saturating_sub(margin_x * 2),
        overlay.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll.offset.min(max_scroll);

    scroll.offset = clamped_offset;
    scroll.scrollbar_state = scroll
        .scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    render_scrollable_text(f, area, DIALOG_TITLE_HELP, HELP_CONTENT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut DialogScroll) {
    let content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };
    render_scrollable_text(f, area, DIALOG_TITLE_LOGS, &content, scroll);
}
