use super::common::{self, shortcuts};
use crate::constants::{FILTER_DATE_TITLE, FORM_END_LABEL, FORM_START_LABEL, FORM_SUBMIT_HINT};
use crate::dashboard::{DateRangeForm, FormField};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

/// Start field, its error, end field, its error and the instructions
const DIALOG_HEIGHT: u16 = 2 + 3 + 1 + 3 + 1 + 1;

pub fn render_date_range_dialog(f: &mut Frame, area: Rect, form: &DateRangeForm) {
    let dialog_area = LayoutManager::centered_rect_lines(50, DIALOG_HEIGHT, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" {} (YYYY-MM-DD) ", FILTER_DATE_TITLE);
    let block = common::create_dialog_block(&title, Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let start = common::create_input_paragraph(&form.start, FORM_START_LABEL, form.focus == FormField::Start);
    f.render_widget(start, chunks[0]);
    f.render_widget(common::create_error_paragraph(form.error_for(FormField::Start)), chunks[1]);

    let end = common::create_input_paragraph(&form.end, FORM_END_LABEL, form.focus == FormField::End);
    f.render_widget(end, chunks[2]);
    f.render_widget(common::create_error_paragraph(form.error_for(FormField::End)), chunks[3]);

    let instructions = common::create_instructions_paragraph(&[
        ("Enter", Color::Green, FORM_SUBMIT_HINT),
        shortcuts::SEPARATOR,
        shortcuts::TAB_SWITCH,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[4]);
}
