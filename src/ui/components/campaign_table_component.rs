//! Campaign table: the main list view.
//!
//! Renders one of four states: the current page of campaigns, a skeleton while
//! the very first page loads, the empty-result message, or a full-region error.
//! While a later fetch is pending the previous page stays on screen.

use crate::constants::{
    ERROR_LOADING_CAMPAIGNS, RETRY_HINT, STATUS_LOADING, TABLE_EMPTY_MESSAGE, TABLE_HEADERS, TABLE_SKELETON_CELL,
    TABLE_TITLE,
};
use crate::models::Campaign;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::{datetime, format};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

/// Rows above the first record: top border and header
const ROWS_BEFORE_DATA: u16 = 2;

pub struct CampaignTableComponent {
    pub campaigns: Vec<Campaign>,
    pub selected_index: usize,
    pub table_state: TableState,
    loading: bool,
    error: Option<String>,
    page_size: usize,
    date_format: String,
    scrollbar: ScrollbarHelper,
    /// Area of the last render, used to map clicks to rows
    last_area: Rect,
}

impl Default for CampaignTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignTableComponent {
    pub fn new() -> Self {
        Self {
            campaigns: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
            loading: false,
            error: None,
            page_size: crate::constants::DEFAULT_PAGE_SIZE as usize,
            date_format: datetime::DISPLAY_DATE_FORMAT.to_string(),
            scrollbar: ScrollbarHelper::new(),
            last_area: Rect::default(),
        }
    }

    pub fn set_date_format(&mut self, date_format: &str) {
        self.date_format = date_format.to_string();
    }

    pub fn update_data(&mut self, campaigns: &[Campaign], loading: bool, error: Option<&str>, page_size: u32) {
        // Keep the selection when the same page is redrawn
        if self.campaigns.as_slice() != campaigns {
            self.campaigns = campaigns.to_vec();
            self.selected_index = 0;
        }
        self.loading = loading;
        self.error = error.map(str::to_string);
        self.page_size = page_size as usize;
        self.update_table_state();
    }

    fn update_table_state(&mut self) {
        if self.campaigns.is_empty() {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= self.campaigns.len() {
                self.selected_index = self.campaigns.len() - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_campaign(&self) -> Option<&Campaign> {
        self.campaigns.get(self.selected_index)
    }

    fn open_selected(&self) -> Action {
        match self.get_selected_campaign() {
            Some(campaign) => Action::OpenDetail(campaign.clone()),
            None => Action::None,
        }
    }

    /// Translate a click inside the table into a row selection
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.last_area;
        if !LayoutManager::contains(area, mouse.column, mouse.row) || self.error.is_some() {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let first_row = area.y + ROWS_BEFORE_DATA;
                let last_row = area.y + area.height.saturating_sub(1);
                if mouse.row < first_row || mouse.row >= last_row {
                    return Action::None;
                }

                let clicked_index = self.table_state.offset() + (mouse.row - first_row) as usize;
                if clicked_index >= self.campaigns.len() {
                    return Action::None;
                }

                self.selected_index = clicked_index;
                self.update_table_state();
                self.open_selected()
            }
            MouseEventKind::ScrollUp => Action::PreviousRow,
            MouseEventKind::ScrollDown => Action::NextRow,
            _ => Action::None,
        }
    }

    fn header() -> Row<'static> {
        Row::new(TABLE_HEADERS.iter().map(|h| Cell::from(*h)))
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    }

    fn widths() -> [Constraint; 7] {
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(20),
            Constraint::Length(21),
            Constraint::Length(14),
        ]
    }

    fn campaign_row(&self, campaign: &Campaign) -> Row<'static> {
        Row::new(vec![
            Cell::from(campaign.name.clone()),
            Cell::from(Span::styled(
                campaign.tipo_campania.to_uppercase(),
                Style::default().fg(Color::Cyan),
            )),
            Cell::from(datetime::format_display_date(Some(campaign.fecha_inicio.as_str()), &self.date_format)),
            Cell::from(datetime::format_display_date(Some(campaign.fecha_fin.as_str()), &self.date_format)),
            Cell::from(Line::from(format::format_number(campaign.impactos_personas)).alignment(Alignment::Right)),
            Cell::from(Line::from(format::format_number(campaign.impactos_vehiculos)).alignment(Alignment::Right)),
            Cell::from(Line::from(format::format_number(campaign.alcance)).alignment(Alignment::Right)),
        ])
    }

    fn title(&self) -> String {
        if self.loading {
            format!(" {} • {} ", TABLE_TITLE, STATUS_LOADING)
        } else {
            format!(" {} ", TABLE_TITLE)
        }
    }

    fn render_error(&self, f: &mut Frame, rect: Rect, error: &str) {
        let lines = vec![
            Line::from(ERROR_LOADING_CAMPAIGNS).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from(error.to_string()),
            Line::from(""),
            Line::from(RETRY_HINT).style(Style::default().fg(Color::Gray)),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title())
                    .style(Style::default().fg(Color::Red)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, rect);
    }

    fn render_skeleton(&self, f: &mut Frame, rect: Rect) {
        let rows = (0..self.page_size.max(1))
            .map(|_| Row::new((0..TABLE_HEADERS.len()).map(|_| Cell::from(TABLE_SKELETON_CELL))))
            .collect::<Vec<_>>();

        let table = Table::new(rows, Self::widths())
            .header(Self::header())
            .block(Block::default().borders(Borders::ALL).title(self.title()))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(table, rect);
    }

    fn render_empty(&self, f: &mut Frame, rect: Rect) {
        let table = Table::new(Vec::<Row>::new(), Self::widths())
            .header(Self::header())
            .block(Block::default().borders(Borders::ALL).title(self.title()));
        f.render_widget(table, rect);

        let message_area = Rect::new(
            rect.x + 1,
            rect.y + ROWS_BEFORE_DATA + 1,
            rect.width.saturating_sub(2),
            rect.height.saturating_sub(ROWS_BEFORE_DATA + 2).min(1),
        );
        let message = Paragraph::new(TABLE_EMPTY_MESSAGE)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(message, message_area);
    }
}

impl Component for CampaignTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousRow,
            KeyCode::Down | KeyCode::Char('j') => Action::NextRow,
            KeyCode::Enter => self.open_selected(),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.handle_mouse(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRow => {
                if !self.campaigns.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.campaigns.len();
                    self.update_table_state();
                }
                Action::None
            }
            Action::PreviousRow => {
                if !self.campaigns.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.campaigns.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_table_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_area = rect;

        if let Some(error) = self.error.clone() {
            self.render_error(f, rect, &error);
            return;
        }

        if self.campaigns.is_empty() {
            if self.loading {
                self.render_skeleton(f, rect);
            } else {
                self.render_empty(f, rect);
            }
            return;
        }

        // Header counts as one line of content
        let (table_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, self.campaigns.len() + 1);
        self.last_area = table_area;

        let rows = self.campaigns.iter().map(|c| self.campaign_row(c)).collect::<Vec<_>>();
        let table = Table::new(rows, Self::widths())
            .header(Self::header())
            .block(Block::default().borders(Borders::ALL).title(self.title()))
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut table_state = self.table_state.clone();
        f.render_stateful_widget(table, table_area, &mut table_state);
        self.table_state = table_state;

        let viewport = table_area.height.saturating_sub(ROWS_BEFORE_DATA + 1) as usize;
        self.scrollbar
            .update_state(self.campaigns.len(), self.selected_index, Some(viewport));
        self.scrollbar.render(f, scrollbar_area);
    }
}
