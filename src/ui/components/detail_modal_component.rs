//! Campaign detail modal.
//!
//! Drawn over the table while a detail is open. Loading and failure are shown
//! inside the modal; the data itself is laid out as summary cards, paired bars
//! per period and the best performing sites.

use crate::constants::{
    DETAIL_CHART_ROWS, DETAIL_GENERAL_HEADING, DETAIL_LOADING, DETAIL_PERIODS_HEADING, DETAIL_PERIODS_SUBTITLE,
    DETAIL_SITES_HEADING, DETAIL_SITES_SUBTITLE, EMPTY_VALUE,
};
use crate::dashboard::DetailState;
use crate::models::{CampaignDetail, CampaignPeriod, CampaignSite};
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::{datetime, format};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the longest bar in the period chart
const BAR_WIDTH: usize = 30;
const PERSONAS_COLOR: Color = Color::Cyan;
const VEHICULOS_COLOR: Color = Color::Magenta;

pub struct DetailModalComponent {
    state: DetailState,
    date_format: String,
    scroll_offset: u16,
}

impl Default for DetailModalComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailModalComponent {
    pub fn new() -> Self {
        Self {
            state: DetailState::Closed,
            date_format: datetime::DISPLAY_DATE_FORMAT.to_string(),
            scroll_offset: 0,
        }
    }

    pub fn set_date_format(&mut self, date_format: &str) {
        self.date_format = date_format.to_string();
    }

    pub fn update_data(&mut self, state: &DetailState) {
        if self.state != *state {
            if !matches!(
                (&self.state, state),
                (DetailState::Opening { .. }, DetailState::Loaded { .. } | DetailState::Failed { .. })
            ) {
                self.scroll_offset = 0;
            }
            self.state = state.clone();
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    fn heading(text: &str) -> Line<'static> {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    }

    fn subtitle(text: &str) -> Line<'static> {
        Line::from(Span::styled(text.to_string(), Style::default().fg(Color::Gray)))
    }

    fn card(label: &str, value: String) -> Vec<Span<'static>> {
        vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw("    "),
        ]
    }

    fn header_lines(&self, detail: &CampaignDetail) -> Vec<Line<'static>> {
        let campaign = &detail.campaign;
        vec![
            Line::from(vec![
                Span::styled(
                    campaign.tipo_campania.to_uppercase(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(campaign.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Self::subtitle(&format!(
                "{} – {}",
                datetime::format_display_date(Some(campaign.fecha_inicio.as_str()), &self.date_format),
                datetime::format_display_date(Some(campaign.fecha_fin.as_str()), &self.date_format)
            )),
        ]
    }

    fn general_lines(detail: &CampaignDetail) -> Vec<Line<'static>> {
        let summary = &detail.general_summary;
        let mut counts = Self::card("Impactos personas", format::format_number(summary.impactos_personas));
        counts.extend(Self::card("Impactos vehículos", format::format_number(summary.impactos_vehiculos)));
        counts.extend(Self::card("Alcance", format::format_number(summary.alcance)));

        let mut frequencies = Self::card("Frecuencia calculada", format::format_plain(summary.frecuencia_calculada));
        frequencies.extend(Self::card("Frecuencia promedio", format::format_plain(summary.frecuencia_promedio)));

        vec![Self::heading(DETAIL_GENERAL_HEADING), Line::from(counts), Line::from(frequencies)]
    }

    fn bar_line(label: &str, value: Option<i64>, width: usize, color: Color) -> Line<'static> {
        Line::from(vec![
            Span::raw(format!("  {:<10}", label)),
            Span::styled("█".repeat(width), Style::default().fg(color)),
            Span::raw(" "),
            Span::raw(format::format_number(value)),
        ])
    }

    fn period_lines(detail: &CampaignDetail) -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::heading(DETAIL_PERIODS_HEADING),
            Self::subtitle(DETAIL_PERIODS_SUBTITLE),
        ];

        if detail.periods.is_empty() {
            lines.push(Line::from(EMPTY_VALUE));
        }
        for period in detail.periods.iter().take(DETAIL_CHART_ROWS) {
            let (personas, vehiculos) = period_bar_widths(period, BAR_WIDTH);
            lines.push(Line::from(Span::styled(
                period.period.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Self::bar_line("Personas", period.impactos_periodo_personas, personas, PERSONAS_COLOR));
            lines.push(Self::bar_line("Vehículos", period.impactos_periodo_vehiculos, vehiculos, VEHICULOS_COLOR));
        }

        let totals = &detail.period_summary;
        lines.push(Self::subtitle(&format!(
            "Total periodos: {} • Personas: {} • Vehículos: {}",
            totals.total_periodos,
            format::format_number(Some(totals.impactos_personas)),
            format::format_number(Some(totals.impactos_vehiculos))
        )));
        lines
    }

    fn site_line(rank: usize, site: &CampaignSite) -> Line<'static> {
        let location = [site.municipio.as_deref(), site.estado.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Line::from(vec![
            Span::styled(format!("{:>2}. ", rank), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:<14}", site.codigo_del_sitio), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{:<32}", format::format_text(Some(location.as_str())))),
            Span::styled(
                format::format_number(site.impactos_mensuales),
                Style::default().fg(PERSONAS_COLOR),
            ),
        ])
    }

    fn site_lines(detail: &CampaignDetail) -> Vec<Line<'static>> {
        let mut lines = vec![Self::heading(DETAIL_SITES_HEADING), Self::subtitle(DETAIL_SITES_SUBTITLE)];

        let top = detail.top_sites(DETAIL_CHART_ROWS);
        if top.is_empty() {
            lines.push(Line::from(EMPTY_VALUE));
        }
        lines.extend(top.iter().enumerate().map(|(i, site)| Self::site_line(i + 1, site)));

        let totals = &detail.site_summary;
        lines.push(Self::subtitle(&format!(
            "Total sitios: {} • Impactos mensuales: {} • Impactos catorcenales: {} • Alcance mensual promedio: {}",
            totals.total_sitios,
            format::format_number(Some(totals.impactos_mensuales)),
            format::format_number(Some(totals.impactos_catorcenal)),
            format::format_decimal(Some(totals.alcance_mensual_promedio))
        )));
        lines
    }

    /// Full modal body for a loaded detail
    pub fn detail_lines(&self, detail: &CampaignDetail) -> Vec<Line<'static>> {
        let mut lines = self.header_lines(detail);
        lines.push(Line::from(""));
        lines.extend(Self::general_lines(detail));
        lines.push(Line::from(""));
        lines.extend(Self::period_lines(detail));
        lines.push(Line::from(""));
        lines.extend(Self::site_lines(detail));
        lines
    }

    fn body(&self) -> (String, Vec<Line<'static>>, Color) {
        match &self.state {
            DetailState::Closed => (String::new(), Vec::new(), Color::White),
            DetailState::Opening { name, .. } => (
                name.clone(),
                vec![Line::from(Span::styled(DETAIL_LOADING, Style::default().fg(Color::Yellow)))],
                Color::Cyan,
            ),
            DetailState::Failed { name, error } => (
                name.clone(),
                vec![Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))],
                Color::Red,
            ),
            DetailState::Loaded { name, detail } => (name.clone(), self.detail_lines(detail), Color::Cyan),
        }
    }
}

/// Bar lengths for a period, both scaled to the larger of its two values
pub fn period_bar_widths(period: &CampaignPeriod, width: usize) -> (usize, usize) {
    let personas = period.impactos_periodo_personas.unwrap_or(0).max(0);
    let vehiculos = period.impactos_periodo_vehiculos.unwrap_or(0).max(0);
    let max = personas.max(vehiculos);
    if max == 0 {
        return (0, 0);
    }

    let scale = |value: i64| ((value as f64 / max as f64) * width as f64).round() as usize;
    (scale(personas), scale(vehiculos))
}

impl Component for DetailModalComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::CloseDetail,
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
            KeyCode::Home => Action::ScrollToTop,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if !self.is_visible() {
            return action;
        }
        match action {
            Action::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            Action::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::ScrollToTop => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        let (width, height) = LayoutManager::detail_modal_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        f.render_widget(Clear, area);

        let (title, lines, color) = self.body();
        let block = common::create_dialog_block(&title, color);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

        let max_scroll = (lines.len() as u16).saturating_sub(chunks[0].height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let content = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        f.render_widget(content, chunks[0]);

        let instructions = common::create_instructions_paragraph(&[
            ("j/k", Color::Cyan, " Scroll"),
            shortcuts::SEPARATOR,
            shortcuts::ESC_CLOSE,
        ])
        .alignment(Alignment::Center);
        f.render_widget(instructions, chunks[1]);
    }
}
