//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application
pub const APP_TITLE: &str = "Campaign Analytics";
pub const CONFIG_FILE_NAME: &str = "campaign-dashboard.toml";
pub const APP_DIR_NAME: &str = "campaign-dashboard";
pub const LOG_FILE_NAME: &str = "campaign-dashboard.log";
/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "CAMPAIGN_API_URL";

// Remote API defaults
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 5000;
pub const MAX_API_TIMEOUT_MS: u64 = 60_000;

// Pagination
/// Page sizes offered to the user
pub const PAGE_SIZES: [u32; 3] = [5, 10, 15];
pub const DEFAULT_PAGE_SIZE: u32 = 5;

// Table
pub const TABLE_TITLE: &str = "Campañas";
pub const TABLE_SKELETON_CELL: &str = "░░░░░░░░";
pub const TABLE_EMPTY_MESSAGE: &str = "No hay campañas para los filtros actuales";
pub const TABLE_HEADERS: [&str; 7] = [
    "Campaña",
    "Tipo",
    "Inicio",
    "Fin",
    "Impactos (Personas)",
    "Impactos (Vehículos)",
    "Alcance",
];

// Filters
pub const FILTER_TYPE_LABEL: &str = "Campaign Type";
pub const FILTER_ALL_TYPES: &str = "All Types";
pub const FILTER_DATE_TITLE: &str = "Search by Date Range";
pub const FILTER_NO_DATE: &str = "Any date";

// Date range form
pub const FORM_START_LABEL: &str = "Fecha inicio";
pub const FORM_END_LABEL: &str = "Fecha fin";
/// Shown after the Enter key in the form instructions
pub const FORM_SUBMIT_HINT: &str = " Buscar";
pub const ERROR_END_BEFORE_START: &str = "La fecha final debe ser posterior";
pub const ERROR_DATE_REQUIRED: &str = "Fecha requerida";
pub const ERROR_DATE_INVALID: &str = "Fecha inválida";

// Detail modal
pub const DETAIL_LOADING: &str = "Cargando detalle…";
pub const DETAIL_GENERAL_HEADING: &str = "Resumen general";
pub const DETAIL_PERIODS_HEADING: &str = "Impactos por periodo";
pub const DETAIL_PERIODS_SUBTITLE: &str = "Comparativa personas vs vehículos";
pub const DETAIL_SITES_HEADING: &str = "Sitios con más impactos";
pub const DETAIL_SITES_SUBTITLE: &str = "Basado en impactos mensuales registrados";
/// How many periods and sites the detail charts show
pub const DETAIL_CHART_ROWS: usize = 6;

// Placeholders
pub const EMPTY_VALUE: &str = "—";

// Status and errors
pub const STATUS_LOADING: &str = "Loading...";
pub const ERROR_LOADING_CAMPAIGNS: &str = "Error loading campaigns";
pub const RETRY_HINT: &str = "Press 'r' to retry";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
