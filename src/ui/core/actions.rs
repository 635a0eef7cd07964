use crate::api::ApiError;
use crate::models::{Campaign, CampaignDetail, PaginatedResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextRow,
    PreviousRow,

    // Pagination and filters
    NextPage,
    PreviousPage,
    CycleTypeFilter,
    CyclePageSize,
    ApplyDateFilter {
        start: String,
        end: String,
    },
    ClearDateFilter,
    Retry,

    // Detail modal
    OpenDetail(Campaign),
    CloseDetail,

    // Background results
    ListLoaded {
        seq: u64,
        result: Result<PaginatedResponse<Campaign>, ApiError>,
    },
    DetailLoaded {
        seq: u64,
        result: Result<CampaignDetail, ApiError>,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    /// Date-range form, pre-filled with the active filter
    DateRange { start: String, end: String },
    Help,
    Logs,
}
