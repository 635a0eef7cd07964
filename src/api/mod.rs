//! Remote data client abstraction.
//!
//! This module defines the interface the dashboard uses to query the campaign
//! analytics API, along with the error type every fetch reports.

use async_trait::async_trait;

use crate::models::{Campaign, CampaignDetail, CampaignType, DateRange, PaginatedResponse};

pub mod http;

pub use http::HttpCampaignClient;

/// Failures of a single API call.
///
/// The `Display` output is the message shown to the user in place of the
/// affected view region.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!("Request failed with status code {}: {}", status, detail),
        None => format!("Request failed with status code {}", status),
    }
}

/// Query operations the dashboard needs from the campaign API.
#[async_trait]
pub trait CampaignSource: Send + Sync {
    /// Plain listing, newest campaigns first.
    async fn list(
        &self,
        page: u32,
        page_size: u32,
        type_filter: Option<CampaignType>,
    ) -> Result<PaginatedResponse<Campaign>, ApiError>;

    /// Campaigns whose run overlaps the given range.
    async fn search_by_date_range(
        &self,
        range: DateRange,
        page: u32,
        page_size: u32,
        type_filter: Option<CampaignType>,
    ) -> Result<PaginatedResponse<Campaign>, ApiError>;

    /// Full detail for one campaign, looked up by name.
    async fn get_detail(&self, name: &str) -> Result<CampaignDetail, ApiError>;
}
