//! HTTP implementation of [`CampaignSource`] backed by reqwest.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{ApiError, CampaignSource};
use crate::config::ApiConfig;
use crate::models::{Campaign, CampaignDetail, CampaignType, DateRange, PaginatedResponse};

/// Client for the campaign analytics REST API.
///
/// Built once at startup from an explicit [`ApiConfig`]; every request is a
/// single attempt bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpCampaignClient {
    client: Client,
    base_url: Url,
    timeout_ms: u64,
}

impl HttpCampaignClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid base URL '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidRequest(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn append_paging(url: &mut Url, page: u32, page_size: u32, type_filter: Option<CampaignType>) {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("page", &page.to_string());
        pairs.append_pair("limit", &page_size.to_string());
        if let Some(kind) = type_filter {
            pairs.append_pair("tipo_campania", kind.as_str());
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        log::debug!("Making request to: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        log::debug!("Received {} from {}", status, url);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(self.timeout_ms)
            } else {
                ApiError::Decode(e.to_string())
            }
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout(self.timeout_ms)
        } else {
            ApiError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl CampaignSource for HttpCampaignClient {
    async fn list(
        &self,
        page: u32,
        page_size: u32,
        type_filter: Option<CampaignType>,
    ) -> Result<PaginatedResponse<Campaign>, ApiError> {
        // Trailing slash matches the backend route
        let mut url = self.endpoint(&["campaigns", ""])?;
        Self::append_paging(&mut url, page, page_size, type_filter);
        self.get_json(url).await
    }

    async fn search_by_date_range(
        &self,
        range: DateRange,
        page: u32,
        page_size: u32,
        type_filter: Option<CampaignType>,
    ) -> Result<PaginatedResponse<Campaign>, ApiError> {
        let mut url = self.endpoint(&["campaigns", "search-by-date"])?;
        url.query_pairs_mut()
            .append_pair("start_date", &range.start_param())
            .append_pair("end_date", &range.end_param());
        Self::append_paging(&mut url, page, page_size, type_filter);
        self.get_json(url).await
    }

    async fn get_detail(&self, name: &str) -> Result<CampaignDetail, ApiError> {
        let url = self.endpoint(&["campaigns", name])?;
        self.get_json(url).await
    }
}

/// Pull the human-readable message out of an error body.
///
/// The backend answers `{"detail": "..."}`; request validation failures carry
/// a list of `{"msg": "..."}` objects instead.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
