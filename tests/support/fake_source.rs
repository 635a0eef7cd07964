use async_trait::async_trait;
use campaign_dashboard::api::{ApiError, CampaignSource};
use campaign_dashboard::models::{
    Campaign, CampaignDetail, CampaignType, DateRange, GeneralSummary, PaginatedResponse, PeriodSummary, SiteSummary,
};
use std::sync::Mutex;

/// In-memory source recording every call it receives
#[derive(Default)]
pub struct FakeSource {
    pub campaigns: Vec<Campaign>,
    pub calls: Mutex<Vec<String>>,
    pub fail_with: Option<ApiError>,
    /// Listings fail once this many calls have already been answered
    pub fail_after: Option<usize>,
}

impl FakeSource {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            campaigns: names
                .iter()
                .map(|n| Campaign::new(n, "mensual", "2024-01-01", "2024-01-31"))
                .collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn page(&self, page: u32, page_size: u32) -> Result<PaginatedResponse<Campaign>, ApiError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        if let Some(limit) = self.fail_after {
            if self.calls.lock().unwrap().len() > limit {
                return Err(ApiError::Status {
                    status: 500,
                    detail: None,
                });
            }
        }
        let start = ((page.max(1) - 1) * page_size) as usize;
        Ok(PaginatedResponse {
            data: self
                .campaigns
                .iter()
                .skip(start)
                .take(page_size as usize)
                .cloned()
                .collect(),
            total: self.campaigns.len() as u64,
            page,
            page_size,
        })
    }
}

fn type_name(type_filter: Option<CampaignType>) -> &'static str {
    type_filter.map(|t| t.as_str()).unwrap_or("all")
}

#[async_trait]
impl CampaignSource for FakeSource {
    async fn list(
        &self,
        page: u32,
        page_size: u32,
        type_filter: Option<CampaignType>,
    ) -> Result<PaginatedResponse<Campaign>, ApiError> {
        self.record(format!("list page={} limit={} type={}", page, page_size, type_name(type_filter)));
        self.page(page, page_size)
    }

    async fn search_by_date_range(
        &self,
        range: DateRange,
        page: u32,
        page_size: u32,
        type_filter: Option<CampaignType>,
    ) -> Result<PaginatedResponse<Campaign>, ApiError> {
        self.record(format!(
            "search {}..{} page={} limit={} type={}",
            range.start_param(),
            range.end_param(),
            page,
            page_size,
            type_name(type_filter)
        ));
        self.page(page, page_size)
    }

    async fn get_detail(&self, name: &str) -> Result<CampaignDetail, ApiError> {
        self.record(format!("detail {}", name));
        let campaign = self
            .campaigns
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                detail: Some("Campaign not found".to_string()),
            })?;

        Ok(CampaignDetail {
            campaign,
            periods: Vec::new(),
            sites: Vec::new(),
            general_summary: GeneralSummary::default(),
            period_summary: PeriodSummary::default(),
            site_summary: SiteSummary::default(),
        })
    }
}
