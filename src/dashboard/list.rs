//! Campaign list orchestration.
//!
//! Every change to the list query issues exactly one ticket. While the latest
//! ticket is in flight the previously displayed page stays visible; when it
//! resolves, records and total are replaced together (success) or cleared
//! (failure). Results carrying an older ticket are dropped.

use super::filters::ListQuery;
use super::FetchTicket;
use crate::api::{ApiError, CampaignSource};
use crate::models::{Campaign, PaginatedResponse};

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    Applied,
    Failed,
    /// A newer fetch was issued meanwhile; nothing changed
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct ListOrchestrator {
    records: Vec<Campaign>,
    total: u64,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
    in_flight: Option<ListQuery>,
}

impl ListOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Campaign] {
        &self.records
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Query of the fetch currently awaited, if any
    pub fn in_flight(&self) -> Option<&ListQuery> {
        self.in_flight.as_ref()
    }

    /// Issue a new fetch, superseding any pending one
    pub fn begin(&mut self, query: &ListQuery) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.in_flight = Some(query.clone());
        FetchTicket { seq: self.latest_seq }
    }

    /// Apply the result of the fetch identified by `seq`
    pub fn complete(&mut self, seq: u64, result: Result<PaginatedResponse<Campaign>, ApiError>) -> ListOutcome {
        if seq != self.latest_seq {
            log::debug!("Discarding stale list result #{} (latest #{})", seq, self.latest_seq);
            return ListOutcome::Stale;
        }

        self.loading = false;
        self.in_flight = None;

        match result {
            Ok(response) => {
                self.records = response.data;
                self.total = response.total;
                self.error = None;
                ListOutcome::Applied
            }
            Err(e) => {
                self.records.clear();
                self.total = 0;
                self.error = Some(e.to_string());
                ListOutcome::Failed
            }
        }
    }
}

/// Run a list query against the remote source
///
/// A date-range query goes to the date search only; everything else to the
/// plain listing.
pub async fn fetch_page(
    source: &dyn CampaignSource,
    query: &ListQuery,
) -> Result<PaginatedResponse<Campaign>, ApiError> {
    match query {
        ListQuery::All {
            page,
            limit,
            type_filter,
        } => source.list(*page, *limit, *type_filter).await,
        ListQuery::DateRange {
            range,
            page,
            limit,
            type_filter,
        } => {
            source
                .search_by_date_range(*range, *page, *limit, *type_filter)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CampaignType;

    fn page_of(names: &[&str], total: u64) -> PaginatedResponse<Campaign> {
        PaginatedResponse {
            data: names
                .iter()
                .map(|n| Campaign::new(n, "mensual", "2024-01-01", "2024-01-31"))
                .collect(),
            total,
            page: 1,
            page_size: 5,
        }
    }

    fn query() -> ListQuery {
        ListQuery::All {
            page: 1,
            limit: 5,
            type_filter: Some(CampaignType::Mensual),
        }
    }

    #[test]
    fn keeps_previous_data_while_loading() {
        let mut list = ListOrchestrator::new();
        let first = list.begin(&query());
        assert_eq!(list.complete(first.seq, Ok(page_of(&["a", "b"], 2))), ListOutcome::Applied);

        let _second = list.begin(&query());
        assert!(list.is_loading());
        assert_eq!(list.records().len(), 2);
        assert_eq!(list.total(), 2);
        assert_eq!(list.in_flight(), Some(&query()));
    }

    #[test]
    fn success_replaces_records_and_total() {
        let mut list = ListOrchestrator::new();
        let ticket = list.begin(&query());
        list.complete(ticket.seq, Ok(page_of(&["a"], 11)));

        assert!(!list.is_loading());
        assert_eq!(list.records()[0].name, "a");
        assert_eq!(list.total(), 11);
        assert!(list.error().is_none());
        assert!(list.in_flight().is_none());
    }

    #[test]
    fn failure_clears_records() {
        let mut list = ListOrchestrator::new();
        let ticket = list.begin(&query());
        list.complete(ticket.seq, Ok(page_of(&["a", "b"], 7)));

        let ticket = list.begin(&query());
        let outcome = list.complete(
            ticket.seq,
            Err(ApiError::Status {
                status: 500,
                detail: Some("Internal server error".to_string()),
            }),
        );

        assert_eq!(outcome, ListOutcome::Failed);
        assert!(list.records().is_empty());
        assert_eq!(list.total(), 0);
        assert_eq!(
            list.error(),
            Some("Request failed with status code 500: Internal server error")
        );
        assert!(!list.is_loading());
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut list = ListOrchestrator::new();
        let old = list.begin(&query());
        let new = list.begin(&query());

        assert_eq!(list.complete(old.seq, Ok(page_of(&["old"], 1))), ListOutcome::Stale);
        assert!(list.is_loading());
        assert!(list.records().is_empty());

        assert_eq!(list.complete(new.seq, Ok(page_of(&["new"], 1))), ListOutcome::Applied);
        assert_eq!(list.records()[0].name, "new");

        // A late error from the superseded fetch changes nothing either
        assert_eq!(
            list.complete(old.seq, Err(ApiError::Timeout(5000))),
            ListOutcome::Stale
        );
        assert_eq!(list.records()[0].name, "new");
        assert!(list.error().is_none());
    }

    #[test]
    fn success_after_failure_clears_error() {
        let mut list = ListOrchestrator::new();
        let ticket = list.begin(&query());
        list.complete(ticket.seq, Err(ApiError::Network("connection refused".to_string())));
        assert!(list.error().is_some());

        let ticket = list.begin(&query());
        list.complete(ticket.seq, Ok(page_of(&[], 0)));
        assert!(list.error().is_none());
    }
}
