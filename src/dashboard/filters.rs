//! Filter and pagination state for the campaign list.
//!
//! `page` is what the user asked for; `confirmed_total` is the item count the
//! server reported on the last successful fetch. Page bounds are derived from
//! the latter and the requested page is re-checked every time a new total
//! arrives.

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::models::{CampaignType, DateRange};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("page size {0} is not one of the offered sizes (5, 10, 15)")]
    InvalidPageSize(u32),
}

/// Query derived from the current filter state.
///
/// The two variants are mutually exclusive: a date filter always selects the
/// date-range search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    All {
        page: u32,
        limit: u32,
        type_filter: Option<CampaignType>,
    },
    DateRange {
        range: DateRange,
        page: u32,
        limit: u32,
        type_filter: Option<CampaignType>,
    },
}

impl ListQuery {
    pub fn page(&self) -> u32 {
        match self {
            ListQuery::All { page, .. } | ListQuery::DateRange { page, .. } => *page,
        }
    }

    pub fn limit(&self) -> u32 {
        match self {
            ListQuery::All { limit, .. } | ListQuery::DateRange { limit, .. } => *limit,
        }
    }

    /// Short description for logs
    pub fn describe(&self) -> String {
        let kind = |t: &Option<CampaignType>| t.map(|t| t.as_str()).unwrap_or("all");
        match self {
            ListQuery::All {
                page,
                limit,
                type_filter,
            } => format!("list page={} limit={} type={}", page, limit, kind(type_filter)),
            ListQuery::DateRange {
                range,
                page,
                limit,
                type_filter,
            } => format!(
                "search {}..{} page={} limit={} type={}",
                range.start_param(),
                range.end_param(),
                page,
                limit,
                kind(type_filter)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    page: u32,
    page_size: u32,
    type_filter: Option<CampaignType>,
    date_filter: Option<DateRange>,
    confirmed_total: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            type_filter: None,
            date_filter: None,
            confirmed_total: 0,
        }
    }

    /// Initial state with a configured page size
    pub fn with_page_size(page_size: u32) -> Result<Self, FilterError> {
        let mut state = Self::new();
        state.set_page_size(page_size)?;
        Ok(state)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn type_filter(&self) -> Option<CampaignType> {
        self.type_filter
    }

    pub fn date_filter(&self) -> Option<DateRange> {
        self.date_filter
    }

    pub fn confirmed_total(&self) -> u64 {
        self.confirmed_total
    }

    pub fn set_type_filter(&mut self, value: Option<CampaignType>) {
        self.type_filter = value;
        self.page = 1;
    }

    /// Set the date filter; the range has already been validated by the form
    pub fn set_date_filter(&mut self, range: DateRange) {
        self.date_filter = Some(range);
        self.page = 1;
    }

    pub fn clear_date_filter(&mut self) {
        self.date_filter = None;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Result<(), FilterError> {
        if !PAGE_SIZES.contains(&page_size) {
            return Err(FilterError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    /// All types → mensual → catorcenal → all types
    pub fn cycle_type_filter(&mut self) {
        let next = match self.type_filter {
            None => Some(CampaignType::Mensual),
            Some(CampaignType::Mensual) => Some(CampaignType::Catorcenal),
            Some(CampaignType::Catorcenal) => None,
        };
        self.set_type_filter(next);
    }

    /// Move to the next offered page size, wrapping around
    pub fn cycle_page_size(&mut self) {
        let index = PAGE_SIZES.iter().position(|&s| s == self.page_size).unwrap_or(0);
        let next = PAGE_SIZES[(index + 1) % PAGE_SIZES.len()];
        self.page_size = next;
        self.page = 1;
    }

    /// `max(1, ceil(confirmed_total / page_size))`
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.confirmed_total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Returns whether the page moved
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the page moved
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Record the total reported by a completed fetch
    ///
    /// Returns `true` when the requested page no longer exists and was clamped
    /// to the last page, in which case the caller should fetch again.
    pub fn confirm_total(&mut self, total: u64) -> bool {
        self.confirmed_total = total;
        let last = self.total_pages();
        if self.page > last {
            self.page = last;
            true
        } else {
            false
        }
    }

    /// Drop the total after a failed fetch
    ///
    /// The page is pulled back into range; no new fetch is implied, so a
    /// persistent failure waits for an explicit retry.
    pub fn reset_total(&mut self) {
        self.confirmed_total = 0;
        self.page = self.page.min(self.total_pages());
    }

    pub fn query(&self) -> ListQuery {
        match self.date_filter {
            Some(range) => ListQuery::DateRange {
                range,
                page: self.page,
                limit: self.page_size,
                type_filter: self.type_filter,
            },
            None => ListQuery::All {
                page: self.page,
                limit: self.page_size,
                type_filter: self.type_filter,
            },
        }
    }
}
