//! View-state and data-fetch orchestration.
//!
//! This module holds everything the dashboard decides on its own, free of any
//! terminal or network concerns:
//!
//! - [`filters`] - Page, page size and the two filters, plus the query they derive
//! - [`list`] - Loading/error/result state of the campaign list
//! - [`detail`] - Open/loading/loaded/failed state of the detail modal
//! - [`date_form`] - Validation of the date-range form
//!
//! Fetches are identified by a [`FetchTicket`]. Each orchestrator hands out
//! tickets with a monotonically increasing sequence number and only applies a
//! result whose ticket is still the latest one, so a slow response can never
//! overwrite a newer one.

pub mod date_form;
pub mod detail;
pub mod filters;
pub mod list;

pub use date_form::{DateRangeForm, FormError, FormField};
pub use detail::{DetailOrchestrator, DetailState};
pub use filters::{FilterError, FilterState, ListQuery};
pub use list::{fetch_page, ListOrchestrator, ListOutcome};

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub seq: u64,
}
