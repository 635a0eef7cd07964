//! Utility modules for the dashboard.
//!
//! - [`datetime`] - ISO date parsing and display formatting
//! - [`format`] - Number and placeholder formatting for metrics

pub mod datetime;
pub mod format;
