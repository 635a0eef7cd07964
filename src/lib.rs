//! Campaign Dashboard - a terminal dashboard for campaign analytics
//!
//! This library provides a read-only terminal interface over a campaign
//! analytics REST API: a paginated, filterable campaign table and a detail
//! view with summary metrics, per-period impacts and top sites. It is built
//! with Ratatui and fetches data asynchronously on tokio.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - Remote data client and its error type
//! * [`config`] - Application configuration management
//! * [`dashboard`] - Filter, pagination and fetch orchestration
//! * [`models`] - Records returned by the API
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Formatting helpers for numbers and dates

/// Campaign analytics API client
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// View state and fetch orchestration
pub mod dashboard;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Data structures returned by the API
pub mod models;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date and number formatting
pub mod utils;
