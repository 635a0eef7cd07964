//! Detail modal state machine.
//!
//! ```text
//! Closed ──open──▶ Opening ──ok──▶ Loaded
//!                     │
//!                     └──err──▶ Failed
//! any ──close──▶ Closed        any ──open(other)──▶ Opening
//! ```
//!
//! A result is applied only while the modal is still `Opening` with the same
//! ticket; anything else means the user closed the modal or picked another
//! campaign in the meantime.

use super::FetchTicket;
use crate::api::ApiError;
use crate::models::CampaignDetail;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Opening {
        name: String,
        seq: u64,
    },
    Loaded {
        name: String,
        detail: Box<CampaignDetail>,
    },
    Failed {
        name: String,
        error: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DetailOrchestrator {
    state: DetailState,
    next_seq: u64,
}

impl DetailOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Opening { .. })
    }

    pub fn selected_name(&self) -> Option<&str> {
        match &self.state {
            DetailState::Closed => None,
            DetailState::Opening { name, .. } | DetailState::Loaded { name, .. } | DetailState::Failed { name, .. } => {
                Some(name.as_str())
            }
        }
    }

    pub fn detail(&self) -> Option<&CampaignDetail> {
        match &self.state {
            DetailState::Loaded { detail, .. } => Some(detail.as_ref()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DetailState::Failed { error, .. } => Some(error.as_str()),
            _ => None,
        }
    }

    /// Show the modal for `name` and issue its fetch
    pub fn open(&mut self, name: &str) -> FetchTicket {
        self.next_seq += 1;
        self.state = DetailState::Opening {
            name: name.to_string(),
            seq: self.next_seq,
        };
        FetchTicket { seq: self.next_seq }
    }

    /// Apply a fetch result; returns whether it was applied
    pub fn complete(&mut self, seq: u64, result: Result<CampaignDetail, ApiError>) -> bool {
        let name = match &self.state {
            DetailState::Opening { name, seq: current } if *current == seq => name.clone(),
            _ => {
                log::debug!("Discarding detail result #{} (modal state changed)", seq);
                return false;
            }
        };

        self.state = match result {
            Ok(detail) => DetailState::Loaded {
                name,
                detail: Box::new(detail),
            },
            Err(e) => DetailState::Failed {
                name,
                error: e.to_string(),
            },
        };
        true
    }

    pub fn close(&mut self) {
        self.state = DetailState::Closed;
    }
}
