//! Item List State
//!
//! What the item container shows, and the guard that keeps overlapping
//! fetches from overwriting a newer result with an older one.

use crate::error::ApiError;
use crate::models::Item;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Listing {
    #[default]
    Loading,
    Loaded(Vec<Item>),
    Failed(String),
}

impl Listing {
    pub fn from_outcome(outcome: Result<Vec<Item>, ApiError>) -> Self {
        match outcome {
            Ok(items) => Self::Loaded(items),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Monotonic ticket counter; only the latest ticket may apply its response.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut seq = FetchSequence::default();
        let first = seq.issue();
        let second = seq.issue();

        // First response arrives after the second request went out
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn test_single_fetch_applies() {
        let mut seq = FetchSequence::default();
        let ticket = seq.issue();
        assert!(seq.is_latest(ticket));
    }

    #[test]
    fn test_from_outcome() {
        assert_eq!(Listing::from_outcome(Ok(vec![])), Listing::Loaded(vec![]));
        assert_eq!(
            Listing::from_outcome(Err(ApiError::rejected(500, "{}"))),
            Listing::Failed("HTTP 500".to_string())
        );
    }
}
