//! Per-call fetch results.

use crate::error::{Error, Result};

/// Result of one Graph API call, kept as a value so the caller picks the
/// error policy.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Fetched(T),
    Failed(Error),
}

impl<T> FetchOutcome<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    /// Payload, dropping the failure.
    pub fn ok(self) -> Option<T> {
        match self {
            FetchOutcome::Fetched(value) => Some(value),
            FetchOutcome::Failed(_) => None,
        }
    }
}

impl<T> From<Result<T>> for FetchOutcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Fetched(value),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}
