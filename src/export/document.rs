//! The JSON document written to disk.

use serde::Serialize;

use crate::export::outcome::FetchOutcome;
use crate::media::MediaItem;

/// Array of arrays of media items.
///
/// Flat mode writes one inner array holding the whole list. Detailed mode
/// writes one single-element array per detail call, or an empty array where
/// the call failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputDocument(Vec<Vec<MediaItem>>);

impl OutputDocument {
    /// Document for flat mode: `[[item, ...]]`.
    pub fn flat(items: Vec<MediaItem>) -> Self {
        Self(vec![items])
    }

    /// Document for detailed mode: `[[item], [], ...]`.
    pub fn detailed(outcomes: Vec<FetchOutcome<MediaItem>>) -> Self {
        Self(
            outcomes
                .into_iter()
                .map(|outcome| outcome.ok().into_iter().collect())
                .collect(),
        )
    }

    /// Total number of media items across all groups.
    pub fn item_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
}
