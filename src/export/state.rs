//! Run state tracking.

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

use crate::config::FetchMode;
use crate::media::{MediaItem, MediaType};

/// Counters and notes for one export run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub fetch_mode: FetchMode,

    // List call
    pub listed: usize,
    pub list_error: Option<String>,

    // Detail calls (detailed mode only)
    pub details_fetched: usize,
    pub details_failed: usize,
    pub detail_errors: Vec<(String, String)>,

    // Items written
    pub items_written: usize,
    pub images: usize,
    pub videos: usize,
    pub albums: usize,
    pub newest: Option<DateTime<FixedOffset>>,
    pub oldest: Option<DateTime<FixedOffset>>,

    pub output_path: Option<PathBuf>,
}

impl RunSummary {
    /// Create a summary for the given mode.
    pub fn new(fetch_mode: FetchMode) -> Self {
        Self {
            fetch_mode,
            ..Default::default()
        }
    }

    /// Record a failed list call.
    pub fn mark_list_failed(&mut self, reason: String) {
        self.list_error = Some(reason);
    }

    /// Record one successful detail call.
    pub fn increment_detail(&mut self) {
        self.details_fetched += 1;
    }

    /// Record one failed detail call.
    pub fn mark_detail_failed(&mut self, media_id: String, reason: String) {
        self.details_failed += 1;
        self.detail_errors.push((media_id, reason));
    }

    /// Track an item going into the output document.
    pub fn observe_item(&mut self, item: &MediaItem) {
        self.items_written += 1;

        match item.kind() {
            Some(MediaType::Image) => self.images += 1,
            Some(MediaType::Video) => self.videos += 1,
            Some(MediaType::CarouselAlbum) => self.albums += 1,
            Some(MediaType::Other) | None => {}
        }

        if let Some(published) = item.published_at() {
            if self.newest.map_or(true, |n| published > n) {
                self.newest = Some(published);
            }
            if self.oldest.map_or(true, |o| published < o) {
                self.oldest = Some(published);
            }
        }
    }

    /// Total failed API calls.
    pub fn failed_calls(&self) -> usize {
        usize::from(self.list_error.is_some()) + self.details_failed
    }
}
