//! Statistics reporting.

use std::io::Write;

use console::style;

use crate::config::FetchMode;
use crate::export::RunSummary;
use crate::output::console::Console;

/// Print statistics for a finished run.
pub fn print_run_summary<W: Write>(console: &mut Console<W>, summary: &RunSummary) {
    console.line("");
    console.line(style("═".repeat(50)).dim());
    console.line(style("Run Statistics:").bold());
    console.line(format!("  Mode:     {}", summary.fetch_mode));
    console.line(format!("  Listed:   {}", summary.listed));
    if summary.fetch_mode == FetchMode::Detailed {
        console.line(format!("  Details:  {}", summary.details_fetched));
    }
    if summary.failed_calls() > 0 {
        console.line(format!("  Failed:   {}", style(summary.failed_calls()).red()));
    }
    console.line(format!("  Written:  {} items", summary.items_written));
    console.line(format!(
        "  Types:    {} images, {} videos, {} albums",
        summary.images, summary.videos, summary.albums
    ));
    if let (Some(newest), Some(oldest)) = (summary.newest, summary.oldest) {
        console.line(format!(
            "  Range:    {} .. {}",
            oldest.format("%Y-%m-%d %H:%M"),
            newest.format("%Y-%m-%d %H:%M")
        ));
    }
    if let Some(path) = &summary.output_path {
        console.line(format!("  File:     {}", path.display()));
    }
    console.line(style("═".repeat(50)).dim());
}

/// Explain an empty or partial result caused by failed calls.
///
/// Returns `None` when every call succeeded.
pub fn failure_note(summary: &RunSummary) -> Option<String> {
    if let Some(reason) = &summary.list_error {
        return Some(format!(
            "Media list could not be fetched ({}); the output is empty because of this failure, not because the account has no media",
            reason
        ));
    }

    if summary.details_failed > 0 {
        let ids: Vec<&str> = summary
            .detail_errors
            .iter()
            .map(|(id, _)| id.as_str())
            .collect();
        return Some(format!(
            "{} of {} detail requests failed (media {}); their slots are empty",
            summary.details_failed,
            summary.listed,
            ids.join(", ")
        ));
    }

    None
}
