//! Result export: episode history to CSV, summaries to JSON.

use std::path::Path;

use crate::history::EpisodeSummary;
use crate::runner::EpisodeRun;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export the per-step history of every run to one CSV file.
///
/// One row per step, keyed by `seed` and `time_step`.
///
/// # Errors
///
/// Returns an error if `runs` is empty, or if file creation or CSV writing fails.
pub fn export_history_to_csv(
    runs: &[EpisodeRun],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(runs)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_history_impl(runs, file)
}

/// Export episode summaries as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_summaries_to_json(
    summaries: &[EpisodeSummary],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_summaries_impl(summaries, file)
}
