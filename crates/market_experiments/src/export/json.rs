use crate::history::EpisodeSummary;

/// Write `summaries` to `file` as one pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub(crate) fn export_summaries_impl(
    summaries: &[EpisodeSummary],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(file, summaries)?;
    Ok(())
}
