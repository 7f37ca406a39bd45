use crate::runner::EpisodeRun;

/// Write one CSV row per recorded step of every run, runs in input order.
///
/// # Errors
///
/// Returns an error if a record cannot be written or the final flush fails.
pub(crate) fn export_history_impl(
    runs: &[EpisodeRun],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "seed",
        "time_step",
        "total_reward",
        "avg_fatigue",
        "demand_count",
        "dispatched",
    ])?;

    for run in runs {
        for row in run.history.rows() {
            wtr.write_record([
                &run.seed.to_string(),
                &row.time_step.to_string(),
                &row.total_reward.to_string(),
                &row.avg_fatigue.to_string(),
                &row.demand_count.to_string(),
                &row.dispatched.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
