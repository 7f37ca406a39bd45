//! Per-step systems, run in this order by [`crate::runner::step_schedule`]:
//! clock, incentives, queue ageing, demand, dispatch, snapshot.

pub mod advance_clock;
pub mod demand;
pub mod dispatch;
pub mod incentives;
pub mod queue_ageing;
pub mod snapshot;
