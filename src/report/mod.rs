/*!
 * Report Module
 * Pure text rendering of finished schedules
 */

use crate::core::errors::Result;
use crate::scheduler::{Schedule, ScheduleMetrics};

pub mod table;

// Re-export for convenience
pub use table::render_table;

/// Render the two summary lines.
///
/// Averages print with `f64` display formatting: whole numbers drop the
/// decimal point, fractional ones keep exactly the digits they need.
pub fn render_summary(metrics: &ScheduleMetrics) -> String {
    format!(
        "Average Waiting Time: {}\nAverage Turnaround Time: {}\n",
        metrics.mean_waiting, metrics.mean_turnaround
    )
}

/// Render one policy section: leading blank line, title, table, summary.
///
/// Fails with `EmptySchedule` when there is nothing to average.
pub fn render_section(schedule: &Schedule) -> Result<String> {
    let metrics = schedule.metrics()?;
    Ok(format!(
        "\n{}:\n{}{}",
        schedule.policy.display_name(),
        render_table(&schedule.processes),
        render_summary(&metrics)
    ))
}
