/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::SimTime;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Schedule is empty: no processes to summarize")]
    #[diagnostic(
        code(scheduler::empty_schedule),
        help("Summary averages divide by the process count. Run a policy over a non-empty workload first.")
    )]
    EmptySchedule,

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use fcfs, sjf, or priority_aging.")
    )]
    InvalidPolicy(String),

    #[error("Invalid aging interval: {0} ticks")]
    #[diagnostic(
        code(scheduler::invalid_aging_interval),
        help("The interval is used as a modulus over waiting time and must be at least one tick.")
    )]
    InvalidAgingInterval(SimTime),
}

/// Result type for scheduler operations
///
/// # Must Use
/// Scheduling operations can fail and must be handled to keep the report consistent
pub type Result<T> = std::result::Result<T, SchedulerError>;
