/*!
 * Scheduling Simulator Library
 * Non-preemptive CPU scheduling policies over an in-memory workload
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{Result, SchedulerError};
pub use crate::monitoring::init_tracing;
pub use crate::process::{default_workload, ProcessDescriptor, ScheduledProcess};
pub use crate::report::{render_section, render_summary, render_table};
pub use crate::scheduler::{AgingInterval, Policy, Schedule, ScheduleMetrics, DEFAULT_AGING_INTERVAL};
