/*!
 * Scheduler Module
 * Non-preemptive scheduling policies with a uniform run contract
 */

use std::collections::VecDeque;

use log::info;

use crate::monitoring::RunSpan;
use crate::process::ProcessDescriptor;

mod aging;
mod fcfs;
mod ready;
mod sjf;

pub mod schedule;
pub mod types;

// Re-export public API
pub use schedule::{Schedule, ScheduleMetrics};
pub use types::{AgingInterval, Policy, DEFAULT_AGING_INTERVAL};

impl Policy {
    /// Run this policy over `workload` and collect the finished schedule.
    ///
    /// Every run works on its own copy, so the caller's workload is never
    /// mutated and the reference policies stay independent of each other.
    pub fn run(&self, workload: &[ProcessDescriptor]) -> Schedule {
        let span = RunSpan::new(self.as_str());
        info!(
            "Running {} over {} processes",
            self.as_str(),
            workload.len()
        );

        let finished = match self {
            Policy::Fcfs => fcfs::run(workload),
            Policy::Sjf => sjf::run(workload),
            Policy::PriorityAging(interval) => aging::run(workload, *interval),
        };

        span.record_processes(finished.len());
        Schedule::new(*self, finished)
    }
}

/// Working copy of the workload sorted by arrival. The sort is stable, so
/// simultaneous arrivals keep their input order.
fn sorted_pending(workload: &[ProcessDescriptor]) -> VecDeque<ProcessDescriptor> {
    let mut pending = workload.to_vec();
    pending.sort_by_key(|process| process.arrival);
    pending.into()
}
