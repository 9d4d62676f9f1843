/*!
 * FCFS Policy
 * First-come-first-served dispatch in input order
 */

use log::trace;

use crate::core::types::SimTime;
use crate::process::{ProcessDescriptor, ScheduledProcess};

/// Walk the workload in input order, advancing a single clock.
///
/// The workload is taken as already listed in arrival order; the pass never
/// reorders it, so an out-of-order list is dispatched exactly as given.
pub(super) fn run(workload: &[ProcessDescriptor]) -> Vec<ScheduledProcess> {
    let mut clock: SimTime = 0;
    let mut finished = Vec::with_capacity(workload.len());

    for process in workload {
        if clock < process.arrival {
            clock = process.arrival;
        }
        let record = ScheduledProcess::dispatch_at(process, clock);
        trace!(
            "fcfs dispatched pid {} at {} (finish {})",
            record.pid,
            record.start,
            record.finish
        );
        clock = record.finish;
        finished.push(record);
    }

    finished
}
