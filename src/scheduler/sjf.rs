/*!
 * SJF Policy
 * Non-preemptive shortest-job-first over a ready set
 */

use log::trace;

use crate::core::types::SimTime;
use crate::process::{ProcessDescriptor, ScheduledProcess};
use crate::scheduler::ready::ReadySet;

/// Ready-set loop picking the smallest burst among arrived processes.
///
/// When nothing has arrived yet the clock idles forward one tick at a time;
/// a dispatch always runs its full burst before the next pick.
pub(super) fn run(workload: &[ProcessDescriptor]) -> Vec<ScheduledProcess> {
    let mut pending = super::sorted_pending(workload);
    let mut ready = ReadySet::new();
    let mut finished = Vec::with_capacity(workload.len());
    let mut clock: SimTime = 0;

    while !pending.is_empty() || !ready.is_empty() {
        ready.admit_arrived(&mut pending, clock);

        match ready.take_shortest() {
            Some(process) => {
                let record = ScheduledProcess::dispatch_at(&process, clock);
                trace!(
                    "sjf dispatched pid {} (burst {}) at {}",
                    record.pid,
                    record.burst,
                    record.start
                );
                clock = record.finish;
                finished.push(record);
            }
            // Nothing ready: idle one tick and re-check arrivals.
            None => clock += 1,
        }
    }

    finished
}
