/*!
 * Priority-with-Aging Policy
 * Priority dispatch with waiting-time decay against starvation
 */

use log::trace;

use crate::core::types::SimTime;
use crate::process::{ProcessDescriptor, ScheduledProcess};
use crate::scheduler::ready::ReadySet;
use crate::scheduler::types::AgingInterval;

/// Ready-set loop picking the most urgent (lowest) priority.
///
/// One decay pass runs per pick, recomputed from the current clock; idle
/// ticks skip it. Dispatched records report the decayed priority, not the
/// submitted one.
pub(super) fn run(workload: &[ProcessDescriptor], interval: AgingInterval) -> Vec<ScheduledProcess> {
    let mut pending = super::sorted_pending(workload);
    let mut ready = ReadySet::new();
    let mut finished = Vec::with_capacity(workload.len());
    let mut clock: SimTime = 0;

    while !pending.is_empty() || !ready.is_empty() {
        ready.admit_arrived(&mut pending, clock);

        if ready.is_empty() {
            clock += 1;
            continue;
        }

        ready.age(clock, interval);

        if let Some(process) = ready.take_most_urgent() {
            let record = ScheduledProcess::dispatch_at(&process, clock);
            trace!(
                "aging dispatched pid {} (priority {}) at {}",
                record.pid,
                record.priority,
                record.start
            );
            clock = record.finish;
            finished.push(record);
        }
    }

    finished
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(ticks: SimTime) -> AgingInterval {
        AgingInterval::new(ticks).unwrap()
    }

    #[test]
    fn test_decay_lets_waiting_process_overtake() {
        // pid 3 submits the worst priority but decays past pid 4 while waiting
        let workload = vec![
            ProcessDescriptor::new(1, 0, 8, 3),
            ProcessDescriptor::new(2, 1, 4, 1),
            ProcessDescriptor::new(3, 2, 9, 4),
            ProcessDescriptor::new(4, 3, 5, 2),
        ];
        let finished = run(&workload, interval(2));
        let order: Vec<u32> = finished.iter().map(|p| p.pid).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_records_report_decayed_priority() {
        let workload = vec![
            ProcessDescriptor::new(1, 0, 8, 3),
            ProcessDescriptor::new(2, 1, 4, 1),
            ProcessDescriptor::new(3, 2, 9, 4),
            ProcessDescriptor::new(4, 3, 5, 2),
        ];
        let finished = run(&workload, interval(2));
        let priorities: Vec<i32> = finished.iter().map(|p| p.priority).collect();
        assert_eq!(priorities, vec![3, 1, 2, 1]);
    }

    #[test]
    fn test_huge_interval_reduces_to_plain_priority() {
        let workload = vec![
            ProcessDescriptor::new(1, 0, 8, 3),
            ProcessDescriptor::new(2, 1, 4, 1),
            ProcessDescriptor::new(3, 2, 9, 4),
            ProcessDescriptor::new(4, 3, 5, 2),
        ];
        let finished = run(&workload, interval(1_000));
        let order: Vec<u32> = finished.iter().map(|p| p.pid).collect();
        assert_eq!(order, vec![1, 2, 4, 3]);
        // no pick ever lands on a multiple of the interval
        let priorities: Vec<i32> = finished.iter().map(|p| p.priority).collect();
        assert_eq!(priorities, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_decay_applies_once_per_pick() {
        // pid 3 waits through two picks (t=4 and t=8) and decays at both,
        // never per elapsed interval
        let workload = vec![
            ProcessDescriptor::new(1, 0, 4, 0),
            ProcessDescriptor::new(2, 0, 4, 0),
            ProcessDescriptor::new(3, 0, 4, 9),
        ];
        let finished = run(&workload, interval(2));
        assert_eq!(finished[1].pid, 2);
        assert_eq!(finished[1].priority, -1);
        assert_eq!(finished[2].pid, 3);
        assert_eq!(finished[2].priority, 7);
    }

    #[test]
    fn test_tied_priority_prefers_earlier_admission() {
        let workload = vec![
            ProcessDescriptor::new(1, 0, 4, 5),
            ProcessDescriptor::new(2, 0, 4, 5),
        ];
        let finished = run(&workload, interval(1_000));
        assert_eq!(finished[0].pid, 1);
        assert_eq!(finished[1].pid, 2);
    }
}
