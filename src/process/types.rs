/*!
 * Process Types
 * Workload descriptors and finished scheduling records
 */

use crate::core::types::{Pid, Priority, SimTime};
use serde::{Deserialize, Serialize};

/// A process as submitted to the simulator.
///
/// `burst` must be greater than zero; descriptors are well-formed by
/// construction since the workload is compiled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    pub pid: Pid,
    pub arrival: SimTime,
    pub burst: SimTime,
    pub priority: Priority,
}

impl ProcessDescriptor {
    pub fn new(pid: Pid, arrival: SimTime, burst: SimTime, priority: Priority) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
        }
    }
}

/// A process after its single non-preemptive dispatch.
///
/// Carries the input fields alongside the derived timings so a report row
/// can be rendered from one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduledProcess {
    pub pid: Pid,
    pub arrival: SimTime,
    pub burst: SimTime,
    /// Priority at dispatch time; under aging this is the decayed value.
    pub priority: Priority,
    pub start: SimTime,
    pub finish: SimTime,
    pub waiting: SimTime,
    pub turnaround: SimTime,
}

impl ScheduledProcess {
    /// Dispatch `process` at `start` and derive the finished-record fields.
    pub fn dispatch_at(process: &ProcessDescriptor, start: SimTime) -> Self {
        debug_assert!(
            start >= process.arrival,
            "process {} dispatched before arrival",
            process.pid
        );
        let finish = start + process.burst;
        Self {
            pid: process.pid,
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            start,
            finish,
            waiting: start - process.arrival,
            turnaround: finish - process.arrival,
        }
    }
}

/// The compiled-in reference workload, listed in arrival order.
pub fn default_workload() -> Vec<ProcessDescriptor> {
    vec![
        ProcessDescriptor::new(1, 0, 8, 3),
        ProcessDescriptor::new(2, 1, 4, 1),
        ProcessDescriptor::new(3, 2, 9, 4),
        ProcessDescriptor::new(4, 3, 5, 2),
    ]
}
