/*!
 * Schedule
 * Finished runs and their summary metrics
 */

use crate::core::errors::{Result, SchedulerError};
use crate::core::types::SimTime;
use crate::process::ScheduledProcess;
use crate::scheduler::types::Policy;
use serde::{Deserialize, Serialize};

/// A finished scheduling run: records in completion order, tagged with the
/// policy that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Schedule {
    pub policy: Policy,
    pub processes: Vec<ScheduledProcess>,
}

impl Schedule {
    pub fn new(policy: Policy, processes: Vec<ScheduledProcess>) -> Self {
        Self { policy, processes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Arithmetic-mean waiting and turnaround time over the finished records.
    ///
    /// The division by the process count is the one guarded fault in the
    /// simulator; an empty schedule returns `EmptySchedule` instead of NaN.
    pub fn metrics(&self) -> Result<ScheduleMetrics> {
        if self.processes.is_empty() {
            return Err(SchedulerError::EmptySchedule);
        }

        let count = self.processes.len();
        let total_waiting: SimTime = self.processes.iter().map(|p| p.waiting).sum();
        let total_turnaround: SimTime = self.processes.iter().map(|p| p.turnaround).sum();

        Ok(ScheduleMetrics {
            mean_waiting: total_waiting as f64 / count as f64,
            mean_turnaround: total_turnaround as f64 / count as f64,
            count,
        })
    }
}

/// Summary averages for a finished schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleMetrics {
    pub mean_waiting: f64,
    pub mean_turnaround: f64,
    pub count: usize,
}
