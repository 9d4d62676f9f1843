/*!
 * Ready Set
 * Admission-ordered holding area for arrived processes
 */

use std::collections::VecDeque;

use crate::core::types::SimTime;
use crate::process::ProcessDescriptor;
use crate::scheduler::types::AgingInterval;

/// Processes that have arrived but not yet been dispatched.
///
/// Entries keep their admission order. Selection scans use strict-less
/// comparison, so the earliest admitted entry wins a tie.
#[derive(Debug, Default)]
pub(super) struct ReadySet {
    entries: Vec<ProcessDescriptor>,
}

impl ReadySet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move every pending process that has arrived by `clock` into the set.
    ///
    /// `pending` must be sorted by arrival, so the arrived processes form a
    /// prefix of the queue.
    pub fn admit_arrived(&mut self, pending: &mut VecDeque<ProcessDescriptor>, clock: SimTime) {
        let arrived = pending
            .iter()
            .take_while(|process| process.arrival <= clock)
            .count();
        self.entries.extend(pending.drain(..arrived));
    }

    /// Take the minimum-burst member out of the set.
    pub fn take_shortest(&mut self) -> Option<ProcessDescriptor> {
        self.take_first_min(|process| process.burst)
    }

    /// Take the minimum-priority (most urgent) member out of the set.
    pub fn take_most_urgent(&mut self) -> Option<ProcessDescriptor> {
        self.take_first_min(|process| process.priority)
    }

    /// Decay the priority of every member whose waiting time sits on a
    /// non-zero multiple of `interval` at `clock`.
    ///
    /// The waiting time is recomputed from the clock, not accumulated, so a
    /// member can decay once per pick until it is dispatched.
    pub fn age(&mut self, clock: SimTime, interval: AgingInterval) {
        for entry in &mut self.entries {
            let waited = clock - entry.arrival;
            if waited > 0 && waited % interval.as_ticks() == 0 {
                entry.priority -= 1;
            }
        }
    }

    // Strict-less scan: the first minimal entry wins, and Vec::remove keeps
    // the order of the remaining entries.
    fn take_first_min<K, F>(&mut self, key: F) -> Option<ProcessDescriptor>
    where
        K: Ord,
        F: Fn(&ProcessDescriptor) -> K,
    {
        let mut best: Option<usize> = None;
        for index in 0..self.entries.len() {
            match best {
                None => best = Some(index),
                Some(current) if key(&self.entries[index]) < key(&self.entries[current]) => {
                    best = Some(index)
                }
                _ => {}
            }
        }
        best.map(|index| self.entries.remove(index))
    }
}
