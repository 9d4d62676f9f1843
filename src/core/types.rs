/*!
 * Core Types
 * Shared primitive types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulation clock value, in abstract ticks
pub type SimTime = u64;

/// Scheduling priority; lower values are more urgent.
///
/// Signed because aging decays priorities without a floor, so a
/// long-waiting process can drop below zero.
pub type Priority = i32;
