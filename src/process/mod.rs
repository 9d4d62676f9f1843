/*!
 * Process Module
 * Workload descriptors and finished scheduling records
 */

pub mod types;

// Re-export for convenience
pub use types::{default_workload, ProcessDescriptor, ScheduledProcess};
