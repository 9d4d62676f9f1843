/*!
 * Monitoring Module
 * Tracing bootstrap and run instrumentation
 */

mod tracer;

pub use tracer::{init_tracing, RunSpan};
