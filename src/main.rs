/*!
 * Scheduling Simulator - Main Entry Point
 *
 * Runs the three reference policies over the compiled-in workload and
 * prints one report section per policy to stdout.
 */

use std::error::Error;
use tracing::info;

use schedsim::{default_workload, init_tracing, render_section, AgingInterval, Policy};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize structured tracing
    init_tracing();

    info!("Scheduling simulator starting...");

    let workload = default_workload();
    info!(processes = workload.len(), "Workload loaded");

    let policies = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::PriorityAging(AgingInterval::default()),
    ];

    for policy in policies {
        let schedule = policy.run(&workload);
        print!("{}", render_section(&schedule)?);
    }

    info!("Simulation complete");
    Ok(())
}
