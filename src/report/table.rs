/*!
 * Report Table
 * Tab-separated per-process timing table
 */

use crate::process::ScheduledProcess;

const HEADER: &str = "PID\tArrival\tBurst\tPriority\tStart\tFinish\tWaiting\tTurnaround";

/// Render the column header plus one row per process in completion order.
///
/// Rows carry a double tab after the priority column so the values clear
/// the wide `Priority` header cell.
pub fn render_table(processes: &[ScheduledProcess]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for process in processes {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t\t{}\t{}\t{}\t{}\n",
            process.pid,
            process.arrival,
            process.burst,
            process.priority,
            process.start,
            process.finish,
            process.waiting,
            process.turnaround
        ));
    }

    out
}
