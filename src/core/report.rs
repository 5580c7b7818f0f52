use std::fmt::Write as _;

use average::{Estimate, Mean};

use super::{gantt, Ticks};
use crate::scheduler::ScheduleOutcome;

/// Format one scheduling outcome as its console report: policy header,
/// per-process table, averages over the completed processes, Gantt chart.
pub fn render(outcome: &ScheduleOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}:", outcome.policy);
    let _ = writeln!(out, "{:<4} {:<16} {:>4} {:>4} {:>8} {:>4} {:>4} {:>4}",
        "PID", "Action", "BT", "AT", "Priority", "CT", "TAT", "WT");
    for process in &outcome.metrics {
        let _ = writeln!(
            out,
            "{:<4} {:<16} {:>4} {:>4} {:>8} {:>4} {:>4} {:>4}",
            process.pid,
            process.label,
            process.burst_time,
            process.arrival_time,
            process.priority,
            cell(process.completion_time),
            cell(process.turnaround_time()),
            cell(process.waiting_time()),
        );
    }

    let waits: Vec<f64> = outcome
        .metrics
        .iter()
        .filter_map(|m| m.waiting_time())
        .map(|t| t as f64)
        .collect();
    let turnarounds: Vec<f64> = outcome
        .metrics
        .iter()
        .filter_map(|m| m.turnaround_time())
        .map(|t| t as f64)
        .collect();
    if !waits.is_empty() {
        let _ = writeln!(out, "Average waiting time: {:.2}", mean(&waits));
        let _ = writeln!(out, "Average turnaround time: {:.2}", mean(&turnarounds));
    }

    out.push_str("\nGantt Chart:\n\n");
    out.push_str(&gantt::render(&outcome.gantt));
    out
}

fn mean(values: &[f64]) -> f64 {
    values.iter().copied().collect::<Mean>().estimate()
}

// Starved processes have no completion-derived columns.
fn cell(value: Option<Ticks>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_owned(),
    }
}
