use std::fmt::Write as _;

use super::{Pid, Ticks};

/// One contiguous block of simulated execution attributed to a single
/// process. FCFS and Priority emit exactly one per process; Round Robin
/// emits one per quantum-bounded slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GanttSegment {
    pub pid: Pid,
    /// Ticks consumed by this segment.
    pub len: Ticks,
    /// Cumulative clock value when this segment ends.
    pub end: Ticks,
}

/// Render segments as a fixed-width chart: dash rules above and below a row
/// of `P<id>` cells, then a timeline row of cumulative end times starting
/// from 0.
pub fn render(segments: &[GanttSegment]) -> String {
    let mut out = String::new();
    let rule = "-".repeat(segments.len() * 6 + 1);

    out.push(' ');
    out.push_str(&rule);
    out.push_str("\n|");
    for segment in segments {
        let _ = write!(out, " P{:<3} |", segment.pid);
    }
    out.push_str("\n ");
    out.push_str(&rule);
    out.push_str("\n0");
    for segment in segments {
        let _ = write!(out, "{:>6}", segment.end);
    }
    out.push('\n');
    out
}
