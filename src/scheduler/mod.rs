pub mod fcfs;
pub mod priority;
pub mod round_robin;

use std::fmt;

use log::info;

pub use fcfs::FcfsScheduler;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobinScheduler;

use crate::core::gantt::GanttSegment;
use crate::core::log::ProcessRecord;
use crate::core::{Pid, Ticks};

#[derive(Debug, PartialEq, Eq)]
pub enum ScheduleError {
    /// Scheduling was requested with zero recorded actions.
    EmptyLog,
    /// Round Robin needs a positive quantum; a zero slice would never
    /// advance the clock.
    InvalidQuantum(Ticks),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLog => write!(f, "no actions recorded yet"),
            Self::InvalidQuantum(q) => {
                write!(f, "invalid Round Robin quantum {q}, must be positive")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Per-process timing derived by one scheduling pass.
#[derive(Debug, Clone)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub label: &'static str,
    pub burst_time: Ticks,
    pub arrival_time: Ticks,
    pub priority: u32,
    /// None when the scheduler never finished the process (Round Robin
    /// starvation).
    pub completion_time: Option<Ticks>,
}

impl ProcessMetrics {
    pub fn from_record(record: &ProcessRecord) -> Self {
        Self {
            pid: record.pid,
            label: record.action.label(),
            burst_time: record.burst_time,
            arrival_time: record.arrival_time,
            priority: record.priority,
            completion_time: None,
        }
    }

    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.completion_time.map(|ct| ct - self.arrival_time)
    }

    pub fn waiting_time(&self) -> Option<Ticks> {
        self.turnaround_time().map(|tat| tat - self.burst_time)
    }
}

/// Everything one scheduling pass derives from a snapshot. Never stored;
/// recomputed on every run.
#[derive(Debug)]
pub struct ScheduleOutcome {
    pub policy: String,
    /// In snapshot (creation) order, one entry per process.
    pub metrics: Vec<ProcessMetrics>,
    /// In execution order.
    pub gantt: Vec<GanttSegment>,
}

/// A scheduling policy replayed over a read-only snapshot of the process
/// log. Snapshots are ordered by arrival time (the log's natural order).
pub trait Scheduler {
    fn name(&self) -> String;

    fn run(&self, snapshot: &[ProcessRecord]) -> ScheduleOutcome;
}

/// Replay one snapshot through FCFS, Round Robin, and Priority in that
/// order. Each policy runs on its own local state; the snapshot is shared
/// and never mutated.
pub fn run_all(
    snapshot: &[ProcessRecord],
    quantum: Ticks,
) -> Result<Vec<ScheduleOutcome>, ScheduleError> {
    if snapshot.is_empty() {
        return Err(ScheduleError::EmptyLog);
    }
    let round_robin = RoundRobinScheduler::new(quantum)?;
    let policies: [&dyn Scheduler; 3] = [&FcfsScheduler, &round_robin, &PriorityScheduler];

    Ok(policies
        .iter()
        .map(|policy| {
            info!("running {} over {} processes", policy.name(), snapshot.len());
            policy.run(snapshot)
        })
        .collect())
}
