pub mod core;
pub mod scheduler;
pub mod workspace;

pub use crate::core::gantt::GanttSegment;
pub use crate::core::log::{ActionKind, ProcessLog, ProcessRecord};
pub use crate::scheduler::{run_all, ScheduleError, ScheduleOutcome, Scheduler};
pub use crate::workspace::Workspace;
