pub mod gantt;
pub mod log;
pub mod report;

/// Simulated time unit.
pub type Ticks = u64;

/// Process id, assigned in creation order starting at 1.
pub type Pid = u32;
