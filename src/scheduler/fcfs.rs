use super::{ProcessMetrics, ScheduleOutcome, Scheduler};
use crate::core::gantt::GanttSegment;
use crate::core::log::ProcessRecord;
use crate::core::Ticks;

/// First-come-first-served: processes run to completion in strict arrival
/// order. The clock jumps over idle gaps when the next process has not
/// arrived yet.
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn name(&self) -> String {
        "FCFS Scheduling".to_owned()
    }

    fn run(&self, snapshot: &[ProcessRecord]) -> ScheduleOutcome {
        let mut time: Ticks = 0;
        let mut metrics = Vec::with_capacity(snapshot.len());
        let mut gantt = Vec::with_capacity(snapshot.len());

        for record in snapshot {
            if time < record.arrival_time {
                time = record.arrival_time;
            }
            time += record.burst_time;

            let mut process = ProcessMetrics::from_record(record);
            process.completion_time = Some(time);
            metrics.push(process);
            gantt.push(GanttSegment {
                pid: record.pid,
                len: record.burst_time,
                end: time,
            });
        }

        ScheduleOutcome {
            policy: self.name(),
            metrics,
            gantt,
        }
    }
}
