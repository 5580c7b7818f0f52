use super::{ProcessMetrics, ScheduleError, ScheduleOutcome, Scheduler};
use crate::core::gantt::GanttSegment;
use crate::core::log::ProcessRecord;
use crate::core::Ticks;

/// Time-sliced preemptive scheduler. Repeats full passes over the snapshot
/// in arrival order, granting each arrived, unfinished process up to one
/// quantum per pass. The run ends on the first pass that services nobody.
///
/// Known limitation, preserved for compatibility: a process whose arrival
/// time is still in the future when such a pass happens is starved. It keeps
/// `completion_time = None` and contributes no Gantt segment.
#[derive(Debug)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
}

impl RoundRobinScheduler {
    pub fn new(quantum: Ticks) -> Result<Self, ScheduleError> {
        if quantum == 0 {
            return Err(ScheduleError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> String {
        format!("Round Robin (q={})", self.quantum)
    }

    fn run(&self, snapshot: &[ProcessRecord]) -> ScheduleOutcome {
        let mut metrics: Vec<ProcessMetrics> =
            snapshot.iter().map(ProcessMetrics::from_record).collect();
        let mut remaining: Vec<Ticks> = snapshot.iter().map(|r| r.burst_time).collect();
        let mut gantt = Vec::new();
        let mut time: Ticks = 0;

        loop {
            let mut serviced = false;
            for (i, record) in snapshot.iter().enumerate() {
                if remaining[i] == 0 || record.arrival_time > time {
                    continue;
                }
                serviced = true;

                let slice = remaining[i].min(self.quantum);
                time += slice;
                remaining[i] -= slice;
                gantt.push(GanttSegment {
                    pid: record.pid,
                    len: slice,
                    end: time,
                });

                if remaining[i] == 0 {
                    metrics[i].completion_time = Some(time);
                }
            }
            if !serviced {
                break;
            }
        }

        ScheduleOutcome {
            policy: self.name(),
            metrics,
            gantt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::record;
    use crate::scheduler::FcfsScheduler;

    #[test]
    fn zero_quantum_is_rejected() {
        assert_eq!(
            RoundRobinScheduler::new(0).unwrap_err(),
            ScheduleError::InvalidQuantum(0)
        );
        assert_eq!(RoundRobinScheduler::new(2).unwrap().quantum(), 2);
    }

    #[test]
    fn reference_scenario_quantum_two() {
        // Arrivals 0,1,2 with bursts 5,3,1. Pass cycling gives
        // P1(2) P2(2) P3(1) P1(2) P2(1) P1(1).
        let snapshot = [record(1, 0, 5, 1), record(2, 1, 3, 1), record(3, 2, 1, 1)];
        let outcome = RoundRobinScheduler::new(2).unwrap().run(&snapshot);

        let pids: Vec<_> = outcome.gantt.iter().map(|s| s.pid).collect();
        assert_eq!(pids, [1, 2, 3, 1, 2, 1]);
        let ends: Vec<_> = outcome.gantt.iter().map(|s| s.end).collect();
        assert_eq!(ends, [2, 4, 5, 7, 8, 9]);

        let completions: Vec<_> = outcome.metrics.iter().map(|m| m.completion_time).collect();
        assert_eq!(completions, [Some(9), Some(8), Some(5)]);
    }

    #[test]
    fn slice_lengths_sum_to_the_burst_for_completed_processes() {
        let snapshot = [record(1, 0, 5, 1), record(2, 1, 3, 1), record(3, 2, 1, 1)];
        let outcome = RoundRobinScheduler::new(2).unwrap().run(&snapshot);

        for process in &snapshot {
            let serviced: Ticks = outcome
                .gantt
                .iter()
                .filter(|s| s.pid == process.pid)
                .map(|s| s.len)
                .sum();
            assert_eq!(serviced, process.burst_time, "pid {}", process.pid);
        }
    }

    #[test]
    fn large_quantum_degenerates_to_fcfs_at_simultaneous_arrival() {
        let snapshot = [record(1, 0, 5, 1), record(2, 0, 3, 1), record(3, 0, 4, 1)];
        let rr = RoundRobinScheduler::new(5).unwrap().run(&snapshot);
        let fcfs = FcfsScheduler.run(&snapshot);

        for (a, b) in rr.metrics.iter().zip(fcfs.metrics.iter()) {
            assert_eq!(a.completion_time, b.completion_time, "pid {}", a.pid);
        }
        assert_eq!(rr.gantt.len(), snapshot.len());
    }

    #[test]
    fn never_reached_arrival_is_starved_and_left_out_of_the_gantt() {
        let snapshot = [record(1, 0, 1, 1), record(2, 10, 1, 1)];
        let outcome = RoundRobinScheduler::new(2).unwrap().run(&snapshot);

        assert_eq!(outcome.metrics[0].completion_time, Some(1));
        assert_eq!(outcome.metrics[1].completion_time, None);
        assert_eq!(outcome.metrics[1].turnaround_time(), None);
        let pids: Vec<_> = outcome.gantt.iter().map(|s| s.pid).collect();
        assert_eq!(pids, [1]);
    }

    #[test]
    fn quantum_sized_remainder_finishes_in_that_slice() {
        // remaining == quantum takes the completion branch, not another
        // preemption.
        let snapshot = [record(1, 0, 4, 1)];
        let outcome = RoundRobinScheduler::new(2).unwrap().run(&snapshot);

        let ends: Vec<_> = outcome.gantt.iter().map(|s| s.end).collect();
        assert_eq!(ends, [2, 4]);
        assert_eq!(outcome.metrics[0].completion_time, Some(4));
    }
}
