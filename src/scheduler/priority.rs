use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use super::{ProcessMetrics, ScheduleOutcome, Scheduler};
use crate::core::gantt::GanttSegment;
use crate::core::log::ProcessRecord;
use crate::core::Ticks;

// KeyedPriorityQueue pops its largest key, so order by priority and flip the
// snapshot index: among equal priorities the earliest-created process wins.
#[derive(Debug, PartialEq, Eq)]
struct ReadyKey {
    priority: u32,
    index: usize,
}

impl PartialOrd for ReadyKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReadyKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Non-preemptive priority scheduling. At each decision point the
/// highest-priority arrived process runs to completion; ties go to the
/// earliest creation index. When no unfinished process has arrived yet, the
/// clock idles forward one tick and the scan repeats.
pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    fn name(&self) -> String {
        "Priority Scheduling (Non-preemptive)".to_owned()
    }

    fn run(&self, snapshot: &[ProcessRecord]) -> ScheduleOutcome {
        let mut metrics: Vec<ProcessMetrics> =
            snapshot.iter().map(ProcessMetrics::from_record).collect();
        let mut gantt = Vec::with_capacity(snapshot.len());
        let mut ready: KeyedPriorityQueue<usize, ReadyKey> = KeyedPriorityQueue::new();
        let mut time: Ticks = 0;
        // Snapshot is arrival-ordered, so arrivals are a moving frontier.
        let mut next_arrival = 0;

        loop {
            while next_arrival < snapshot.len() && snapshot[next_arrival].arrival_time <= time {
                let key = ReadyKey {
                    priority: snapshot[next_arrival].priority,
                    index: next_arrival,
                };
                ready.push(next_arrival, key);
                next_arrival += 1;
            }

            match ready.pop() {
                Some((index, _)) => {
                    let record = &snapshot[index];
                    time += record.burst_time;
                    metrics[index].completion_time = Some(time);
                    gantt.push(GanttSegment {
                        pid: record.pid,
                        len: record.burst_time,
                        end: time,
                    });
                }
                // Idle tick until the next arrival becomes eligible.
                None if next_arrival < snapshot.len() => time += 1,
                None => break,
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

    #[test]
    fn higher_priority_runs_first_among_arrived() {
        let snapshot = [record(1, 0, 4, 1), record(2, 0, 2, 5)];
        let outcome = PriorityScheduler.run(&snapshot);

        assert_eq!(outcome.metrics[1].completion_time, Some(2));
        assert_eq!(outcome.metrics[0].completion_time, Some(6));
        let pids: Vec<_> = outcome.gantt.iter().map(|s| s.pid).collect();
        assert_eq!(pids, [2, 1]);
    }

    #[test]
    fn simultaneous_arrival_ties_break_by_creation_order() {
        // Priorities 5,1,5 all arriving at 0: the first-created of the two
        // priority-5 processes runs first.
        let snapshot = [record(1, 0, 2, 5), record(2, 0, 2, 1), record(3, 0, 2, 5)];
        let outcome = PriorityScheduler.run(&snapshot);

        let pids: Vec<_> = outcome.gantt.iter().map(|s| s.pid).collect();
        assert_eq!(pids, [1, 3, 2]);
        assert_eq!(outcome.metrics[0].completion_time, Some(2));
        assert_eq!(outcome.metrics[2].completion_time, Some(4));
        assert_eq!(outcome.metrics[1].completion_time, Some(6));
    }

    #[test]
    fn clock_idles_forward_until_the_first_arrival() {
        let snapshot = [record(1, 3, 2, 1)];
        let outcome = PriorityScheduler.run(&snapshot);

        assert_eq!(outcome.metrics[0].completion_time, Some(5));
        assert_eq!(outcome.metrics[0].waiting_time(), Some(0));
    }

    #[test]
    fn late_high_priority_does_not_preempt() {
        // P1 starts at 0 and runs 5 ticks; the priority-9 arrival at 1 has
        // to wait for it.
        let snapshot = [record(1, 0, 5, 1), record(2, 1, 1, 9)];
        let outcome = PriorityScheduler.run(&snapshot);

        let pids: Vec<_> = outcome.gantt.iter().map(|s| s.pid).collect();
        assert_eq!(pids, [1, 2]);
        assert_eq!(outcome.metrics[0].completion_time, Some(5));
        assert_eq!(outcome.metrics[1].completion_time, Some(6));
    }

    #[test]
    fn one_segment_per_process() {
        let snapshot = [
            record(1, 0, 1, 2),
            record(2, 1, 3, 4),
            record(3, 2, 2, 3),
            record(4, 3, 1, 5),
        ];
        let outcome = PriorityScheduler.run(&snapshot);

        assert_eq!(outcome.gantt.len(), snapshot.len());
        assert!(outcome.metrics.iter().all(|m| m.completion_time.is_some()));
    }

    #[test]
    fn arrived_higher_priority_completes_before_arrived_lower() {
        let snapshot = [
            record(1, 0, 2, 3),
            record(2, 0, 2, 5),
            record(3, 0, 2, 1),
            record(4, 0, 2, 4),
        ];
        let outcome = PriorityScheduler.run(&snapshot);

        for a in &outcome.metrics {
            for b in &outcome.metrics {
                if a.priority > b.priority {
                    assert!(a.completion_time.unwrap() < b.completion_time.unwrap());
                }
            }
        }
    }
}
