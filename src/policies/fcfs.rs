//! First-Come, First-Served.
//!
//! Non-preemptive. Processes run to completion in arrival order; equal
//! arrivals keep input order (stable sort).
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use log::debug;

use super::SchedulingPolicy;
use crate::models::{Process, Timeline};

/// First-Come, First-Served scheduling.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::policies::{Fcfs, SchedulingPolicy};
///
/// let mut processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
/// let timeline = Fcfs.schedule(&mut processes);
/// assert_eq!(processes[1].completion_time, 7);
/// assert_eq!(timeline.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        let mut order: Vec<usize> = (0..processes.len())
            .filter(|&i| !processes[i].is_complete())
            .collect();
        order.sort_by_key(|&i| processes[i].arrival_time);

        let mut timeline = Timeline::new();
        let mut time = 0;

        for idx in order {
            let process = &mut processes[idx];
            if time < process.arrival_time {
                debug!("FCFS: CPU idle {time}..{}", process.arrival_time);
                time = process.arrival_time;
            }
            let start = time;
            time += process.execute(process.remaining_time);
            process.complete_at(time);
            timeline.record(process.pid, start, time);
            debug!("FCFS: P{} ran {start}..{time}", process.pid);
        }

        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::testing::{assert_run_invariants, completions, processes, spans};

    #[test]
    fn test_fcfs_reference_scenario() {
        let mut ps = processes(&[(0, 4), (1, 3), (2, 1)]);
        let timeline = Fcfs.schedule(&mut ps);

        assert_eq!(completions(&ps), vec![4, 7, 8]);
        let waiting: Vec<i64> = ps.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waiting, vec![0, 3, 5]);
        assert_eq!(spans(&timeline), vec![(1, 0, 4), (2, 4, 7), (3, 7, 8)]);
        assert_run_invariants(&ps, &timeline);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival_without_reordering_input() {
        let mut ps = processes(&[(5, 2), (0, 3)]);
        let timeline = Fcfs.schedule(&mut ps);

        assert_eq!(ps[0].pid, 1);
        assert_eq!(spans(&timeline), vec![(2, 0, 3), (1, 5, 7)]);
        assert_eq!(completions(&ps), vec![7, 3]);
    }

    #[test]
    fn test_fcfs_equal_arrivals_keep_input_order() {
        let mut ps = processes(&[(0, 5), (0, 1), (0, 2)]);
        let timeline = Fcfs.schedule(&mut ps);
        assert_eq!(spans(&timeline), vec![(1, 0, 5), (2, 5, 6), (3, 6, 8)]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let mut ps = processes(&[(0, 1), (4, 2)]);
        let timeline = Fcfs.schedule(&mut ps);
        assert_eq!(spans(&timeline), vec![(1, 0, 1), (2, 4, 6)]);
        assert_eq!(ps[1].waiting_time, 0);
        assert_run_invariants(&ps, &timeline);
    }

    #[test]
    fn test_fcfs_is_not_preemptive() {
        assert!(!Fcfs.is_preemptive());
        assert_eq!(Fcfs.name(), "FCFS");
    }
}
