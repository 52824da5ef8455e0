//! Shortest Remaining Time (preemptive SJF).
//!
//! At every tick the arrived process with the least remaining work holds
//! the CPU; ties go to the earlier arrival, then to input order. Runs are
//! advanced arrival-to-arrival rather than tick by tick, with identical
//! completion times and timeline.
//!
//! # Complexity
//! O(n²): at most one decision per arrival and per completion, each an
//! O(n) scan.

use super::SchedulingPolicy;
use crate::dispatching::{rules::ShortestRemaining, run_preemptive};
use crate::models::{Process, Timeline};

/// Shortest Remaining Time scheduling.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::policies::{SchedulingPolicy, Srt};
///
/// let mut processes = vec![Process::new(1, 0, 7), Process::new(2, 2, 4)];
/// let timeline = Srt.schedule(&mut processes);
/// assert_eq!(timeline.entries()[0].end_time, 2); // P1 preempted by P2
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

impl SchedulingPolicy for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        run_preemptive(&ShortestRemaining, processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::testing::{assert_run_invariants, completions, processes, spans};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Tick-by-tick reference simulation.
    fn unit_step_srt(processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut time = 0;
        while processes.iter().any(|p| !p.is_complete()) {
            let pick = processes
                .iter()
                .enumerate()
                .filter(|(_, p)| !p.is_complete() && p.arrival_time <= time)
                .min_by_key(|&(i, p)| (p.remaining_time, p.arrival_time, i))
                .map(|(i, _)| i);
            if let Some(i) = pick {
                processes[i].execute(1);
                timeline.record(processes[i].pid, time, time + 1);
                if processes[i].is_complete() {
                    processes[i].complete_at(time + 1);
                }
            }
            time += 1;
        }
        timeline
    }

    #[test]
    fn test_srt_textbook_trace() {
        let mut ps = processes(&[(0, 7), (2, 4), (4, 1), (5, 4)]);
        let timeline = Srt.schedule(&mut ps);

        assert_eq!(
            spans(&timeline),
            vec![
                (1, 0, 2),
                (2, 2, 4),
                (3, 4, 5),
                (2, 5, 7),
                (4, 7, 11),
                (1, 11, 16),
            ]
        );
        assert_eq!(completions(&ps), vec![16, 7, 5, 11]);
        let total_wait: i64 = ps.iter().map(|p| p.waiting_time).sum();
        assert_eq!(total_wait, 12); // average 3.0
        assert_run_invariants(&ps, &timeline);
    }

    #[test]
    fn test_srt_equal_remaining_prefers_earlier_arrival() {
        // At t=2 both have 3 left; P1 arrived first and keeps the CPU.
        let mut ps = processes(&[(0, 5), (2, 3)]);
        let timeline = Srt.schedule(&mut ps);
        assert_eq!(spans(&timeline), vec![(1, 0, 5), (2, 5, 8)]);
    }

    #[test]
    fn test_srt_idle_then_run() {
        let mut ps = processes(&[(3, 2), (10, 1)]);
        let timeline = Srt.schedule(&mut ps);
        assert_eq!(spans(&timeline), vec![(1, 3, 5), (2, 10, 11)]);
        assert_run_invariants(&ps, &timeline);
    }

    #[test]
    fn test_srt_matches_unit_step_reference() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.random_range(1..=8);
            let rows: Vec<(i64, i64)> = (0..n)
                .map(|_| (rng.random_range(0..=12), rng.random_range(1..=6)))
                .collect();

            let mut fast = processes(&rows);
            let mut slow = processes(&rows);
            let fast_timeline = Srt.schedule(&mut fast);
            let slow_timeline = unit_step_srt(&mut slow);

            assert_eq!(fast, slow, "rows: {rows:?}");
            assert_eq!(fast_timeline, slow_timeline, "rows: {rows:?}");
            assert_run_invariants(&fast, &fast_timeline);
        }
    }
}
