//! Dispatch loops for rule-driven policies.
//!
//! Both loops walk a process slice in place. The slice order is the input
//! order, which is the final tie-breaker for every selection.
//!
//! # Preemption
//! [`run_preemptive`] has the semantics of a one-tick-at-a-time simulation
//! but jumps straight to the next decision point: the next arrival or the
//! completion of the selected process, whichever comes first. Between
//! those points the selection cannot change, because the running process's
//! key never grows and no other key moves.

use log::debug;

use super::SelectionRule;
use crate::models::{Process, Timeline};

/// Picks the next process to run at `time`.
///
/// Only arrived, incomplete processes are eligible. Ties on the rule key
/// go to the earlier arrival, then to the lower slice index.
pub fn select_next<R: SelectionRule + ?Sized>(
    rule: &R,
    processes: &[Process],
    time: i64,
) -> Option<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_complete() && p.has_arrived(time))
        .min_by_key(|&(idx, p)| (rule.key(p), p.arrival_time, idx))
        .map(|(idx, _)| idx)
}

/// Earliest arrival among processes that still need CPU time.
pub fn earliest_pending_arrival(processes: &[Process]) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_complete())
        .map(|p| p.arrival_time)
        .min()
}

/// Earliest arrival strictly after `time` among unfinished processes.
fn next_arrival_after(processes: &[Process], time: i64) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_complete() && p.arrival_time > time)
        .map(|p| p.arrival_time)
        .min()
}

/// Non-preemptive dispatch: each selected process runs to completion.
///
/// # Algorithm
/// 1. Among arrived processes, select by rule.
/// 2. If none has arrived, idle until the earliest pending arrival.
/// 3. Run the selection for its full remaining time and complete it.
///
/// Yields exactly one timeline entry per process.
pub fn run_to_completion<R: SelectionRule + ?Sized>(
    rule: &R,
    processes: &mut [Process],
) -> Timeline {
    let mut timeline = Timeline::new();
    let mut time = 0;

    loop {
        let Some(idx) = select_next(rule, processes, time) else {
            match earliest_pending_arrival(processes) {
                Some(arrival) => {
                    debug!("{}: CPU idle {time}..{arrival}", rule.name());
                    time = arrival;
                    continue;
                }
                None => break,
            }
        };

        let process = &mut processes[idx];
        let start = time;
        time += process.execute(process.remaining_time);
        process.complete_at(time);
        timeline.record(process.pid, start, time);
        debug!("{}: P{} ran {start}..{time}", rule.name(), process.pid);
    }

    timeline
}

/// Preemptive dispatch: the selection is re-evaluated at every arrival.
///
/// # Algorithm
/// 1. Among arrived processes, select by rule.
/// 2. If none has arrived, idle until the earliest pending arrival.
/// 3. Run the selection until it finishes or the next process arrives.
/// 4. Complete it the moment its remaining time reaches zero.
///
/// A process may yield several timeline entries; touching slices of the
/// same process are merged.
pub fn run_preemptive<R: SelectionRule + ?Sized>(
    rule: &R,
    processes: &mut [Process],
) -> Timeline {
    let mut timeline = Timeline::new();
    let mut time = 0;

    loop {
        let Some(idx) = select_next(rule, processes, time) else {
            match earliest_pending_arrival(processes) {
                Some(arrival) => {
                    debug!("{}: CPU idle {time}..{arrival}", rule.name());
                    time = arrival;
                    continue;
                }
                None => break,
            }
        };

        let next_arrival = next_arrival_after(processes, time);
        let process = &mut processes[idx];
        let budget = match next_arrival {
            Some(arrival) => process.remaining_time.min(arrival - time),
            None => process.remaining_time,
        };

        let start = time;
        time += process.execute(budget);
        timeline.record(process.pid, start, time);

        if process.is_complete() {
            process.complete_at(time);
            debug!("{}: P{} finished at {time}", rule.name(), process.pid);
        }
    }

    timeline
}
