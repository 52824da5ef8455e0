//! Round-Robin.
//!
//! # Algorithm
//!
//! 1. Sweep the unfinished processes in input order (never re-sorted).
//! 2. Skip a process whose arrival is still in the future.
//! 3. Otherwise run it for `min(remaining, quantum)` and advance the clock.
//! 4. If a whole sweep ran nothing, idle until the earliest pending arrival.
//!
//! A process that finishes gets its completion time at the advanced clock.
//! Back-to-back slices of the same process (nothing else ready) are
//! reported as one timeline entry.

use log::debug;

use super::SchedulingPolicy;
use crate::dispatching::earliest_pending_arrival;
use crate::error::SimulationError;
use crate::models::{Process, Timeline};

/// Round-Robin scheduling with a fixed time quantum.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::policies::{RoundRobin, SchedulingPolicy};
///
/// let rr = RoundRobin::new(2).unwrap();
/// let mut processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 2)];
/// let timeline = rr.schedule(&mut processes);
/// assert_eq!(timeline.len(), 3); // P1 0-2, P2 2-4, P1 4-5
///
/// assert!(RoundRobin::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin policy.
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`] if `quantum` is not positive.
    pub fn new(quantum: i64) -> Result<Self, SimulationError> {
        if quantum <= 0 {
            return Err(SimulationError::invalid(format!(
                "Quantum must be a positive integer, got {quantum}"
            )));
        }
        Ok(Self { quantum })
    }

    /// The time slice granted per turn.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut time = 0;

        loop {
            let mut ran = false;

            for process in processes.iter_mut() {
                if process.is_complete() || !process.has_arrived(time) {
                    continue;
                }
                let start = time;
                time += process.execute(self.quantum);
                timeline.record(process.pid, start, time);
                debug!("RR(q={}): P{} ran {start}..{time}", self.quantum, process.pid);

                if process.is_complete() {
                    process.complete_at(time);
                }
                ran = true;
            }

            if !ran {
                match earliest_pending_arrival(processes) {
                    Some(arrival) => {
                        debug!("RR(q={}): CPU idle {time}..{arrival}", self.quantum);
                        time = arrival;
                    }
                    None => break,
                }
            }
        }

        timeline
    }
}
