//! Shortest Job First (non-preemptive).
//!
//! Whenever the CPU frees up, the arrived process with the smallest burst
//! runs to completion. Ties: earlier arrival, then input order.

use super::SchedulingPolicy;
use crate::dispatching::{rules::ShortestBurst, run_to_completion};
use crate::models::{Process, Timeline};

/// Non-preemptive Shortest Job First scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        run_to_completion(&ShortestBurst, processes)
    }
}
