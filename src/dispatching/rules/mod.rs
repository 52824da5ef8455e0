//! Built-in selection rules.
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{SelectionKey, SelectionRule};
use crate::models::Process;

/// Shortest total burst first.
///
/// Used by non-preemptive SJF. Minimizes average waiting time when all
/// processes are available at once.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> SelectionKey {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest remaining CPU time first.
///
/// Used by SRT. The key shrinks as the process runs, so a running process
/// only loses the CPU to a newly arrived shorter one.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn key(&self, process: &Process) -> SelectionKey {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> SelectionKey {
        SelectionKey::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Priority (lower value first)"
    }
}
