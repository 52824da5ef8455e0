//! Priority scheduling, non-preemptive and preemptive.
//!
//! Lower `priority` values run first. Among equal priorities the earlier
//! arrival wins, then input order, so two processes with identical arrival
//! and priority are always resolved the same way.
//!
//! - [`NonPreemptivePriority`]: SJF's dispatch loop keyed on priority.
//!   One timeline entry per process.
//! - [`PreemptivePriority`]: SRT's dispatch loop keyed on priority. A newly
//!   arrived process with a lower value takes the CPU immediately.

use super::SchedulingPolicy;
use crate::dispatching::{rules::HighestPriority, run_preemptive, run_to_completion};
use crate::models::{Process, Timeline};

/// Non-preemptive priority scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonPreemptivePriority;

impl SchedulingPolicy for NonPreemptivePriority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        run_to_completion(&HighestPriority, processes)
    }
}

/// Preemptive priority scheduling.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::policies::{PreemptivePriority, SchedulingPolicy};
///
/// let mut processes = vec![
///     Process::new(1, 0, 4).with_priority(3),
///     Process::new(2, 1, 2).with_priority(1),
/// ];
/// PreemptivePriority.schedule(&mut processes);
/// assert_eq!(processes[1].completion_time, 3);
/// assert_eq!(processes[0].completion_time, 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptivePriority;

impl SchedulingPolicy for PreemptivePriority {
    fn name(&self) -> &'static str {
        "Priority (Preemptive)"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        run_preemptive(&HighestPriority, processes)
    }
}
