//! CPU scheduling policies.
//!
//! Every policy takes ownership of a process slice for one run, fixes each
//! process's completion time (deriving turnaround and waiting time at that
//! moment), and returns the execution timeline.
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`Fcfs`] | no | arrival order |
//! | [`Sjf`] | no | shortest burst |
//! | [`Srt`] | yes | shortest remaining time |
//! | [`NonPreemptivePriority`] | no | lowest priority value |
//! | [`PreemptivePriority`] | yes | lowest priority value |
//! | [`RoundRobin`] | yes (quantum) | cyclic input order |
//!
//! # Slice Order
//! Policies never reorder the slice. Its order is the caller's input order
//! and serves as the last tie-breaker.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srt;

pub use fcfs::Fcfs;
pub use priority::{NonPreemptivePriority, PreemptivePriority};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srt::Srt;

use crate::models::{Process, Timeline};
use std::fmt::Debug;

/// A CPU scheduling discipline.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Whether a running process can lose the CPU before it finishes.
    fn is_preemptive(&self) -> bool;

    /// Runs every process in `processes` to completion.
    ///
    /// On return each process has `remaining_time == 0` and consistent
    /// completion, turnaround and waiting times.
    fn schedule(&self, processes: &mut [Process]) -> Timeline;
}
