//! Process record model.
//!
//! A process is the unit of work every scheduling policy acts upon: it
//! arrives at some tick, needs a fixed amount of CPU time, and once the
//! policy decides when it finishes, its turnaround and waiting times follow.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// Input description of one process, before a pid is assigned.
///
/// This is what a caller supplies per row: arrival, burst and an optional
/// priority (defaults to 0 when the column is not used).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Tick at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a spec with priority 0.
    pub fn new(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Builds the process record for this spec.
    pub fn into_process(self, pid: u32) -> Process {
        Process::new(pid, self.arrival_time, self.burst_time).with_priority(self.priority)
    }
}

/// A process record, mutated by the active scheduling policy.
///
/// `remaining_time` starts at `burst_time` and only ever decreases.
/// The three derived fields stay 0 until [`Process::complete_at`] runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier, unique within a run.
    pub pid: u32,
    /// Tick at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed to this process.
    pub remaining_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// Tick at which the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl Process {
    /// Creates a process with priority 0 and no progress.
    pub fn new(pid: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            priority: 0,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process may run at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Whether all CPU time has been delivered.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time <= 0
    }

    /// Consumes up to `units` of CPU time and returns how much was used.
    pub fn execute(&mut self, units: i64) -> i64 {
        let used = units.clamp(0, self.remaining_time.max(0));
        self.remaining_time -= used;
        used
    }

    /// Fixes the completion time and derives turnaround and waiting time.
    ///
    /// Called once per run, at the tick the last unit of work finished.
    pub fn complete_at(&mut self, completion_time: i64) {
        debug_assert_eq!(self.remaining_time, 0, "P{} completed early", self.pid);
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Whether the derived metrics agree with the completion time.
    pub fn metrics_consistent(&self) -> bool {
        self.is_complete()
            && self.turnaround_time == self.completion_time - self.arrival_time
            && self.waiting_time == self.turnaround_time - self.burst_time
            && self.waiting_time >= 0
    }
}
