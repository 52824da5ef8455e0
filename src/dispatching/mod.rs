//! Selection rules and dispatch loops shared by the policies.
//!
//! SJF, SRT and both Priority variants differ only in the key used to pick
//! the next process among those that have arrived. The key is a
//! [`SelectionRule`]; the loops that drive time forward are
//! [`run_to_completion`] and [`run_preemptive`].
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, run_to_completion};
//! use u_cpusched::models::Process;
//!
//! let mut processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 1)];
//! let timeline = run_to_completion(&rules::ShortestBurst, &mut processes);
//! assert_eq!(timeline.entries()[0].pid, 2);
//! ```
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod engine;
pub mod rules;

pub use engine::{earliest_pending_arrival, run_preemptive, run_to_completion, select_next};

use crate::models::Process;
use std::fmt::Debug;

/// Key returned by a selection rule.
///
/// Lower keys = higher priority (dispatched first).
pub type SelectionKey = i64;

/// A rule that ranks ready processes.
///
/// # Key Convention
/// **Lower key = dispatched first.** Ties are broken by earlier arrival,
/// then by position in the input, so selection is always deterministic.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Ranks a ready process.
    fn key(&self, process: &Process) -> SelectionKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
