//! Simulation domain models.
//!
//! Provides the record each policy mutates and the timeline each policy
//! produces.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Caller input row (arrival, burst, priority) |
//! | `Process` | Record mutated by a policy during one run |
//! | `TimelineEntry` | One uninterrupted stretch of CPU time |
//! | `Timeline` | Ordered entries, input to Gantt rendering |

mod process;
mod timeline;

pub use process::{Process, ProcessSpec};
pub use timeline::{Timeline, TimelineEntry};
