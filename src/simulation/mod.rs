//! Simulation driver and run metrics.
//!
//! Takes an immutable [`SimulationRequest`], runs the selected policy on an
//! owned copy of the processes, and returns a [`SimulationResult`] with the
//! annotated records, the timeline, and [`SimulationKpi`] aggregates.
//!
//! # Selectors
//!
//! [`Algorithm`] names the policy. Round-Robin additionally needs a
//! positive quantum; other policies ignore it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod driver;
mod kpi;
mod request;

pub use driver::{simulate, SimulationResult};
pub use kpi::SimulationKpi;
pub use request::{Algorithm, SimulationRequest};
