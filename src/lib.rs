//! CPU scheduling simulator.
//!
//! Runs a fixed set of processes through one classic single-CPU policy and
//! reports per-process completion, turnaround and waiting times together
//! with the execution timeline.
//!
//! # Modules
//!
//! - **`models`**: `ProcessSpec`, `Process`, `Timeline`, `TimelineEntry`
//! - **`policies`**: FCFS, SJF, SRT, Priority (both modes), Round-Robin
//! - **`dispatching`**: Selection rules and the shared dispatch loops
//! - **`simulation`**: Request, driver and aggregate KPIs
//! - **`validation`**: Process table checks
//! - **`input`**: Raw form parsing
//! - **`report`**: Results table, CSV export, text Gantt chart
//! - **`workload`**: Random workload generation
//! - **`error`**: `SimulationError`
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessSpec;
//! use u_cpusched::simulation::{simulate, Algorithm, SimulationRequest};
//!
//! let request = SimulationRequest::new(
//!     vec![ProcessSpec::new(0, 5), ProcessSpec::new(1, 3), ProcessSpec::new(2, 1)],
//!     Algorithm::RoundRobin,
//! )
//! .with_quantum(2);
//!
//! let result = simulate(&request).unwrap();
//! assert_eq!(result.process(1).unwrap().completion_time, 9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum, Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod policies;
pub mod report;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
