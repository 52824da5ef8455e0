//! Simulation request: the immutable input of one run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;
use crate::models::ProcessSpec;
use crate::policies::{
    Fcfs, NonPreemptivePriority, PreemptivePriority, RoundRobin, SchedulingPolicy, Sjf, Srt,
};

/// Scheduling algorithm selector.
///
/// Parses case-insensitively from the usual labels:
///
/// ```
/// use u_cpusched::simulation::Algorithm;
///
/// assert_eq!("srtn".parse::<Algorithm>().unwrap(), Algorithm::Srt);
/// assert_eq!("Round Robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
/// assert!("lottery".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time, preemptive.
    Srt,
    /// Priority, non-preemptive.
    Priority,
    /// Priority, preemptive.
    PriorityPreemptive,
    /// Round-Robin; needs a quantum.
    RoundRobin,
}

impl Algorithm {
    /// All selectors, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srt,
        Algorithm::Priority,
        Algorithm::PriorityPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srt => "SRT",
            Algorithm::Priority => "Priority",
            Algorithm::PriorityPreemptive => "PriorityPreemptive",
            Algorithm::RoundRobin => "RoundRobin",
        }
    }

    /// Whether the priority column is read.
    pub fn uses_priority(&self) -> bool {
        matches!(self, Algorithm::Priority | Algorithm::PriorityPreemptive)
    }

    /// Whether a time quantum is required.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Builds the policy for this selector.
    ///
    /// `quantum` is only read for Round-Robin.
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`] if Round-Robin gets no quantum
    /// or a non-positive one.
    pub fn policy(
        &self,
        quantum: Option<i64>,
    ) -> Result<Box<dyn SchedulingPolicy>, SimulationError> {
        Ok(match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srt => Box::new(Srt),
            Algorithm::Priority => Box::new(NonPreemptivePriority),
            Algorithm::PriorityPreemptive => Box::new(PreemptivePriority),
            Algorithm::RoundRobin => {
                let quantum = quantum.ok_or_else(|| {
                    SimulationError::invalid("Round Robin requires a time quantum")
                })?;
                Box::new(RoundRobin::new(quantum)?)
            }
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "srt" | "srtn" | "srtf" => Ok(Algorithm::Srt),
            "priority" | "prioritynonpreemptive" => Ok(Algorithm::Priority),
            "prioritypreemptive" | "preemptivepriority" => Ok(Algorithm::PriorityPreemptive),
            "roundrobin" | "rr" => Ok(Algorithm::RoundRobin),
            _ => Err(SimulationError::invalid(format!(
                "Unknown scheduling algorithm '{}'",
                s.trim()
            ))),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = SimulationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.label().to_string()
    }
}

/// Input of one simulation run.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::simulation::{Algorithm, SimulationRequest};
///
/// let request = SimulationRequest::new(
///     vec![ProcessSpec::new(0, 5), ProcessSpec::new(1, 3)],
///     Algorithm::RoundRobin,
/// )
/// .with_quantum(2);
/// assert_eq!(request.quantum, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Process table in input order; row `i` becomes pid `i + 1`.
    pub processes: Vec<ProcessSpec>,
    /// Policy to run.
    pub algorithm: Algorithm,
    /// Round-Robin time slice. Ignored by other policies.
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(processes: Vec<ProcessSpec>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Appends one process row.
    pub fn with_process(mut self, spec: ProcessSpec) -> Self {
        self.processes.push(spec);
        self
    }

    /// Loads a request from JSON.
    ///
    /// ```
    /// use u_cpusched::simulation::{Algorithm, SimulationRequest};
    ///
    /// let request = SimulationRequest::from_json(r#"{
    ///     "algorithm": "Round Robin",
    ///     "quantum": 2,
    ///     "processes": [{"arrival_time": 0, "burst_time": 5}]
    /// }"#).unwrap();
    /// assert_eq!(request.algorithm, Algorithm::RoundRobin);
    /// ```
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`] for malformed JSON or an
    /// unknown algorithm name.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json)
            .map_err(|e| SimulationError::invalid(format!("Malformed request: {e}")))
    }
}
