//! Simulation driver.
//!
//! # Algorithm
//!
//! 1. Build the policy (rejects a bad quantum before anything else).
//! 2. Validate the process table.
//! 3. Build records on an owned copy, pid = row number.
//! 4. Run the policy; a panic inside it becomes an internal error.
//! 5. Check every record and the timeline for consistency.
//! 6. Compute KPIs and return everything in input order.
//!
//! The caller's request is never mutated, and a failed run returns no
//! records at all.

use std::panic::{self, AssertUnwindSafe};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::{Algorithm, SimulationKpi, SimulationRequest};
use crate::error::SimulationError;
use crate::models::{Process, Timeline};
use crate::validation::validate_processes;

/// Output of one successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub algorithm: Algorithm,
    /// Quantum used (Round-Robin only).
    pub quantum: Option<i64>,
    /// Completed records, in input order.
    pub processes: Vec<Process>,
    /// Execution intervals, ordered by start time.
    pub timeline: Timeline,
    /// Aggregate indicators.
    pub kpi: SimulationKpi,
}

impl SimulationResult {
    /// Mean turnaround time over all processes.
    pub fn average_turnaround_time(&self) -> f64 {
        self.kpi.average_turnaround_time
    }

    /// Mean waiting time over all processes.
    pub fn average_waiting_time(&self) -> f64 {
        self.kpi.average_waiting_time
    }

    /// Finds a record by pid.
    pub fn process(&self, pid: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }
}

/// Runs one simulation.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::simulation::{simulate, Algorithm, SimulationRequest};
///
/// let request = SimulationRequest::new(
///     vec![ProcessSpec::new(0, 4), ProcessSpec::new(1, 3), ProcessSpec::new(2, 1)],
///     Algorithm::Fcfs,
/// );
/// let result = simulate(&request).unwrap();
/// assert_eq!(result.process(3).unwrap().completion_time, 8);
/// assert!((result.average_waiting_time() - 8.0 / 3.0).abs() < 1e-10);
/// ```
///
/// # Errors
/// - [`SimulationError::InvalidParameter`] for a bad quantum or process row.
/// - [`SimulationError::Internal`] if the policy fails unexpectedly.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    let policy = request
        .algorithm
        .policy(request.quantum)
        .inspect_err(|e| warn!("Rejected {} request: {e}", request.algorithm))?;

    if let Err(errors) = validate_processes(&request.processes) {
        for e in &errors {
            warn!("Rejected {} request: {}", request.algorithm, e.message);
        }
        let first = errors
            .into_iter()
            .next()
            .map(SimulationError::from)
            .unwrap_or_else(|| SimulationError::internal("validation failed"));
        return Err(first);
    }

    let mut processes = build_processes(request)?;

    let timeline = panic::catch_unwind(AssertUnwindSafe(|| policy.schedule(&mut processes)))
        .map_err(|_| SimulationError::internal(format!("{} run aborted", policy.name())))?;

    check_consistency(&processes, &timeline)?;

    let kpi = SimulationKpi::calculate(&processes, &timeline);
    info!(
        "{}: {} processes, avg TAT {:.2}, avg WT {:.2}, makespan {}",
        policy.name(),
        processes.len(),
        kpi.average_turnaround_time,
        kpi.average_waiting_time,
        kpi.makespan
    );

    Ok(SimulationResult {
        algorithm: request.algorithm,
        quantum: request.quantum.filter(|_| request.algorithm.requires_quantum()),
        processes,
        timeline,
        kpi,
    })
}

fn build_processes(request: &SimulationRequest) -> Result<Vec<Process>, SimulationError> {
    request
        .processes
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let pid = u32::try_from(i + 1)
                .map_err(|_| SimulationError::invalid("Too many processes"))?;
            Ok(spec.into_process(pid))
        })
        .collect()
}

/// Verifies what every policy promises before results leave the driver.
fn check_consistency(processes: &[Process], timeline: &Timeline) -> Result<(), SimulationError> {
    if !timeline.is_well_formed() {
        return Err(SimulationError::internal("timeline entries overlap"));
    }
    for p in processes {
        if !p.metrics_consistent() || timeline.time_for(p.pid) != p.burst_time {
            return Err(SimulationError::internal(format!(
                "P{} finished in an inconsistent state",
                p.pid
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;
    use crate::workload::WorkloadGenerator;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn specs(rows: &[(i64, i64)]) -> Vec<ProcessSpec> {
        rows.iter().map(|&(a, b)| ProcessSpec::new(a, b)).collect()
    }

    fn run(rows: &[(i64, i64)], algorithm: Algorithm) -> SimulationResult {
        let request = SimulationRequest::new(specs(rows), algorithm).with_quantum(2);
        simulate(&request).unwrap()
    }

    fn completion_of(result: &SimulationResult) -> Vec<i64> {
        result.processes.iter().map(|p| p.completion_time).collect()
    }

    #[test]
    fn test_fcfs_scenario() {
        let result = run(&[(0, 4), (1, 3), (2, 1)], Algorithm::Fcfs);
        assert_eq!(completion_of(&result), vec![4, 7, 8]);
        let waiting: Vec<i64> = result.processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waiting, vec![0, 3, 5]);
        assert!((result.average_waiting_time() - 8.0 / 3.0).abs() < 1e-10);
        assert!((result.average_turnaround_time() - 16.0 / 3.0).abs() < 1e-10);
        assert_eq!(result.quantum, None);
    }

    #[test]
    fn test_sjf_scenario() {
        let result = run(&[(0, 4), (1, 3), (2, 1)], Algorithm::Sjf);
        assert_eq!(completion_of(&result), vec![4, 8, 5]);
    }

    #[test]
    fn test_srt_scenario() {
        let result = run(&[(0, 7), (2, 4), (4, 1), (5, 4)], Algorithm::Srt);
        assert_eq!(completion_of(&result), vec![16, 7, 5, 11]);
        assert!((result.average_waiting_time() - 3.0).abs() < 1e-10);
        assert_eq!(result.timeline.entries()[0].end_time, 2);
    }

    #[test]
    fn test_round_robin_scenario() {
        let result = run(&[(0, 5), (1, 3), (2, 1)], Algorithm::RoundRobin);
        assert_eq!(completion_of(&result), vec![9, 8, 5]);
        assert_eq!(result.timeline.len(), 6);
        assert_eq!(result.quantum, Some(2));
    }

    #[test]
    fn test_results_keep_input_order() {
        let result = run(&[(6, 1), (0, 2), (3, 4)], Algorithm::Sjf);
        let pids: Vec<u32> = result.processes.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        for q in [0, -3] {
            let request = SimulationRequest::new(specs(&[(0, 3)]), Algorithm::RoundRobin)
                .with_quantum(q);
            let err = simulate(&request).unwrap_err();
            assert!(matches!(err, SimulationError::InvalidParameter(_)));
        }
        let missing = SimulationRequest::new(specs(&[(0, 3)]), Algorithm::RoundRobin);
        assert!(matches!(
            simulate(&missing),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_invalid_process_rows_rejected() {
        let negative = SimulationRequest::new(specs(&[(-1, 3)]), Algorithm::Fcfs);
        assert!(matches!(
            simulate(&negative),
            Err(SimulationError::InvalidParameter(ref m)) if m.contains("P1")
        ));

        let zero_burst = SimulationRequest::new(specs(&[(0, 1), (0, 0)]), Algorithm::Srt);
        assert!(matches!(
            simulate(&zero_burst),
            Err(SimulationError::InvalidParameter(ref m)) if m.contains("P2")
        ));

        let empty = SimulationRequest::new(Vec::new(), Algorithm::Fcfs);
        assert!(simulate(&empty).is_err());
    }

    #[test]
    fn test_request_untouched() {
        let request = SimulationRequest::new(specs(&[(2, 3), (0, 1)]), Algorithm::Srt);
        let before = request.clone();
        simulate(&request).unwrap();
        assert_eq!(request, before);
    }

    #[test]
    fn test_all_algorithms_hold_invariants_on_random_workloads() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new()
            .with_arrival_range(0, 20)
            .with_burst_range(1, 8)
            .with_priority_range(0, 4);

        for _ in 0..50 {
            let processes = generator.generate(12, &mut rng);
            for algorithm in Algorithm::ALL {
                let request =
                    SimulationRequest::new(processes.clone(), algorithm).with_quantum(3);
                let result = simulate(&request).unwrap();

                assert!(result.timeline.is_well_formed());
                for p in &result.processes {
                    assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
                    assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
                    assert!(p.waiting_time >= 0);
                    assert_eq!(p.remaining_time, 0);
                    assert_eq!(result.timeline.time_for(p.pid), p.burst_time);
                }
                if !algorithm.policy(Some(3)).unwrap().is_preemptive() {
                    assert_eq!(result.timeline.len(), result.processes.len());
                }
            }
        }
    }

    #[test]
    fn test_round_robin_large_quantum_matches_fcfs_on_sorted_input() {
        let mut rng = SmallRng::seed_from_u64(7);
        let generator = WorkloadGenerator::new().with_arrival_range(0, 30);

        for _ in 0..20 {
            let processes = generator.generate_sorted(10, &mut rng);
            let fcfs = simulate(&SimulationRequest::new(processes.clone(), Algorithm::Fcfs))
                .unwrap();
            let rr = simulate(
                &SimulationRequest::new(processes, Algorithm::RoundRobin).with_quantum(100),
            )
            .unwrap();
            assert_eq!(fcfs.processes, rr.processes);
            assert_eq!(fcfs.timeline, rr.timeline);
        }
    }

    #[test]
    fn test_result_serializes() {
        let result = run(&[(0, 2)], Algorithm::Fcfs);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["algorithm"], "FCFS");
        assert_eq!(json["processes"][0]["completion_time"], 2);
        assert_eq!(json["kpi"]["makespan"], 2);
    }
}
