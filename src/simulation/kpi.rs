//! Run quality metrics (KPIs).
//!
//! Computes aggregate indicators from the completed process records and
//! the timeline of a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Response | Mean of first start - arrival |
//! | Makespan | End of the last timeline entry |
//! | Busy / Idle | CPU time spent running / idle up to the makespan |
//! | Utilization | busy / makespan |
//! | Throughput | processes completed per tick |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Aggregate indicators of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean delay between arrival and first dispatch.
    pub average_response_time: f64,
    /// Tick at which the last process finished.
    pub makespan: i64,
    /// Ticks the CPU spent running a process.
    pub busy_time: i64,
    /// Ticks the CPU spent idle before the makespan.
    pub idle_time: i64,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from completed records and their timeline.
    ///
    /// # Arguments
    /// * `processes` - The records after the policy ran.
    /// * `timeline` - The execution intervals of the same run.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        let n = processes.len();
        let mean = |total: i64| {
            if n == 0 {
                0.0
            } else {
                total as f64 / n as f64
            }
        };

        let total_turnaround: i64 = processes.iter().map(|p| p.turnaround_time).sum();
        let total_waiting: i64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_response: i64 = processes
            .iter()
            .filter_map(|p| timeline.first_start_for(p.pid).map(|s| s - p.arrival_time))
            .sum();

        let makespan = timeline.end_time();
        let busy_time = timeline.busy_time();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                n as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            average_turnaround_time: mean(total_turnaround),
            average_waiting_time: mean(total_waiting),
            average_response_time: mean(total_response),
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(pid: u32, arrival: i64, burst: i64, completion: i64) -> Process {
        let mut p = Process::new(pid, arrival, burst);
        p.execute(burst);
        p.complete_at(completion);
        p
    }

    #[test]
    fn test_kpi_basic() {
        let processes = vec![completed(1, 0, 4, 4), completed(2, 1, 3, 7), completed(3, 2, 1, 8)];
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 4);
        timeline.record(2, 4, 7);
        timeline.record(3, 7, 8);

        let kpi = SimulationKpi::calculate(&processes, &timeline);
        // TAT 4, 6, 6; WT 0, 3, 5
        assert!((kpi.average_turnaround_time - 16.0 / 3.0).abs() < 1e-10);
        assert!((kpi.average_waiting_time - 8.0 / 3.0).abs() < 1e-10);
        // First starts 0, 4, 7 → response 0, 3, 5
        assert!((kpi.average_response_time - 8.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.busy_time, 8);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_with_idle_gap() {
        let processes = vec![completed(1, 0, 2, 2), completed(2, 6, 2, 8)];
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 2);
        timeline.record(2, 6, 8);

        let kpi = SimulationKpi::calculate(&processes, &timeline);
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.average_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_response_differs_from_waiting_under_preemption() {
        // P1 runs 0-1, P2 1-2, P1 2-5.
        let processes = vec![completed(1, 0, 4, 5), completed(2, 1, 1, 2)];
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 1);
        timeline.record(2, 1, 2);
        timeline.record(1, 2, 5);

        let kpi = SimulationKpi::calculate(&processes, &timeline);
        assert!((kpi.average_response_time - 0.0).abs() < 1e-10);
        assert!((kpi.average_waiting_time - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SimulationKpi::calculate(&[], &Timeline::new());
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.average_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }
}
