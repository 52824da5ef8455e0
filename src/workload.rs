//! Random workload generation.
//!
//! Produces process tables for demos and randomized checks. Uses a
//! caller-supplied RNG so runs are reproducible with a seeded generator.
//!
//! # Usage
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_cpusched::workload::WorkloadGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let specs = WorkloadGenerator::new().with_burst_range(2, 4).generate(5, &mut rng);
//! assert_eq!(specs.len(), 5);
//! assert!(specs.iter().all(|s| (2..=4).contains(&s.burst_time)));
//! ```

use rand::Rng;

use crate::models::ProcessSpec;

/// Generator of random process tables.
///
/// All ranges are inclusive. Bounds are normalized so that `low <= high`,
/// arrivals are never negative and bursts are at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    arrival_range: (i64, i64),
    burst_range: (i64, i64),
    priority_range: (i32, i32),
}

impl WorkloadGenerator {
    /// Arrivals in 0..=10, bursts in 1..=10, priority 0.
    pub fn new() -> Self {
        Self {
            arrival_range: (0, 10),
            burst_range: (1, 10),
            priority_range: (0, 0),
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, low: i64, high: i64) -> Self {
        let low = low.max(0);
        self.arrival_range = (low, high.max(low));
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, low: i64, high: i64) -> Self {
        let low = low.max(1);
        self.burst_range = (low, high.max(low));
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, low: i32, high: i32) -> Self {
        self.priority_range = (low, high.max(low));
        self
    }

    /// Generates `count` process rows.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<ProcessSpec> {
        (0..count)
            .map(|_| {
                let arrival = rng.random_range(self.arrival_range.0..=self.arrival_range.1);
                let burst = rng.random_range(self.burst_range.0..=self.burst_range.1);
                let priority = rng.random_range(self.priority_range.0..=self.priority_range.1);
                ProcessSpec::new(arrival, burst).with_priority(priority)
            })
            .collect()
    }

    /// Generates `count` rows sorted by arrival time.
    pub fn generate_sorted<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<ProcessSpec> {
        let mut specs = self.generate(count, rng);
        specs.sort_by_key(|s| s.arrival_time);
        specs
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
