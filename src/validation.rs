//! Input validation for simulation runs.
//!
//! Checks the process table before any record is built. Detects:
//! - Empty input
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose finishing tick would overflow `i64`
//!
//! All problems are collected, not just the first one.

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    NoProcesses,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// Latest arrival plus total work does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process table.
///
/// Rows are reported as `P<n>` with `n` the 1-based row number, which is
/// also the pid the driver assigns.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(specs: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if specs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoProcesses,
            "At least one process is required",
        ));
    }

    for (i, spec) in specs.iter().enumerate() {
        let pid = i + 1;
        if spec.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{pid} has negative arrival time {}", spec.arrival_time),
            ));
        }
        if spec.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{pid} has non-positive burst time {}", spec.burst_time),
            ));
        }
    }

    // Only meaningful once every row is in range
    if errors.is_empty() && horizon(specs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times are too large to simulate",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the last completion tick: latest arrival + total work.
fn horizon(specs: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = specs.iter().map(|s| s.arrival_time).max().unwrap_or(0);
    specs
        .iter()
        .try_fold(latest_arrival, |acc, s| acc.checked_add(s.burst_time))
}
