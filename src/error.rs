//! Error type returned by the simulation driver.
//!
//! Three categories, so callers can react differently:
//! - **Invalid parameter**: a value is out of range or unrecognized.
//! - **Incomplete input**: fewer values than the declared process count.
//! - **Internal**: anything else; reported with a generic message.

use std::fmt;

use crate::validation::ValidationError;

/// A failed simulation run.
///
/// No partially scheduled records are ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Non-positive quantum, negative arrival, non-positive burst,
    /// unknown algorithm, unparsable number.
    InvalidParameter(String),
    /// A column holds fewer values than the declared process count.
    IncompleteInput {
        /// Column that ran short (e.g. "arrival time").
        field: &'static str,
        /// Declared process count.
        expected: usize,
        /// Values actually supplied.
        provided: usize,
    },
    /// Unexpected fault inside a run.
    Internal(String),
}

impl SimulationError {
    /// Creates an invalid-parameter error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the caller should prompt for missing fields.
    pub fn is_incomplete_input(&self) -> bool {
        matches!(self, Self::IncompleteInput { .. })
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
            Self::IncompleteInput {
                field,
                expected,
                provided,
            } => write!(
                f,
                "Please make sure to fill in all process details \
                 ({field}: {provided} of {expected} provided)"
            ),
            Self::Internal(msg) => write!(f, "An error occurred: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<ValidationError> for SimulationError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidParameter(err.message)
    }
}
