//! Raw form input.
//!
//! Interactive front ends collect a declared process count and one text
//! column per field. [`ProcessForm::parse`] turns those columns into
//! [`ProcessSpec`]s, reporting missing entries separately from bad ones so
//! the caller can prompt for exactly what is missing.

use crate::error::SimulationError;
use crate::models::ProcessSpec;

/// Text columns of a process entry form.
///
/// # Example
///
/// ```
/// use u_cpusched::input::ProcessForm;
///
/// let form = ProcessForm::new(2)
///     .with_arrivals(["0", "1"])
///     .with_bursts(["4", "3"]);
/// let specs = form.parse().unwrap();
/// assert_eq!(specs[1].burst_time, 3);
/// assert_eq!(specs[1].priority, 0); // no priority column
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessForm {
    /// Number of processes the user declared.
    pub declared_count: usize,
    /// Arrival time entries.
    pub arrivals: Vec<String>,
    /// Burst time entries.
    pub bursts: Vec<String>,
    /// Priority entries; empty when the column is hidden.
    pub priorities: Vec<String>,
}

impl ProcessForm {
    /// Creates an empty form for `declared_count` processes.
    pub fn new(declared_count: usize) -> Self {
        Self {
            declared_count,
            ..Default::default()
        }
    }

    /// Reads the declared count from its text field.
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`] unless the text is a
    /// non-negative integer.
    pub fn from_count_text(text: &str) -> Result<Self, SimulationError> {
        let count = text.trim().parse::<usize>().map_err(|_| {
            SimulationError::invalid(format!("Invalid number of processes '{}'", text.trim()))
        })?;
        Ok(Self::new(count))
    }

    /// Sets the arrival column.
    pub fn with_arrivals<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arrivals = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the burst column.
    pub fn with_bursts<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bursts = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the priority column.
    pub fn with_priorities<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priorities = values.into_iter().map(Into::into).collect();
        self
    }

    /// Parses the first `declared_count` rows.
    ///
    /// Blank entries count as missing. An empty priority column means
    /// priority 0 for every row.
    ///
    /// # Errors
    /// - [`SimulationError::IncompleteInput`] if a column has fewer
    ///   non-blank entries than declared.
    /// - [`SimulationError::InvalidParameter`] if an entry is not an integer.
    pub fn parse(&self) -> Result<Vec<ProcessSpec>, SimulationError> {
        let n = self.declared_count;
        check_filled("arrival time", &self.arrivals, n)?;
        check_filled("burst time", &self.bursts, n)?;
        if !self.priorities.is_empty() {
            check_filled("priority", &self.priorities, n)?;
        }

        (0..n)
            .map(|i| {
                let arrival = parse_field::<i64>("arrival time", i, &self.arrivals[i])?;
                let burst = parse_field::<i64>("burst time", i, &self.bursts[i])?;
                let priority = match self.priorities.get(i) {
                    Some(text) => parse_field::<i32>("priority", i, text)?,
                    None => 0,
                };
                Ok(ProcessSpec::new(arrival, burst).with_priority(priority))
            })
            .collect()
    }
}

fn check_filled(
    field: &'static str,
    values: &[String],
    expected: usize,
) -> Result<(), SimulationError> {
    let provided = values
        .iter()
        .take(expected)
        .take_while(|v| !v.trim().is_empty())
        .count();
    if provided < expected {
        return Err(SimulationError::IncompleteInput {
            field,
            expected,
            provided,
        });
    }
    Ok(())
}

fn parse_field<T: std::str::FromStr>(
    field: &str,
    row: usize,
    text: &str,
) -> Result<T, SimulationError> {
    text.trim().parse::<T>().map_err(|_| {
        SimulationError::invalid(format!(
            "P{} {field} '{}' is not an integer",
            row + 1,
            text.trim()
        ))
    })
}
