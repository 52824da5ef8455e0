//! Execution timeline model.
//!
//! A timeline is the ordered list of CPU occupancy intervals produced by a
//! scheduling run. Chart collaborators draw one labeled span per entry.
//!
//! # Invariants
//! - Entries are sorted by `start_time` and never overlap.
//! - Consecutive slices of the same process that touch are merged, so each
//!   entry is a maximal uninterrupted run.
//! - Empty intervals are never recorded.

use serde::{Deserialize, Serialize};

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Process that ran.
    pub pid: u32,
    /// First tick of the interval.
    pub start_time: i64,
    /// Tick at which the interval ended (exclusive).
    pub end_time: i64,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(pid: u32, start_time: i64, end_time: i64) -> Self {
        Self {
            pid,
            start_time,
            end_time,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Ordered execution intervals of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `pid` ran during `[start_time, end_time)`.
    ///
    /// Extends the last entry instead when it belongs to the same process
    /// and ends exactly at `start_time`.
    pub fn record(&mut self, pid: u32, start_time: i64, end_time: i64) {
        if end_time <= start_time {
            return;
        }
        debug_assert!(
            self.end_time() <= start_time,
            "P{pid} starts at {start_time} before the CPU is free"
        );
        if let Some(last) = self.entries.last_mut() {
            if last.pid == pid && last.end_time == start_time {
                last.end_time = end_time;
                return;
            }
        }
        self.entries.push(TimelineEntry::new(pid, start_time, end_time));
    }

    /// All entries, ordered by start time.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last interval (0 for an empty timeline).
    pub fn end_time(&self) -> i64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(TimelineEntry::duration).sum()
    }

    /// All entries for one process.
    pub fn entries_for(&self, pid: u32) -> Vec<&TimelineEntry> {
        self.entries.iter().filter(|e| e.pid == pid).collect()
    }

    /// Total CPU time delivered to one process.
    pub fn time_for(&self, pid: u32) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.pid == pid)
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Tick at which a process first got the CPU.
    pub fn first_start_for(&self, pid: u32) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.pid == pid)
            .map(|e| e.start_time)
    }

    /// Whether entries are sorted and pairwise disjoint.
    pub fn is_well_formed(&self) -> bool {
        self.entries.iter().all(|e| e.duration() > 0)
            && self
                .entries
                .windows(2)
                .all(|w| w[0].end_time <= w[1].start_time)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
