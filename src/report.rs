//! Plain-text and CSV renderings of a run.
//!
//! - [`format_table`]: tab-separated results table with averages.
//! - [`write_csv`]: one row per process for export.
//! - [`gantt_rows`] / [`format_gantt`]: per-process spans for charting.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io;

use serde::Serialize;

use crate::models::{Process, Timeline};
use crate::simulation::SimulationResult;

/// CSV header written by [`write_csv`].
pub const CSV_HEADER: &str =
    "pid,arrival_time,burst_time,completion_time,turnaround_time,waiting_time";

/// Formats the results table.
///
/// ```text
/// Process	AT	BT	CT	TAT	WT
/// 1	0	4	4	4	0
///
/// Average TAT: 4.00
/// Average WT: 0.00
/// ```
pub fn format_table(result: &SimulationResult) -> String {
    let mut out = String::from("Process\tAT\tBT\tCT\tTAT\tWT\n");
    for p in &result.processes {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            p.completion_time,
            p.turnaround_time,
            p.waiting_time
        );
    }
    let _ = writeln!(out, "\nAverage TAT: {:.2}", result.average_turnaround_time());
    let _ = writeln!(out, "Average WT: {:.2}", result.average_waiting_time());
    out
}

/// Writes one CSV row per process, preceded by [`CSV_HEADER`].
///
/// # Errors
/// Propagates I/O errors from `writer`.
pub fn write_csv<W: io::Write>(processes: &[Process], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for p in processes {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            p.completion_time,
            p.turnaround_time,
            p.waiting_time
        )?;
    }
    writer.flush()
}

/// All CPU intervals of one process, for one chart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttRow {
    /// Process shown on this row.
    pub pid: u32,
    /// `(start, end)` intervals in time order.
    pub spans: Vec<(i64, i64)>,
}

/// Groups timeline entries into one row per process, ordered by pid.
pub fn gantt_rows(timeline: &Timeline) -> Vec<GanttRow> {
    let mut rows: BTreeMap<u32, Vec<(i64, i64)>> = BTreeMap::new();
    for e in timeline {
        rows.entry(e.pid)
            .or_default()
            .push((e.start_time, e.end_time));
    }
    rows.into_iter()
        .map(|(pid, spans)| GanttRow { pid, spans })
        .collect()
}

/// Widest bar [`format_gantt`] draws, in columns.
pub const MAX_GANTT_COLUMNS: usize = 120;

/// Renders a text Gantt chart, one character per tick.
///
/// Runs longer than [`MAX_GANTT_COLUMNS`] ticks are scaled down: each
/// column then covers several ticks and shows `#` when the process ran at
/// any point inside it.
///
/// ```text
/// P1 |####    |
/// P2 |    ### |
/// P3 |       #|
///    0        8
/// ```
pub fn format_gantt(timeline: &Timeline) -> String {
    let rows = gantt_rows(timeline);
    let Some(label_width) = rows.iter().map(|r| format!("P{}", r.pid).len()).max() else {
        return String::new();
    };
    let run_end = timeline.end_time().max(0);
    let ticks_per_column = ceil_div(run_end, MAX_GANTT_COLUMNS as i64).max(1);
    let width = usize::try_from(ceil_div(run_end, ticks_per_column)).unwrap_or(0);

    let mut out = String::new();
    for row in &rows {
        let mut bar = vec![' '; width];
        for &(start, end) in &row.spans {
            if end <= start || start < 0 {
                continue;
            }
            let first = usize::try_from(start / ticks_per_column).unwrap_or(width);
            let last = usize::try_from((end - 1) / ticks_per_column).unwrap_or(width);
            for cell in bar.iter_mut().take(last + 1).skip(first) {
                *cell = '#';
            }
        }
        let label = format!("P{}", row.pid);
        let bar: String = bar.into_iter().collect();
        let _ = writeln!(out, "{label:<label_width$} |{bar}|");
    }

    let end_label = run_end.to_string();
    // Scale marks sit under the left and right borders of the bar
    let pad = " ".repeat(label_width + 1);
    let gap = " ".repeat((width + 1).saturating_sub(end_label.len()));
    let _ = writeln!(out, "{pad}0{gap}{end_label}");
    out
}

/// `ceil(value / divisor)` for non-negative `value` and positive `divisor`.
fn ceil_div(value: i64, divisor: i64) -> i64 {
    value / divisor + i64::from(value % divisor != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;
    use crate::simulation::{simulate, Algorithm, SimulationRequest};

    fn fcfs_result() -> SimulationResult {
        let request = SimulationRequest::new(
            vec![
                ProcessSpec::new(0, 4),
                ProcessSpec::new(1, 3),
                ProcessSpec::new(2, 1),
            ],
            Algorithm::Fcfs,
        );
        simulate(&request).unwrap()
    }

    #[test]
    fn test_format_table() {
        let table = format_table(&fcfs_result());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Process\tAT\tBT\tCT\tTAT\tWT");
        assert_eq!(lines[1], "1\t0\t4\t4\t4\t0");
        assert_eq!(lines[3], "3\t2\t1\t8\t6\t5");
        assert_eq!(lines[5], "Average TAT: 5.33");
        assert_eq!(lines[6], "Average WT: 2.67");
    }

    #[test]
    fn test_write_csv() {
        let result = fcfs_result();
        let mut buf = Vec::new();
        write_csv(&result.processes, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[2], "2,1,3,7,6,3");
    }

    #[test]
    fn test_gantt_rows_group_by_pid() {
        let mut timeline = Timeline::new();
        timeline.record(2, 0, 1);
        timeline.record(1, 1, 3);
        timeline.record(2, 3, 5);

        let rows = gantt_rows(&timeline);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], GanttRow { pid: 1, spans: vec![(1, 3)] });
        assert_eq!(rows[1].spans, vec![(0, 1), (3, 5)]);
    }

    #[test]
    fn test_format_gantt() {
        let chart = format_gantt(&fcfs_result().timeline);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "P1 |####    |");
        assert_eq!(lines[1], "P2 |    ### |");
        assert_eq!(lines[2], "P3 |       #|");
        assert_eq!(lines[3], "   0        8");
    }

    #[test]
    fn test_format_gantt_scales_long_runs() {
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 120);
        timeline.record(2, 120, 240);

        let chart = format_gantt(&timeline);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], format!("P1 |{}{}|", "#".repeat(60), " ".repeat(60)));
        assert_eq!(lines[1], format!("P2 |{}{}|", " ".repeat(60), "#".repeat(60)));
        assert!(lines[2].ends_with("240"));
    }

    #[test]
    fn test_format_gantt_far_arrival_stays_bounded() {
        let request = SimulationRequest::new(
            vec![ProcessSpec::new(0, 1), ProcessSpec::new(1_000_000_000_000_000, 1)],
            Algorithm::Fcfs,
        );
        let result = simulate(&request).unwrap();

        let chart = format_gantt(&result.timeline);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        for row in &lines[..2] {
            assert!(row.chars().count() <= "P1 |".len() + MAX_GANTT_COLUMNS + 1);
            assert_eq!(row.matches('#').count(), 1);
        }
        assert!(lines[0].starts_with("P1 |#"));
        assert!(lines[1].ends_with("#|"));
        assert!(lines[2].ends_with("1000000000000001"));
    }

    #[test]
    fn test_format_gantt_empty() {
        assert!(format_gantt(&Timeline::new()).is_empty());
    }
}
