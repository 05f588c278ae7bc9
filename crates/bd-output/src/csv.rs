//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `passenger_snapshots.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PassengerSnapshotRow, RunSummaryRow, TickSummaryRow};

/// Writes boarding output to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    runs:      Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write their headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "in_aisle", "stowing", "shuffling", "seated"])?;

        let mut snapshots = Writer::from_path(dir.join("passenger_snapshots.csv"))?;
        snapshots.write_record([
            "passenger_id",
            "tick",
            "state",
            "target_row",
            "target_col",
            "current_row",
            "overhead_bin_remaining",
            "shuffle_remaining",
            "accrued_ticks",
        ])?;

        let mut runs = Writer::from_path(dir.join("run_summary.csv"))?;
        runs.write_record([
            "policy",
            "rows",
            "seats_per_row",
            "seed",
            "total_ticks",
            "passengers",
            "shuffle_events",
            "bins_stowed",
            "mean_accrued_ticks",
            "max_accrued_ticks",
        ])?;

        Ok(Self {
            summaries,
            snapshots,
            runs,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.in_aisle.to_string(),
            row.stowing.to_string(),
            row.shuffling.to_string(),
            row.seated.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[PassengerSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.passenger_id.to_string(),
                row.tick.to_string(),
                row.state.as_str().to_owned(),
                row.target_row.to_string(),
                row.target_col.to_string(),
                // Empty field while still queued outside the plane.
                row.current_row.map(|r| r.to_string()).unwrap_or_default(),
                row.overhead_bin_remaining.to_string(),
                row.shuffle_remaining.to_string(),
                row.accrued_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.runs.write_record(&[
            row.policy.clone(),
            row.rows.to_string(),
            row.seats_per_row.to_string(),
            row.seed.to_string(),
            row.total_ticks.to_string(),
            row.passengers.to_string(),
            row.shuffle_events.to_string(),
            row.bins_stowed.to_string(),
            format!("{:.3}", row.mean_accrued_ticks),
            row.max_accrued_ticks.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
