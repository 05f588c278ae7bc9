//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PassengerSnapshotRow, RunSummaryRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface through [`CabinOutputObserver`][crate::CabinOutputObserver],
/// which keeps the first one because observer hooks return nothing.
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write a batch of passenger snapshots.
    fn write_snapshots(&mut self, rows: &[PassengerSnapshotRow]) -> OutputResult<()>;

    /// Write the summary of a finished run.
    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        (**self).write_tick_summary(row)
    }

    fn write_snapshots(&mut self, rows: &[PassengerSnapshotRow]) -> OutputResult<()> {
        (**self).write_snapshots(rows)
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        (**self).write_run_summary(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
