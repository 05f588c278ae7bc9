//! `CabinOutputObserver<W>` — bridges `CabinObserver` to an `OutputWriter`.

use bd_core::{PassengerId, Tick};
use bd_passenger::Passenger;
use bd_sim::{CabinObserver, RunSummary, TickStats};

use crate::row::{PassengerSnapshotRow, RunSummaryRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`CabinObserver`] that writes tick summaries, passenger snapshots and
/// the run summary to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored because observer hooks return nothing.
/// After `cabin.run()` returns, check them with [`take_error`][Self::take_error]
/// or [`finish`][Self::finish].
pub struct CabinOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> CabinOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer and report the first error seen during the run.
    ///
    /// Needed when a run stops early (tick budget), since `on_run_end` is
    /// only called for completed runs.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.last_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> CabinObserver for CabinOutputObserver<W> {
    fn on_tick_end(&mut self, stats: &TickStats) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(stats));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, passengers: &[Passenger]) {
        let rows: Vec<PassengerSnapshotRow> = passengers
            .iter()
            .enumerate()
            .map(|(i, p)| PassengerSnapshotRow::new(PassengerId(i as u32), tick, p))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let result = self.writer.write_run_summary(&RunSummaryRow::from(summary));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
