//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `tick_summaries`, `passenger_snapshots` and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, PassengerSnapshotRow, RunSummaryRow, TickSummaryRow};

/// Writes boarding output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        // Seeds use the full u64 range, so they are stored as text.
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick      INTEGER PRIMARY KEY,
                 in_aisle  INTEGER NOT NULL,
                 stowing   INTEGER NOT NULL,
                 shuffling INTEGER NOT NULL,
                 seated    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS passenger_snapshots (
                 passenger_id           INTEGER NOT NULL,
                 tick                   INTEGER NOT NULL,
                 state                  TEXT    NOT NULL,
                 target_row             INTEGER NOT NULL,
                 target_col             INTEGER NOT NULL,
                 current_row            INTEGER,
                 overhead_bin_remaining INTEGER NOT NULL,
                 shuffle_remaining      INTEGER NOT NULL,
                 accrued_ticks          INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 policy             TEXT    NOT NULL,
                 rows               INTEGER NOT NULL,
                 seats_per_row      INTEGER NOT NULL,
                 seed               TEXT    NOT NULL,
                 total_ticks        INTEGER NOT NULL,
                 passengers         INTEGER NOT NULL,
                 shuffle_events     INTEGER NOT NULL,
                 bins_stowed        INTEGER NOT NULL,
                 mean_accrued_ticks REAL    NOT NULL,
                 max_accrued_ticks  INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, in_aisle, stowing, shuffling, seated) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![row.tick, row.in_aisle, row.stowing, row.shuffling, row.seated],
        )?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[PassengerSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO passenger_snapshots \
                 (passenger_id, tick, state, target_row, target_col, current_row, \
                  overhead_bin_remaining, shuffle_remaining, accrued_ticks) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.passenger_id,
                    row.tick,
                    row.state.as_str(),
                    row.target_row,
                    row.target_col,
                    row.current_row,
                    row.overhead_bin_remaining,
                    row.shuffle_remaining,
                    row.accrued_ticks,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary \
             (policy, rows, seats_per_row, seed, total_ticks, passengers, \
              shuffle_events, bins_stowed, mean_accrued_ticks, max_accrued_ticks) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                row.policy,
                row.rows,
                row.seats_per_row,
                row.seed.to_string(),
                row.total_ticks,
                row.passengers,
                row.shuffle_events,
                row.bins_stowed,
                row.mean_accrued_ticks,
                row.max_accrued_ticks,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
