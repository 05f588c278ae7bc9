//! `bd-output` — boarding-run output writers.
//!
//! Two backends, the second behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                                                     |
//! |-----------|---------|-------------------------------------------------------------------|
//! | *(none)*  | CSV     | `tick_summaries.csv`, `passenger_snapshots.csv`, `run_summary.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                       |
//!
//! Both implement [`OutputWriter`] and are driven by [`CabinOutputObserver`],
//! which implements `bd_sim::CabinObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bd_output::{CabinOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = CabinOutputObserver::new(writer);
//! cabin.run(&mut obs)?;
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CabinOutputObserver;
pub use row::{PassengerSnapshotRow, RunSummaryRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
