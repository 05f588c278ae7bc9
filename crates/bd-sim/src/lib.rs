//! `bd-sim` — the cabin coordinator for the boarding simulator.
//!
//! # Tick loop
//!
//! ```text
//! while not everyone is seated:
//!   ① Order    — snapshot the aisle passengers, back row first.
//!   ② Process  — for each, in that order:
//!                  in target row → stow bag once; if not shuffling and
//!                                  anyone in the row has a lower column,
//!                                  shuffle this passenger and all of them
//!                  otherwise     → step one row back if that aisle slot is free
//!                  then          → Passenger::advance_tick
//!   ③ Admit    — if aisle row 0 is free, the next queued passenger enters.
//!   ④ Report   — TickStats to the observer; advance the clock.
//! ```
//!
//! Processing back to front is what makes the tick look simultaneous: a
//! passenger leaving row `r + 1` is handled before the one behind who wants
//! to step into it, so two aisle passengers never share a row.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`sweep::run_sweep`] replicates on Rayon's pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bd_core::BoardingConfig;
//! use bd_sim::{CabinBuilder, NoopObserver};
//!
//! let mut cabin = CabinBuilder::new(BoardingConfig::default()).build()?;
//! let total_ticks = cabin.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod cabin;
pub mod error;
pub mod observer;
pub mod summary;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use builder::CabinBuilder;
pub use cabin::Cabin;
pub use error::{SimError, SimResult};
pub use observer::{CabinObserver, NoopObserver, ShuffleEvent, TickStats};
pub use summary::{RunSummary, SweepSummary};
pub use sweep::run_sweep;
