//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `BdError` as one variant
//! via `From`, so configuration problems surface the same way everywhere.

use thiserror::Error;

use crate::Seat;

/// The top-level error type for `bd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("seat {0} appears more than once")]
    DuplicateSeat(Seat),

    #[error("seat {0} is outside the cabin")]
    SeatOutOfRange(Seat),
}

/// Shorthand result type for all `bd-*` crates.
pub type BdResult<T> = Result<T, BdError>;
