//! Run configuration and fixed delay constants.

use crate::{BdError, BdResult, SeatMap};

/// Ticks a passenger spends stowing a carry-on in the overhead bin.
pub const OVERHEAD_BIN_TICKS: u32 = 10;

/// Ticks a seating conflict holds everyone involved.
pub const SHUFFLE_TICKS: u32 = 10;

/// Top-level configuration for one boarding run (or one sweep).
///
/// Typically built with struct-update syntax over [`Default`], or loaded from
/// JSON by the application crate with the `serde` feature enabled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardingConfig {
    /// Number of seat rows.  Must be positive.
    pub rows: u32,

    /// Seats in every row.  Must be positive.
    pub seats_per_row: u32,

    /// Master RNG seed handed to the ordering policy.
    pub seed: u64,

    /// Independent probability that a passenger carries a bag, in `[0, 1]`.
    pub carry_on_probability: f64,

    /// Safety bound on `Cabin::run`.  `None` runs until everyone is seated.
    pub max_ticks: Option<u64>,

    /// Emit a passenger snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for BoardingConfig {
    fn default() -> Self {
        Self {
            rows:                  3,
            seats_per_row:         3,
            seed:                  42,
            carry_on_probability:  0.8,
            max_ticks:             None,
            output_interval_ticks: 1,
        }
    }
}

impl BoardingConfig {
    /// Check every field; returns the first problem found.
    pub fn validate(&self) -> BdResult<()> {
        if self.rows == 0 || self.seats_per_row == 0 {
            return Err(BdError::Config(format!(
                "cabin must have at least one row and one seat per row (got {}×{})",
                self.rows, self.seats_per_row
            )));
        }
        if !(0.0..=1.0).contains(&self.carry_on_probability) {
            return Err(BdError::Config(format!(
                "carry_on_probability must be in [0, 1] (got {})",
                self.carry_on_probability
            )));
        }
        if self.max_ticks == Some(0) {
            return Err(BdError::Config("max_ticks must be positive when set".into()));
        }
        Ok(())
    }

    /// Total number of seats (and therefore passengers).
    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.rows as usize * self.seats_per_row as usize
    }

    /// Validate and build the seat grid for this run.
    pub fn seat_map(&self) -> BdResult<SeatMap> {
        self.validate()?;
        SeatMap::new(self.rows, self.seats_per_row)
    }
}
