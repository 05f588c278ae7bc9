//! Physical seat layout.
//!
//! The cabin is a fixed `rows × seats_per_row` rectangle.  Rows are numbered
//! from the door (row 0) towards the back; columns are numbered within a row
//! starting at 0.  A passenger targeting column `c` must pass everyone already
//! in the row whose column is lower than `c`.

use std::fmt;

use crate::{BdError, BdResult};

// ── Seat ──────────────────────────────────────────────────────────────────────

/// An immutable (row, column) slot.  Zero-based on both axes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub row: u32,
    pub col: u32,
}

impl Seat {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

// ── SeatMap ───────────────────────────────────────────────────────────────────

/// The full seat set of one cabin, enumerated row-major.
///
/// Every `(row, col)` with `row < rows` and `col < seats_per_row` appears
/// exactly once, so seat uniqueness holds by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatMap {
    rows:          u32,
    seats_per_row: u32,
    seats:         Vec<Seat>,
}

impl SeatMap {
    /// Build the grid.  Both dimensions must be positive.
    pub fn new(rows: u32, seats_per_row: u32) -> BdResult<Self> {
        if rows == 0 || seats_per_row == 0 {
            return Err(BdError::Config(format!(
                "cabin must have at least one row and one seat per row (got {rows}×{seats_per_row})"
            )));
        }
        let seats = (0..rows)
            .flat_map(|r| (0..seats_per_row).map(move |c| Seat::new(r, c)))
            .collect();
        Ok(Self { rows, seats_per_row, seats })
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    /// All seats in row-major order.
    #[inline]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// `true` if `seat` lies inside the grid.
    #[inline]
    pub fn contains(&self, seat: Seat) -> bool {
        seat.row < self.rows && seat.col < self.seats_per_row
    }

    /// Row-major position of `seat`, or `None` if it lies outside the grid.
    pub fn index_of(&self, seat: Seat) -> Option<usize> {
        self.contains(seat)
            .then(|| seat.row as usize * self.seats_per_row as usize + seat.col as usize)
    }

    /// Check that `targets` assigns every seat of this map exactly once.
    ///
    /// Fails on the first seat outside the grid or the first repeated seat,
    /// then on a short assignment.
    pub fn check_cover(&self, targets: impl IntoIterator<Item = Seat>) -> BdResult<()> {
        let mut taken = vec![false; self.seats.len()];
        let mut assigned = 0usize;
        for seat in targets {
            let idx = self.index_of(seat).ok_or(BdError::SeatOutOfRange(seat))?;
            if std::mem::replace(&mut taken[idx], true) {
                return Err(BdError::DuplicateSeat(seat));
            }
            assigned += 1;
        }
        if assigned != self.seats.len() {
            return Err(BdError::Config(format!(
                "{assigned} seats assigned but the cabin has {}",
                self.seats.len()
            )));
        }
        Ok(())
    }
}
