//! The `Passenger` agent.

use bd_core::{OVERHEAD_BIN_TICKS, SHUFFLE_TICKS, Seat};

use crate::PassengerState;

/// One boarding passenger.
///
/// Position is tracked at row granularity: `current_row` is `None` until the
/// passenger enters the plane, then the aisle row it stands in, and finally
/// its target row once seated.  Rows never decrease.
///
/// Delays are two independent countdowns.  The bin countdown always drains
/// first; the shuffle countdown only decrements once the bin is done.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    target_seat:            Seat,
    has_carry_on:           bool,
    current_row:            Option<u32>,
    seated:                 bool,
    accrued_ticks:          u64,
    overhead_bin_remaining: u32,
    shuffle_remaining:      u32,
}

impl Passenger {
    /// A passenger who has not boarded yet.
    pub fn new(target_seat: Seat, has_carry_on: bool) -> Self {
        Self {
            target_seat,
            has_carry_on,
            current_row:            None,
            seated:                 false,
            accrued_ticks:          0,
            overhead_bin_remaining: 0,
            shuffle_remaining:      0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn target_seat(&self) -> Seat {
        self.target_seat
    }

    /// `true` while a carry-on is still waiting to be stowed.
    #[inline]
    pub fn has_carry_on(&self) -> bool {
        self.has_carry_on
    }

    #[inline]
    pub fn current_row(&self) -> Option<u32> {
        self.current_row
    }

    #[inline]
    pub fn is_on_plane(&self) -> bool {
        self.current_row.is_some()
    }

    #[inline]
    pub fn is_seated(&self) -> bool {
        self.seated
    }

    /// Ticks charged to this passenger so far.
    #[inline]
    pub fn accrued_ticks(&self) -> u64 {
        self.accrued_ticks
    }

    #[inline]
    pub fn overhead_bin_remaining(&self) -> u32 {
        self.overhead_bin_remaining
    }

    #[inline]
    pub fn shuffle_remaining(&self) -> u32 {
        self.shuffle_remaining
    }

    // ── Derived predicates ────────────────────────────────────────────────

    /// On the plane and not yet seated.
    #[inline]
    pub fn in_aisle(&self) -> bool {
        self.is_on_plane() && !self.seated
    }

    #[inline]
    pub fn in_target_row(&self) -> bool {
        self.current_row == Some(self.target_seat.row)
    }

    #[inline]
    pub fn is_stowing(&self) -> bool {
        self.overhead_bin_remaining > 0
    }

    #[inline]
    pub fn is_shuffling(&self) -> bool {
        self.shuffle_remaining > 0
    }

    pub fn state(&self) -> PassengerState {
        if self.seated {
            PassengerState::Seated
        } else if self.current_row.is_none() {
            PassengerState::NotBoarded
        } else if self.in_target_row() {
            PassengerState::InTargetRow
        } else {
            PassengerState::InAisle
        }
    }

    // ── Transitions driven by the cabin ───────────────────────────────────

    /// Step through the door into row 0.
    pub fn enter_plane(&mut self) {
        debug_assert!(self.current_row.is_none(), "passenger boarded twice");
        self.current_row = Some(0);
    }

    /// Begin stowing the carry-on.  Consumes the bag so stowage happens once.
    pub fn start_overhead_bin(&mut self) {
        debug_assert!(self.in_target_row(), "stowing outside the target row");
        self.overhead_bin_remaining = OVERHEAD_BIN_TICKS;
        self.has_carry_on = false;
    }

    /// Start (or restart) a seating-conflict delay.
    ///
    /// The cabin calls this both for a passenger who must get past others and
    /// for each passenger in the way.  A seated passenger keeps its seat; the
    /// countdown it receives never drains because seated passengers are no
    /// longer advanced.
    pub fn start_shuffling(&mut self) {
        self.shuffle_remaining = SHUFFLE_TICKS;
    }

    /// Walk one row towards the back.
    pub fn move_forward(&mut self) {
        debug_assert!(!self.seated && !self.in_target_row(), "moving past the target row");
        if let Some(row) = self.current_row.as_mut() {
            *row += 1;
        }
    }

    /// Charge one tick and seat the passenger when its delays are done.
    pub fn advance_tick(&mut self) {
        if self.seated {
            return;
        }
        debug_assert!(self.is_on_plane(), "advancing a passenger who has not boarded");
        if self.in_target_row() {
            if self.overhead_bin_remaining > 0 {
                self.overhead_bin_remaining -= 1;
            } else if self.shuffle_remaining > 0 {
                self.shuffle_remaining -= 1;
                if self.shuffle_remaining == 0 {
                    self.seated = true;
                }
            } else {
                // Nothing pending: sit down without paying for this tick.
                self.seated = true;
                return;
            }
        }
        self.accrued_ticks += 1;
    }
}
