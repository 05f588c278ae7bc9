//! Passenger lifecycle states.

use std::fmt;

/// Where a passenger is in the boarding lifecycle.
///
/// Progression is strictly forward:
///
/// ```text
/// NotBoarded → InAisle → InTargetRow → Seated
///                  └──────────────────────↗
/// ```
///
/// A passenger who walks into its row with nothing to wait for sits down in
/// the same tick, so `InTargetRow` is observed between ticks only while a bin
/// or shuffle delay is pending, or right after admission into row 0.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassengerState {
    NotBoarded,
    InAisle,
    InTargetRow,
    Seated,
}

impl PassengerState {
    /// Short lowercase label used by output writers.
    pub fn as_str(self) -> &'static str {
        match self {
            PassengerState::NotBoarded  => "not_boarded",
            PassengerState::InAisle     => "in_aisle",
            PassengerState::InTargetRow => "in_target_row",
            PassengerState::Seated      => "seated",
        }
    }
}

impl fmt::Display for PassengerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
