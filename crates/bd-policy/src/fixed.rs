//! Explicit, randomness-free boarding order.

use bd_core::{Seat, SimRng};
use bd_passenger::Passenger;

use crate::BoardingPolicy;

/// Boards a fixed list of `(seat, has_carry_on)` entries in the given order.
///
/// The seat list handed to [`boarding_order`][BoardingPolicy::boarding_order]
/// is ignored and the RNG is never touched; the cabin still checks that the
/// entries cover its seats exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedOrderPolicy {
    entries: Vec<(Seat, bool)>,
}

impl FixedOrderPolicy {
    pub fn new(entries: Vec<(Seat, bool)>) -> Self {
        Self { entries }
    }

    /// Board `seats` in iteration order, nobody carrying a bag.
    pub fn without_bags(seats: impl IntoIterator<Item = Seat>) -> Self {
        Self::new(seats.into_iter().map(|s| (s, false)).collect())
    }

    /// Board `seats` in iteration order, everybody carrying a bag.
    pub fn with_bags(seats: impl IntoIterator<Item = Seat>) -> Self {
        Self::new(seats.into_iter().map(|s| (s, true)).collect())
    }

    pub fn entries(&self) -> &[(Seat, bool)] {
        &self.entries
    }
}

impl BoardingPolicy for FixedOrderPolicy {
    fn boarding_order(&self, _seats: &[Seat], _rng: &mut SimRng) -> Vec<Passenger> {
        self.entries
            .iter()
            .map(|&(seat, bag)| Passenger::new(seat, bag))
            .collect()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
