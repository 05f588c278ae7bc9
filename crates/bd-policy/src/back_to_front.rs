//! Back-to-front boarding: the last row boards first.

use bd_core::{Seat, SimRng};
use bd_passenger::Passenger;

use crate::{BoardingPolicy, PolicyResult, RandomPolicy};

/// Rows board in descending order; order inside a row is random.
///
/// Bags are drawn exactly as [`RandomPolicy`] draws them, so the two policies
/// give the same passengers the same bags for a given seed.
#[derive(Clone, Debug, Default)]
pub struct BackToFrontPolicy {
    bags: RandomPolicy,
}

impl BackToFrontPolicy {
    pub fn new(carry_on_probability: f64) -> PolicyResult<Self> {
        Ok(Self { bags: RandomPolicy::new(carry_on_probability)? })
    }
}

impl BoardingPolicy for BackToFrontPolicy {
    fn boarding_order(&self, seats: &[Seat], rng: &mut SimRng) -> Vec<Passenger> {
        let p = self.bags.carry_on_probability();
        let mut people: Vec<Passenger> = seats
            .iter()
            .map(|&seat| Passenger::new(seat, rng.gen_bool(p)))
            .collect();

        // Shuffle first, then a stable sort keeps the shuffled order within a row.
        rng.shuffle(&mut people);
        people.sort_by(|a, b| b.target_seat().row.cmp(&a.target_seat().row));
        people
    }

    fn name(&self) -> &str {
        "back-to-front"
    }
}
