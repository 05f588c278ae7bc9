//! Uniform random boarding order — the default policy.

use bd_core::{Seat, SimRng};
use bd_passenger::Passenger;

use crate::{BoardingPolicy, PolicyError, PolicyResult};

/// Probability that a passenger carries a bag when nothing else is configured.
pub const DEFAULT_CARRY_ON_PROBABILITY: f64 = 0.8;

/// Everyone boards in a uniformly random order; each passenger independently
/// carries a bag with probability `carry_on_probability`.
///
/// Bags are drawn in seat order first, then the queue is shuffled, so the bag
/// assignment for a given seed does not depend on the shuffle.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    carry_on_probability: f64,
}

impl RandomPolicy {
    pub fn new(carry_on_probability: f64) -> PolicyResult<Self> {
        if !(0.0..=1.0).contains(&carry_on_probability) {
            return Err(PolicyError::Config(format!(
                "carry-on probability must be in [0, 1] (got {carry_on_probability})"
            )));
        }
        Ok(Self { carry_on_probability })
    }

    #[inline]
    pub fn carry_on_probability(&self) -> f64 {
        self.carry_on_probability
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self { carry_on_probability: DEFAULT_CARRY_ON_PROBABILITY }
    }
}

impl BoardingPolicy for RandomPolicy {
    fn boarding_order(&self, seats: &[Seat], rng: &mut SimRng) -> Vec<Passenger> {
        let mut people: Vec<Passenger> = seats
            .iter()
            .map(|&seat| Passenger::new(seat, rng.gen_bool(self.carry_on_probability)))
            .collect();
        rng.shuffle(&mut people);
        people
    }

    fn name(&self) -> &str {
        "random"
    }
}
