//! The `BoardingPolicy` trait — the main extension point for user code.

use bd_core::{Seat, SimRng};
use bd_passenger::Passenger;

use crate::{BackToFrontPolicy, PolicyError, PolicyResult, RandomPolicy};

/// Decides who boards when, and who brings a bag.
///
/// The returned list must hold exactly one passenger per seat in `seats`;
/// the cabin validates this and refuses to build otherwise.  Position in the
/// list is boarding order.
///
/// # Thread safety
///
/// Sweeps may call the same policy from several threads (each with its own
/// `SimRng`), so implementations must be `Send + Sync`.
///
/// # Closures
///
/// Any `Fn(&[Seat], &mut SimRng) -> Vec<Passenger>` is a policy:
///
/// ```rust,ignore
/// let window_first = |seats: &[Seat], _rng: &mut SimRng| {
///     let mut order: Vec<Seat> = seats.to_vec();
///     order.sort_by_key(|s| s.col);
///     order.into_iter().map(|s| Passenger::new(s, false)).collect()
/// };
/// let cabin = CabinBuilder::new(config).policy(&window_first).build()?;
/// ```
pub trait BoardingPolicy: Send + Sync {
    /// Build the boarding queue for `seats`.
    fn boarding_order(&self, seats: &[Seat], rng: &mut SimRng) -> Vec<Passenger>;

    /// Short label used in logs and output files.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> BoardingPolicy for F
where
    F: Fn(&[Seat], &mut SimRng) -> Vec<Passenger> + Send + Sync,
{
    fn boarding_order(&self, seats: &[Seat], rng: &mut SimRng) -> Vec<Passenger> {
        self(seats, rng)
    }
}

/// Look up one of the built-in randomised policies by its [`name`][BoardingPolicy::name].
///
/// Used by drivers that take the policy from a command line or config file.
pub fn policy_by_name(
    name:                 &str,
    carry_on_probability: f64,
) -> PolicyResult<Box<dyn BoardingPolicy>> {
    match name {
        "random" => Ok(Box::new(RandomPolicy::new(carry_on_probability)?)),
        "back-to-front" => Ok(Box::new(BackToFrontPolicy::new(carry_on_probability)?)),
        other => Err(PolicyError::UnknownPolicy(other.to_owned())),
    }
}
