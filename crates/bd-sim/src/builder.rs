//! Fluent builder for constructing a [`Cabin`].

use bd_core::{BoardingConfig, PassengerId, SimRng};
use bd_passenger::Passenger;
use bd_policy::{BoardingPolicy, RandomPolicy};

use crate::{Cabin, SimError, SimResult};

/// Fluent builder for [`Cabin`].
///
/// # Inputs
///
/// | Method             | Default                                                  |
/// |--------------------|----------------------------------------------------------|
/// | `new(config)`      | required                                                 |
/// | `.policy(p)`       | `RandomPolicy` with `config.carry_on_probability`        |
/// | `.passengers(v)`   | none; when given, replaces the policy entirely           |
///
/// The policy is called once, with a `SimRng` seeded from `config.seed`.
///
/// # Example
///
/// ```rust,ignore
/// let policy = BackToFrontPolicy::default();
/// let mut cabin = CabinBuilder::new(config).policy(&policy).build()?;
/// let ticks = cabin.run(&mut NoopObserver)?;
/// ```
pub struct CabinBuilder<'p> {
    config:     BoardingConfig,
    policy:     Option<&'p dyn BoardingPolicy>,
    passengers: Option<Vec<Passenger>>,
}

impl<'p> CabinBuilder<'p> {
    pub fn new(config: BoardingConfig) -> Self {
        Self {
            config,
            policy:     None,
            passengers: None,
        }
    }

    /// Use `policy` to build the boarding queue.
    pub fn policy(mut self, policy: &'p dyn BoardingPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Board exactly these passengers, in this order.
    ///
    /// Must cover every seat once and contain only passengers who have not
    /// boarded yet.
    pub fn passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.passengers = Some(passengers);
        self
    }

    /// Validate inputs, build the boarding queue and return a ready-to-run
    /// [`Cabin`].
    pub fn build(self) -> SimResult<Cabin> {
        let seat_map = self.config.seat_map()?;

        // ── Resolve the boarding queue ────────────────────────────────────
        let (passengers, policy_name) = match (self.passengers, self.policy) {
            (Some(list), _) => (list, "explicit".to_owned()),
            (None, Some(policy)) => {
                let mut rng = SimRng::new(self.config.seed);
                (policy.boarding_order(seat_map.seats(), &mut rng), policy.name().to_owned())
            }
            (None, None) => {
                let policy = RandomPolicy::new(self.config.carry_on_probability)?;
                let mut rng = SimRng::new(self.config.seed);
                (policy.boarding_order(seat_map.seats(), &mut rng), policy.name().to_owned())
            }
        };

        // ── Validate the seat/passenger bijection ─────────────────────────
        if passengers.len() != seat_map.len() {
            return Err(SimError::PassengerCountMismatch {
                expected: seat_map.len(),
                got:      passengers.len(),
                policy:   policy_name,
            });
        }
        seat_map.check_cover(passengers.iter().map(Passenger::target_seat))?;
        if let Some(i) = passengers.iter().position(Passenger::is_on_plane) {
            return Err(SimError::AlreadyBoarded(PassengerId(i as u32)));
        }

        tracing::debug!(
            "cabin {}×{} ready: {} passengers, {} with bags, {policy_name} policy",
            seat_map.rows(),
            seat_map.seats_per_row(),
            passengers.len(),
            passengers.iter().filter(|p| p.has_carry_on()).count(),
        );

        Ok(Cabin::new(self.config, seat_map, policy_name, passengers))
    }
}
