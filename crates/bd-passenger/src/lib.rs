//! `bd-passenger` — the per-agent boarding state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`state`]     | `PassengerState` — the four lifecycle states    |
//! | [`passenger`] | `Passenger` — position, delays, accrued time    |
//!
//! A passenger never decides where to go on its own.  The cabin (in
//! `bd-sim`) arbitrates row occupancy and calls [`Passenger::move_forward`],
//! [`Passenger::start_overhead_bin`] and [`Passenger::start_shuffling`];
//! [`Passenger::advance_tick`] then charges time and performs the seating
//! transition once per tick.

pub mod passenger;
pub mod state;


pub use passenger::Passenger;
pub use state::PassengerState;
