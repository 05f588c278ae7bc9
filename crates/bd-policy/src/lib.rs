//! `bd-policy` — boarding-order policies.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                |
//! |------------------|---------------------------------------------------------|
//! | [`model`]        | `BoardingPolicy` trait (also implemented for closures)  |
//! | [`random`]       | `RandomPolicy` — uniform random order, random bags      |
//! | [`back_to_front`]| `BackToFrontPolicy` — rows descending, random in a row  |
//! | [`fixed`]        | `FixedOrderPolicy` — explicit order, no randomness      |
//! | [`error`]        | `PolicyError`, `PolicyResult<T>`                        |
//!
//! A policy turns the cabin's seat list into the boarding queue: one
//! [`Passenger`][bd_passenger::Passenger] per seat, in the order they will
//! enter the plane, each with its carry-on flag decided.  All randomness comes
//! from the `SimRng` the caller passes in, so a fixed seed fixes the queue.

pub mod back_to_front;
pub mod error;
pub mod fixed;
pub mod model;
pub mod random;


pub use back_to_front::BackToFrontPolicy;
pub use error::{PolicyError, PolicyResult};
pub use fixed::FixedOrderPolicy;
pub use model::{BoardingPolicy, policy_by_name};
pub use random::{DEFAULT_CARRY_ON_PROBABILITY, RandomPolicy};
