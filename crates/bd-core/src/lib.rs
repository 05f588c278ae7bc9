//! `bd-core` — foundational types for the boarding simulator.
//!
//! This crate is a dependency of every other `bd-*` crate.  It has no `bd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `PassengerId`                                         |
//! | [`seat`]    | `Seat`, `SeatMap`                                     |
//! | [`time`]    | `Tick`, `SimClock`                                    |
//! | [`rng`]     | `SimRng`                                              |
//! | [`config`]  | `BoardingConfig`, delay constants                     |
//! | [`error`]   | `BdError`, `BdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod seat;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BoardingConfig, OVERHEAD_BIN_TICKS, SHUFFLE_TICKS};
pub use error::{BdError, BdResult};
pub use ids::PassengerId;
pub use rng::SimRng;
pub use seat::{Seat, SeatMap};
pub use time::{SimClock, Tick};
