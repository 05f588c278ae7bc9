//! Plain data row types written by output backends.

use bd_core::{PassengerId, Tick};
use bd_passenger::{Passenger, PassengerState};
use bd_sim::{RunSummary, TickStats};

/// Aisle and seating counts after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    pub in_aisle:  u64,
    pub stowing:   u64,
    pub shuffling: u64,
    pub seated:    u64,
}

impl From<&TickStats> for TickSummaryRow {
    fn from(stats: &TickStats) -> Self {
        Self {
            tick:      stats.tick.0,
            in_aisle:  stats.in_aisle as u64,
            stowing:   stats.stowing as u64,
            shuffling: stats.shuffling as u64,
            seated:    stats.seated as u64,
        }
    }
}

/// One passenger's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerSnapshotRow {
    pub passenger_id:           u32,
    pub tick:                   u64,
    pub state:                  PassengerState,
    pub target_row:             u32,
    pub target_col:             u32,
    /// `None` until the passenger has boarded.
    pub current_row:            Option<u32>,
    pub overhead_bin_remaining: u32,
    pub shuffle_remaining:      u32,
    pub accrued_ticks:          u64,
}

impl PassengerSnapshotRow {
    pub fn new(id: PassengerId, tick: Tick, p: &Passenger) -> Self {
        Self {
            passenger_id:           id.0,
            tick:                   tick.0,
            state:                  p.state(),
            target_row:             p.target_seat().row,
            target_col:             p.target_seat().col,
            current_row:            p.current_row(),
            overhead_bin_remaining: p.overhead_bin_remaining(),
            shuffle_remaining:      p.shuffle_remaining(),
            accrued_ticks:          p.accrued_ticks(),
        }
    }
}

/// The outcome of one complete run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummaryRow {
    pub policy:             String,
    pub rows:               u32,
    pub seats_per_row:      u32,
    pub seed:               u64,
    pub total_ticks:        u64,
    pub passengers:         u64,
    pub shuffle_events:     u64,
    pub bins_stowed:        u64,
    pub mean_accrued_ticks: f64,
    pub max_accrued_ticks:  u64,
}

impl From<&RunSummary> for RunSummaryRow {
    fn from(s: &RunSummary) -> Self {
        Self {
            policy:             s.policy.clone(),
            rows:               s.rows,
            seats_per_row:      s.seats_per_row,
            seed:               s.seed,
            total_ticks:        s.total_ticks,
            passengers:         s.passengers as u64,
            shuffle_events:     s.shuffle_events as u64,
            bins_stowed:        s.bins_stowed as u64,
            mean_accrued_ticks: s.mean_accrued_ticks,
            max_accrued_ticks:  s.max_accrued_ticks,
        }
    }
}
