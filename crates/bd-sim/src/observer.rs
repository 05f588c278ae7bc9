//! Observer trait for per-tick reporting and data collection.

use bd_core::{PassengerId, Tick};
use bd_passenger::Passenger;

use crate::RunSummary;

/// Aisle occupancy after one tick (counts taken after admission).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickStats {
    /// Label of the tick: the global counter before it was advanced.
    pub tick:      Tick,
    /// Passengers on the plane and not yet seated.
    pub in_aisle:  usize,
    /// Aisle passengers with a bin countdown running.
    pub stowing:   usize,
    /// Aisle passengers with a shuffle countdown running.
    pub shuffling: usize,
    /// Passengers seated so far.
    pub seated:    usize,
}

/// One seating conflict: `passenger` had to get past everyone in `blockers`.
///
/// All of them received a fresh shuffle countdown during `tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleEvent {
    pub tick:      Tick,
    pub passenger: PassengerId,
    pub row:       u32,
    /// Sorted by id.
    pub blockers:  Vec<PassengerId>,
}

/// Callbacks invoked by [`Cabin::step`][crate::Cabin::step] and
/// [`Cabin::run`][crate::Cabin::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The cabin never pushes output anywhere
/// else; writers and test harnesses hang off this trait.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl CabinObserver for Progress {
///     fn on_tick_end(&mut self, stats: &TickStats) {
///         println!("{} aisle={} seated={}", stats.tick, stats.in_aisle, stats.seated);
///     }
/// }
/// ```
pub trait CabinObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A passenger stepped through the door into aisle row 0.
    fn on_admit(&mut self, _tick: Tick, _passenger: PassengerId) {}

    /// A passenger started stowing its carry-on.
    fn on_overhead_bin(&mut self, _tick: Tick, _passenger: PassengerId) {}

    /// A seating conflict was triggered.
    fn on_shuffle(&mut self, _event: &ShuffleEvent) {}

    /// Called at the end of each tick with the aisle occupancy.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called every `config.output_interval_ticks` ticks with every passenger,
    /// indexed by [`PassengerId`].
    fn on_snapshot(&mut self, _tick: Tick, _passengers: &[Passenger]) {}

    /// Called once when everyone is seated.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`CabinObserver`] that does nothing.
pub struct NoopObserver;

impl CabinObserver for NoopObserver {}
