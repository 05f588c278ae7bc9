//! The `Cabin` struct and its tick loop.

use bd_core::{BoardingConfig, PassengerId, SeatMap, SimClock, Tick};
use bd_passenger::Passenger;

use crate::{CabinObserver, RunSummary, ShuffleEvent, SimError, SimResult, TickStats};

/// One plane being boarded.
///
/// The cabin exclusively owns every [`Passenger`] for the run and is the only
/// thing that moves them.  Two indexes are kept in step with passenger state:
///
/// - `aisle[r]` — the passenger standing in aisle row `r`, if any.  At most
///   one per row, which is the exclusivity the tick loop relies on.
/// - `row_members[r]` — everyone whose current row is `r`, seated or not, in
///   arrival order.  Used to find who is in the way of a passenger sitting
///   down.
///
/// Create via [`CabinBuilder`][crate::CabinBuilder].
pub struct Cabin {
    /// Run configuration (cabin size, seed, tick budget, …).
    pub config: BoardingConfig,

    /// Global accrued-tick counter.
    pub clock: SimClock,

    seat_map:      SeatMap,
    policy_name:   String,
    passengers:    Vec<Passenger>,
    aisle:         Vec<Option<PassengerId>>,
    row_members:   Vec<Vec<PassengerId>>,
    next_to_board: usize,
    seated:        usize,
    bins_stowed:   usize,
    shuffles:      usize,
}

impl Cabin {
    /// Assemble a cabin from an already validated boarding queue.
    pub(crate) fn new(
        config:      BoardingConfig,
        seat_map:    SeatMap,
        policy_name: String,
        passengers:  Vec<Passenger>,
    ) -> Self {
        let rows = seat_map.rows() as usize;
        Self {
            config,
            clock: SimClock::new(),
            seat_map,
            policy_name,
            passengers,
            aisle: vec![None; rows],
            row_members: vec![Vec::new(); rows],
            next_to_board: 0,
            seated: 0,
            bins_stowed: 0,
            shuffles: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every passenger is seated and return the total tick count.
    ///
    /// Fails with [`SimError::TickBudgetExceeded`] if `config.max_ticks` is
    /// set and reached first.
    pub fn run<O: CabinObserver + ?Sized>(&mut self, observer: &mut O) -> SimResult<u64> {
        while !self.is_complete() {
            if let Some(budget) = self.config.max_ticks {
                if self.clock.elapsed() >= budget {
                    tracing::warn!(
                        "tick budget {budget} exhausted with {}/{} passengers seated",
                        self.seated,
                        self.passengers.len()
                    );
                    return Err(SimError::TickBudgetExceeded {
                        budget,
                        seated: self.seated,
                        total:  self.passengers.len(),
                    });
                }
            }
            self.step(observer);
        }

        let summary = self.summary();
        tracing::info!(
            "boarding complete: {} passengers in {} ticks ({} policy, {} shuffles, {} bins)",
            summary.passengers,
            summary.total_ticks,
            summary.policy,
            summary.shuffle_events,
            summary.bins_stowed,
        );
        observer.on_run_end(&summary);
        Ok(summary.total_ticks)
    }

    /// Run exactly `n` ticks (or fewer, if everyone sits down first).
    ///
    /// Useful for tests and incremental stepping.  Ignores the tick budget.
    pub fn run_ticks<O: CabinObserver + ?Sized>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.is_complete() {
                break;
            }
            self.step(observer);
        }
    }

    /// Advance the whole cabin by one tick.
    pub fn step<O: CabinObserver + ?Sized>(&mut self, observer: &mut O) -> TickStats {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: back-to-front snapshot of the aisle ──────────────────
        //
        // The ordering contract: a passenger is processed after everyone
        // standing further back, so row r + 1 is settled before anyone in
        // row r looks at it.
        let order: Vec<PassengerId> = self.aisle.iter().rev().flatten().copied().collect();

        // ── Phase 2: stow / shuffle / walk, then charge the tick ──────────
        for id in order {
            self.process_passenger(id, now, observer);
        }

        // ── Phase 3: admit at most one passenger ──────────────────────────
        if self.aisle[0].is_none() {
            if let Some(id) = self.admit_next() {
                tracing::debug!(
                    "{now}: {id} boards, heading for {}",
                    self.passengers[id.index()].target_seat()
                );
                observer.on_admit(now, id);
            }
        }

        // ── Phase 4: report ───────────────────────────────────────────────
        let stats = self.tick_stats(now);
        tracing::trace!(
            "{now}: aisle={} stowing={} shuffling={} seated={}",
            stats.in_aisle,
            stats.stowing,
            stats.shuffling,
            stats.seated,
        );
        observer.on_tick_end(&stats);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(now, &self.passengers);
        }

        self.clock.advance();
        stats
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// `true` once every passenger is seated.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.seated == self.passengers.len()
    }

    /// Ticks elapsed so far.  After `run` returns this is the boarding time.
    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.clock.elapsed()
    }

    /// All passengers in boarding order (index = `PassengerId`).
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.index())
    }

    /// Aisle occupancy by row, front (row 0) first.
    pub fn aisle(&self) -> &[Option<PassengerId>] {
        &self.aisle
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }

    #[inline]
    pub fn seated_count(&self) -> usize {
        self.seated
    }

    /// Passengers still waiting outside the plane.
    #[inline]
    pub fn queued_count(&self) -> usize {
        self.passengers.len() - self.next_to_board
    }

    /// Summary of the run so far.
    pub fn summary(&self) -> RunSummary {
        let total_accrued: u64 = self.passengers.iter().map(Passenger::accrued_ticks).sum();
        let max_accrued = self
            .passengers
            .iter()
            .map(Passenger::accrued_ticks)
            .max()
            .unwrap_or(0);
        RunSummary {
            policy:             self.policy_name.clone(),
            rows:               self.seat_map.rows(),
            seats_per_row:      self.seat_map.seats_per_row(),
            seed:               self.config.seed,
            total_ticks:        self.clock.elapsed(),
            passengers:         self.passengers.len(),
            shuffle_events:     self.shuffles,
            bins_stowed:        self.bins_stowed,
            mean_accrued_ticks: total_accrued as f64 / self.passengers.len().max(1) as f64,
            max_accrued_ticks:  max_accrued,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_passenger<O: CabinObserver + ?Sized>(
        &mut self,
        id:       PassengerId,
        now:      Tick,
        observer: &mut O,
    ) {
        let idx = id.index();
        let Some(row) = self.passengers[idx].current_row() else {
            return;
        };
        let r = row as usize;

        if self.passengers[idx].in_target_row() {
            // ── Bag: stowed at most once, the first tick in the row ───────
            let p = &mut self.passengers[idx];
            if p.has_carry_on() && !p.is_stowing() {
                p.start_overhead_bin();
                self.bins_stowed += 1;
                observer.on_overhead_bin(now, id);
            }

            // ── Seating conflict: everyone in the row with a lower column ─
            if !self.passengers[idx].is_shuffling() {
                let col = self.passengers[idx].target_seat().col;
                let mut blockers: Vec<PassengerId> = self.row_members[r]
                    .iter()
                    .copied()
                    .filter(|other| self.passengers[other.index()].target_seat().col < col)
                    .collect();

                if !blockers.is_empty() {
                    blockers.sort_unstable();
                    self.passengers[idx].start_shuffling();
                    for b in &blockers {
                        self.passengers[b.index()].start_shuffling();
                    }
                    self.shuffles += 1;

                    let event = ShuffleEvent { tick: now, passenger: id, row, blockers };
                    tracing::debug!(
                        "{now}: {id} shuffles past {} passenger(s) in row {row}",
                        event.blockers.len()
                    );
                    observer.on_shuffle(&event);
                }
            }
        } else if matches!(self.aisle.get(r + 1), Some(None)) {
            // ── Walk: only direct forward occupancy in the aisle blocks ───
            self.passengers[idx].move_forward();
            self.aisle[r] = None;
            self.aisle[r + 1] = Some(id);
            self.row_members[r].retain(|&m| m != id);
            self.row_members[r + 1].push(id);
        }

        self.passengers[idx].advance_tick();

        if self.passengers[idx].is_seated() {
            if let Some(seat_row) = self.passengers[idx].current_row() {
                self.aisle[seat_row as usize] = None;
            }
            self.seated += 1;
        }
    }

    /// Put the next queued passenger into aisle row 0.
    fn admit_next(&mut self) -> Option<PassengerId> {
        let idx = self.next_to_board;
        let passenger = self.passengers.get_mut(idx)?;
        passenger.enter_plane();
        self.next_to_board += 1;

        let id = PassengerId(idx as u32);
        self.aisle[0] = Some(id);
        self.row_members[0].push(id);
        Some(id)
    }

    fn tick_stats(&self, now: Tick) -> TickStats {
        let mut stats = TickStats {
            tick:      now,
            in_aisle:  0,
            stowing:   0,
            shuffling: 0,
            seated:    self.seated,
        };
        for id in self.aisle.iter().flatten() {
            let p = &self.passengers[id.index()];
            stats.in_aisle += 1;
            stats.stowing += usize::from(p.is_stowing());
            stats.shuffling += usize::from(p.is_shuffling());
        }
        stats
    }
}
