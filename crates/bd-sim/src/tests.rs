//! Tests for the cabin coordinator, builder and sweeps.

use bd_core::{
    BdError, BoardingConfig, OVERHEAD_BIN_TICKS, PassengerId, SHUFFLE_TICKS, Seat, SimRng, Tick,
};
use bd_passenger::Passenger;
use bd_policy::{BoardingPolicy, FixedOrderPolicy, RandomPolicy};

use crate::{
    Cabin, CabinBuilder, CabinObserver, NoopObserver, RunSummary, ShuffleEvent, SimError,
    TickStats, run_sweep,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(rows: u32, seats_per_row: u32) -> BoardingConfig {
    BoardingConfig {
        rows,
        seats_per_row,
        seed:                  42,
        carry_on_probability:  0.8,
        max_ticks:             None,
        output_interval_ticks: 0,
    }
}

/// Cabin boarding `(row, col, bag)` entries in the given order.
fn fixed(rows: u32, seats_per_row: u32, order: &[(u32, u32, bool)]) -> Cabin {
    fixed_with(config(rows, seats_per_row), order)
}

fn fixed_with(config: BoardingConfig, order: &[(u32, u32, bool)]) -> Cabin {
    let passengers = order
        .iter()
        .map(|&(row, col, bag)| Passenger::new(Seat::new(row, col), bag))
        .collect();
    CabinBuilder::new(config).passengers(passengers).build().unwrap()
}

/// Observer that keeps everything it is told.
#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    stats:     Vec<TickStats>,
    admits:    Vec<(Tick, PassengerId)>,
    bins:      Vec<(Tick, PassengerId)>,
    shuffles:  Vec<ShuffleEvent>,
    snapshots: Vec<(Tick, Vec<Passenger>)>,
    summary:   Option<RunSummary>,
}

impl CabinObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_admit(&mut self, tick: Tick, passenger: PassengerId) {
        self.admits.push((tick, passenger));
    }
    fn on_overhead_bin(&mut self, tick: Tick, passenger: PassengerId) {
        self.bins.push((tick, passenger));
    }
    fn on_shuffle(&mut self, event: &ShuffleEvent) {
        self.shuffles.push(event.clone());
    }
    fn on_tick_end(&mut self, stats: &TickStats) {
        self.stats.push(*stats);
    }
    fn on_snapshot(&mut self, tick: Tick, passengers: &[Passenger]) {
        self.snapshots.push((tick, passengers.to_vec()));
    }
    fn on_run_end(&mut self, summary: &RunSummary) {
        self.summary = Some(summary.clone());
    }
}

/// Generous upper bound on boarding time: every passenger pays both delays
/// plus admission and seating, and the last one walks the full cabin.
fn tick_bound(rows: u32, seats_per_row: u32) -> u64 {
    let n = u64::from(rows) * u64::from(seats_per_row);
    n * u64::from(OVERHEAD_BIN_TICKS + SHUFFLE_TICKS + 2) + u64::from(rows) + 2
}

// ── CabinBuilder validation ───────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_default_policy() {
        let cabin = CabinBuilder::new(config(3, 3)).build().unwrap();
        assert_eq!(cabin.passengers().len(), 9);
        assert_eq!(cabin.policy_name(), "random");
        assert_eq!(cabin.queued_count(), 9);
        assert!(cabin.passengers().iter().all(|p| !p.is_on_plane()));
        assert!(cabin.aisle().iter().all(Option::is_none));
        assert_eq!(cabin.elapsed(), 0);
    }

    #[test]
    fn same_seed_same_queue() {
        let a = CabinBuilder::new(config(6, 4)).build().unwrap();
        let b = CabinBuilder::new(config(6, 4)).build().unwrap();
        assert_eq!(a.passengers(), b.passengers());
    }

    #[test]
    fn uses_supplied_policy() {
        let policy = FixedOrderPolicy::without_bags([Seat::new(0, 1), Seat::new(0, 0)]);
        let cabin = CabinBuilder::new(config(1, 2)).policy(&policy).build().unwrap();
        assert_eq!(cabin.policy_name(), "fixed");
        assert_eq!(cabin.passengers()[0].target_seat(), Seat::new(0, 1));
    }

    #[test]
    fn passenger_count_mismatch_errors() {
        let short = vec![Passenger::new(Seat::new(0, 0), false)];
        let result = CabinBuilder::new(config(1, 3)).passengers(short).build();
        assert!(matches!(
            result,
            Err(SimError::PassengerCountMismatch { expected: 3, got: 1, .. })
        ));
    }

    #[test]
    fn policy_returning_wrong_count_errors() {
        let empty = |_: &[Seat], _: &mut SimRng| Vec::<Passenger>::new();
        let result = CabinBuilder::new(config(2, 2)).policy(&empty).build();
        match result {
            Err(SimError::PassengerCountMismatch { expected, got, policy }) => {
                assert_eq!((expected, got), (4, 0));
                assert_eq!(policy, "custom");
            }
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("expected a count mismatch"),
        }
    }

    #[test]
    fn duplicate_seat_errors() {
        let dup = vec![
            Passenger::new(Seat::new(0, 0), false),
            Passenger::new(Seat::new(0, 0), false),
        ];
        let result = CabinBuilder::new(config(1, 2)).passengers(dup).build();
        assert!(matches!(result, Err(SimError::Core(BdError::DuplicateSeat(_)))));
    }

    #[test]
    fn seat_outside_cabin_errors() {
        let stray = vec![
            Passenger::new(Seat::new(0, 0), false),
            Passenger::new(Seat::new(5, 0), false),
        ];
        let result = CabinBuilder::new(config(1, 2)).passengers(stray).build();
        assert!(matches!(result, Err(SimError::Core(BdError::SeatOutOfRange(_)))));
    }

    #[test]
    fn already_boarded_passenger_errors() {
        let mut early = Passenger::new(Seat::new(0, 1), false);
        early.enter_plane();
        let list = vec![Passenger::new(Seat::new(0, 0), false), early];
        let result = CabinBuilder::new(config(1, 2)).passengers(list).build();
        assert!(matches!(result, Err(SimError::AlreadyBoarded(PassengerId(1)))));
    }

    #[test]
    fn invalid_config_errors() {
        let result = CabinBuilder::new(config(0, 3)).build();
        assert!(matches!(result, Err(SimError::Core(BdError::Config(_)))));

        let bad_prob = BoardingConfig { carry_on_probability: 2.0, ..config(2, 2) };
        assert!(CabinBuilder::new(bad_prob).build().is_err());
    }
}

// ── Reference scenarios ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn single_seat_without_bag() {
        let mut cabin = fixed(1, 1, &[(0, 0, false)]);

        // Tick 0: nobody aboard yet, the passenger is admitted at the end.
        let s0 = cabin.step(&mut NoopObserver);
        assert_eq!(s0, TickStats { tick: Tick(0), in_aisle: 1, stowing: 0, shuffling: 0, seated: 0 });

        // Tick 1: already in the target row with nothing pending, sits down.
        let s1 = cabin.step(&mut NoopObserver);
        assert_eq!(s1, TickStats { tick: Tick(1), in_aisle: 0, stowing: 0, shuffling: 0, seated: 1 });

        assert!(cabin.is_complete());
        assert_eq!(cabin.elapsed(), 2);
        assert_eq!(cabin.passengers()[0].accrued_ticks(), 0);
    }

    #[test]
    fn single_seat_run_reports_two_ticks() {
        let mut cabin = fixed(1, 1, &[(0, 0, false)]);
        assert_eq!(cabin.run(&mut NoopObserver).unwrap(), 2);
    }

    #[test]
    fn single_seat_with_bag() {
        let mut cabin = fixed(1, 1, &[(0, 0, true)]);
        let mut rec = Recorder::default();
        let total = cabin.run(&mut rec).unwrap();

        assert_eq!(total, 2 + u64::from(OVERHEAD_BIN_TICKS));
        assert_eq!(rec.bins, [(Tick(1), PassengerId(0))]);
        assert_eq!(cabin.passengers()[0].accrued_ticks(), u64::from(OVERHEAD_BIN_TICKS));
        assert!(!cabin.passengers()[0].has_carry_on());
        assert_eq!(cabin.summary().bins_stowed, 1);
    }

    #[test]
    fn descending_columns_never_shuffle() {
        let mut cabin = fixed(1, 3, &[(0, 2, false), (0, 1, false), (0, 0, false)]);
        let mut rec = Recorder::default();
        let total = cabin.run(&mut rec).unwrap();

        assert_eq!(total, 4);
        assert!(rec.shuffles.is_empty());
        assert_eq!(
            rec.admits,
            [(Tick(0), PassengerId(0)), (Tick(1), PassengerId(1)), (Tick(2), PassengerId(2))]
        );
        assert!(cabin.passengers().iter().all(|p| p.accrued_ticks() == 0));
    }

    #[test]
    fn ascending_columns_shuffle_past_everyone_lower() {
        let mut cabin = fixed(1, 3, &[(0, 0, false), (0, 1, false), (0, 2, false)]);
        let mut rec = Recorder::default();
        let total = cabin.run(&mut rec).unwrap();

        assert_eq!(total, 22);
        assert_eq!(
            rec.shuffles,
            [
                ShuffleEvent {
                    tick:      Tick(2),
                    passenger: PassengerId(1),
                    row:       0,
                    blockers:  vec![PassengerId(0)],
                },
                ShuffleEvent {
                    tick:      Tick(12),
                    passenger: PassengerId(2),
                    row:       0,
                    blockers:  vec![PassengerId(0), PassengerId(1)],
                },
            ]
        );
        assert_eq!(cabin.passengers()[1].accrued_ticks(), u64::from(SHUFFLE_TICKS));
        assert_eq!(cabin.passengers()[2].accrued_ticks(), u64::from(SHUFFLE_TICKS));
        assert_eq!(cabin.summary().shuffle_events, 2);
    }

    #[test]
    fn shuffle_starts_for_trigger_and_blocker_in_same_tick() {
        let mut cabin = fixed(1, 2, &[(0, 0, false), (0, 1, false)]);
        cabin.run_ticks(2, &mut NoopObserver);
        assert!(cabin.passengers()[0].is_seated());
        assert_eq!(cabin.passengers()[1].shuffle_remaining(), 0);

        let stats = cabin.step(&mut NoopObserver);
        assert_eq!(stats.shuffling, 1);
        // Trigger already paid one tick of its countdown; the seated blocker's
        // countdown is fresh and stays put.
        assert_eq!(cabin.passengers()[1].shuffle_remaining(), SHUFFLE_TICKS - 1);
        assert_eq!(cabin.passengers()[0].shuffle_remaining(), SHUFFLE_TICKS);
        assert!(cabin.passengers()[0].is_seated());
    }

    #[test]
    fn bags_drain_before_shuffles() {
        let mut cabin = fixed_with(
            BoardingConfig { output_interval_ticks: 1, ..config(1, 3) },
            &[(0, 0, true), (0, 1, true), (0, 2, true)],
        );
        let mut rec = Recorder::default();
        let total = cabin.run(&mut rec).unwrap();

        // 2 + 10 for the first passenger, then 20 + 20 for the two who shuffle.
        assert_eq!(total, 52);
        assert_eq!(rec.bins.len(), 3);

        for id in 0..3 {
            let bins: Vec<u32> = rec
                .snapshots
                .iter()
                .map(|(_, ps)| ps[id].overhead_bin_remaining())
                .filter(|&b| b > 0)
                .collect();
            let expected: Vec<u32> = (1..OVERHEAD_BIN_TICKS).rev().collect();
            assert_eq!(bins, expected, "passenger {id}");

            for (tick, ps) in &rec.snapshots {
                let p = &ps[id];
                if p.is_stowing() && !p.is_seated() {
                    assert!(
                        p.shuffle_remaining() == 0 || p.shuffle_remaining() == SHUFFLE_TICKS,
                        "passenger {id} shuffled while stowing at {tick}"
                    );
                }
            }
        }

        let accrued: Vec<u64> = cabin.passengers().iter().map(Passenger::accrued_ticks).collect();
        assert_eq!(accrued, [10, 20, 20]);
    }

    #[test]
    fn back_rows_clear_before_front_rows_move() {
        // Row 2 boards first, row 1 right behind it.  In tick 2 the row-2
        // passenger leaves row 1 and the row-1 passenger steps into it.
        let mut cabin = fixed(3, 1, &[(2, 0, false), (1, 0, false), (0, 0, false)]);
        cabin.run_ticks(2, &mut NoopObserver);
        assert_eq!(cabin.aisle(), [Some(PassengerId(1)), Some(PassengerId(0)), None]);

        cabin.step(&mut NoopObserver);
        assert!(cabin.passengers()[0].is_seated());
        assert!(cabin.passengers()[1].is_seated());
        assert_eq!(cabin.aisle(), [Some(PassengerId(2)), None, None]);

        assert_eq!(cabin.run(&mut NoopObserver).unwrap(), 4);
    }

    #[test]
    fn seated_passengers_do_not_block_the_aisle() {
        let mut cabin = fixed(3, 1, &[(1, 0, false), (2, 0, false), (0, 0, false)]);
        cabin.run_ticks(3, &mut NoopObserver);
        // Passenger 1 walked into row 1 where passenger 0 is already seated.
        assert_eq!(cabin.passengers()[1].current_row(), Some(1));
        assert!(cabin.passengers()[0].is_seated());
        assert_eq!(cabin.passengers()[0].current_row(), Some(1));
        assert_eq!(cabin.run(&mut NoopObserver).unwrap(), 4);
    }

    #[test]
    fn stowing_at_the_door_holds_the_queue() {
        let mut cabin = fixed(3, 1, &[(0, 0, true), (2, 0, false), (1, 0, false)]);
        cabin.run_ticks(1 + u64::from(OVERHEAD_BIN_TICKS), &mut NoopObserver);
        assert_eq!(cabin.queued_count(), 2);
        assert_eq!(cabin.passengers()[0].overhead_bin_remaining(), 0);
        assert!(!cabin.passengers()[0].is_seated());

        // Walking passengers pay one tick per row they do not sit in.
        cabin.run(&mut NoopObserver).unwrap();
        assert_eq!(cabin.passengers()[1].accrued_ticks(), 1);
        assert_eq!(cabin.passengers()[2].accrued_ticks(), 0);
    }
}

// ── Run loop and observer ─────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn observer_sees_every_tick_in_order() {
        let mut cabin = fixed(1, 1, &[(0, 0, true)]);
        let mut rec = Recorder::default();
        let total = cabin.run(&mut rec).unwrap();

        let expected: Vec<Tick> = (0..total).map(Tick).collect();
        assert_eq!(rec.starts, expected);
        let ended: Vec<Tick> = rec.stats.iter().map(|s| s.tick).collect();
        assert_eq!(ended, expected);

        let summary = rec.summary.expect("run end reported");
        assert_eq!(summary.total_ticks, total);
        assert_eq!(summary.passengers, 1);
        assert_eq!(summary.policy, "explicit");
    }

    #[test]
    fn snapshots_follow_output_interval() {
        let mut cabin = fixed_with(
            BoardingConfig { output_interval_ticks: 5, ..config(1, 1) },
            &[(0, 0, true)],
        );
        let mut rec = Recorder::default();
        cabin.run(&mut rec).unwrap();
        let ticks: Vec<Tick> = rec.snapshots.iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, [Tick(0), Tick(5), Tick(10)]);
        assert!(rec.snapshots.iter().all(|(_, ps)| ps.len() == 1));
    }

    #[test]
    fn tick_budget_stops_the_run() {
        let mut cabin = fixed_with(
            BoardingConfig { max_ticks: Some(5), ..config(1, 1) },
            &[(0, 0, true)],
        );
        let err = cabin.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            SimError::TickBudgetExceeded { budget: 5, seated: 0, total: 1 }
        ));
        assert_eq!(cabin.elapsed(), 5);
    }

    #[test]
    fn tick_budget_equal_to_total_is_enough() {
        let mut cabin = fixed_with(
            BoardingConfig { max_ticks: Some(12), ..config(1, 1) },
            &[(0, 0, true)],
        );
        assert_eq!(cabin.run(&mut NoopObserver).unwrap(), 12);
    }

    #[test]
    fn run_ticks_stops_when_complete() {
        let mut cabin = fixed(1, 1, &[(0, 0, false)]);
        cabin.run_ticks(100, &mut NoopObserver);
        assert!(cabin.is_complete());
        assert_eq!(cabin.elapsed(), 2);
    }

    #[test]
    fn identical_queue_gives_identical_run() {
        let queue = RandomPolicy::default().boarding_order(
            bd_core::SeatMap::new(12, 6).unwrap().seats(),
            &mut SimRng::new(5),
        );

        let mut a = CabinBuilder::new(config(12, 6)).passengers(queue.clone()).build().unwrap();
        let mut b = CabinBuilder::new(config(12, 6)).passengers(queue).build().unwrap();
        let mut ra = Recorder::default();
        let mut rb = Recorder::default();
        let ta = a.run(&mut ra).unwrap();
        let tb = b.run(&mut rb).unwrap();

        assert_eq!(ta, tb);
        assert_eq!(ra.stats, rb.stats);
        assert_eq!(ra.shuffles, rb.shuffles);
        assert_eq!(a.passengers(), b.passengers());
    }

    #[test]
    fn passengers_without_bags_never_stow() {
        let cfg = BoardingConfig { carry_on_probability: 0.5, output_interval_ticks: 1, ..config(10, 6) };
        let mut cabin = CabinBuilder::new(cfg).build().unwrap();
        let had_bag: Vec<bool> = cabin.passengers().iter().map(Passenger::has_carry_on).collect();
        assert!(had_bag.iter().any(|&b| b) && had_bag.iter().any(|&b| !b));

        let mut rec = Recorder::default();
        cabin.run(&mut rec).unwrap();

        for (_, id) in &rec.bins {
            assert!(had_bag[id.index()], "{id} stowed without a bag");
        }
        for (tick, ps) in &rec.snapshots {
            for (i, p) in ps.iter().enumerate() {
                if !had_bag[i] {
                    assert_eq!(p.overhead_bin_remaining(), 0, "passenger {i} at {tick}");
                }
            }
        }
    }
}

// ── Sweeps ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep_tests {
    use super::*;

    #[test]
    fn zero_runs_rejected() {
        let result = run_sweep(&config(3, 3), &RandomPolicy::default(), 0);
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn run_zero_matches_single_cabin() {
        let cfg = config(8, 4);
        let policy = RandomPolicy::default();
        let sweep = run_sweep(&cfg, &policy, 3).unwrap();

        let mut cabin = CabinBuilder::new(cfg).policy(&policy).build().unwrap();
        let total = cabin.run(&mut NoopObserver).unwrap();
        assert_eq!(sweep.runs[0].total_ticks, total);
        assert_eq!(sweep.runs[0].seed, 42);
    }

    #[test]
    fn sweeps_are_reproducible() {
        let cfg = config(10, 3);
        let policy = RandomPolicy::default();
        let a = run_sweep(&cfg, &policy, 8).unwrap();
        let b = run_sweep(&cfg, &policy, 8).unwrap();
        assert_eq!(a.totals(), b.totals());
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn statistics_are_consistent() {
        let sweep = run_sweep(&config(6, 3), &RandomPolicy::default(), 10).unwrap();
        let min = sweep.min_ticks().unwrap() as f64;
        let max = sweep.max_ticks().unwrap() as f64;
        let mean = sweep.mean_ticks();
        assert!(min <= mean && mean <= max);
        assert!(sweep.std_dev_ticks() >= 0.0);
        let seeds: std::collections::HashSet<u64> = sweep.runs.iter().map(|r| r.seed).collect();
        assert_eq!(seeds.len(), 10);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_boarding_terminates_within_bound(
            rows in 1u32..12,
            per_row in 1u32..6,
            seed in any::<u64>(),
            bag_p in 0.0f64..=1.0,
        ) {
            let cfg = BoardingConfig {
                seed,
                carry_on_probability: bag_p,
                max_ticks: Some(tick_bound(rows, per_row)),
                ..config(rows, per_row)
            };
            let mut cabin = CabinBuilder::new(cfg).build().unwrap();
            let total = cabin.run(&mut NoopObserver);
            prop_assert!(total.is_ok(), "did not finish: {:?}", total);
            prop_assert!(cabin.passengers().iter().all(Passenger::is_seated));
        }

        #[test]
        fn prop_tick_invariants_hold(
            rows in 1u32..8,
            per_row in 1u32..5,
            seed in any::<u64>(),
        ) {
            let cfg = BoardingConfig { seed, output_interval_ticks: 1, ..config(rows, per_row) };
            let mut cabin = CabinBuilder::new(cfg).build().unwrap();
            let had_bag: Vec<bool> = cabin.passengers().iter().map(Passenger::has_carry_on).collect();
            let mut rec = Recorder::default();
            cabin.run(&mut rec).unwrap();

            let mut previous: Option<&Vec<Passenger>> = None;
            for (tick, ps) in &rec.snapshots {
                // No two aisle passengers share a row.
                let aisle_rows: Vec<u32> = ps
                    .iter()
                    .filter(|p| p.in_aisle())
                    .filter_map(Passenger::current_row)
                    .collect();
                let unique: HashSet<u32> = aisle_rows.iter().copied().collect();
                prop_assert_eq!(unique.len(), aisle_rows.len(), "shared aisle row at {}", tick);

                for (i, p) in ps.iter().enumerate() {
                    if p.is_seated() {
                        prop_assert_eq!(p.current_row(), Some(p.target_seat().row));
                        prop_assert_eq!(p.overhead_bin_remaining(), 0);
                    }
                    if !had_bag[i] {
                        prop_assert_eq!(p.overhead_bin_remaining(), 0);
                    }
                    // Rows never decrease and move by at most one per tick.
                    if let Some(prev) = previous {
                        match (prev[i].current_row(), p.current_row()) {
                            (Some(before), Some(after)) => {
                                prop_assert!(after == before || after == before + 1,
                                    "passenger {} went {} -> {} at {}", i, before, after, tick);
                            }
                            (None, Some(after)) => prop_assert_eq!(after, 0),
                            (Some(_), None) => prop_assert!(false, "passenger {} left the plane", i),
                            (None, None) => {}
                        }
                    }
                }
                previous = Some(ps);
            }
        }

        #[test]
        fn prop_shuffles_are_symmetric(
            per_row in 2u32..6,
            seed in any::<u64>(),
        ) {
            let cfg = BoardingConfig { seed, output_interval_ticks: 1, ..config(2, per_row) };
            let mut cabin = CabinBuilder::new(cfg).build().unwrap();
            let mut rec = Recorder::default();
            cabin.run(&mut rec).unwrap();

            for event in &rec.shuffles {
                let (_, ps) = rec
                    .snapshots
                    .iter()
                    .find(|(t, _)| *t == event.tick)
                    .expect("snapshot for every tick");
                prop_assert!(ps[event.passenger.index()].shuffle_remaining() > 0);
                for b in &event.blockers {
                    prop_assert!(ps[b.index()].shuffle_remaining() > 0);
                    prop_assert!(
                        ps[b.index()].target_seat().col < ps[event.passenger.index()].target_seat().col
                    );
                }
            }
        }

        #[test]
        fn prop_same_seed_same_total(
            rows in 1u32..10,
            per_row in 1u32..6,
            seed in any::<u64>(),
        ) {
            let cfg = BoardingConfig { seed, ..config(rows, per_row) };
            let a = CabinBuilder::new(cfg.clone()).build().unwrap().run(&mut NoopObserver).unwrap();
            let b = CabinBuilder::new(cfg).build().unwrap().run(&mut NoopObserver).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
