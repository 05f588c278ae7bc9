//! Many independent runs of one configuration.
//!
//! Run `i` uses seed `SimRng::seed_for_run(config.seed, i)`, so run 0 is the
//! same boarding as a single cabin built from `config`.  Results come back in
//! run order whether or not the `parallel` feature is on.

use bd_core::{BoardingConfig, SimRng};
use bd_policy::BoardingPolicy;

use crate::{CabinBuilder, NoopObserver, RunSummary, SimError, SimResult, SweepSummary};

/// Board `runs` independent cabins with `policy` and collect their summaries.
pub fn run_sweep(
    config: &BoardingConfig,
    policy: &dyn BoardingPolicy,
    runs:   u64,
) -> SimResult<SweepSummary> {
    if runs == 0 {
        return Err(SimError::Config("a sweep needs at least one run".into()));
    }
    config.validate()?;

    #[cfg(not(feature = "parallel"))]
    let results: SimResult<Vec<RunSummary>> =
        (0..runs).map(|run| run_one(config, policy, run)).collect();

    #[cfg(feature = "parallel")]
    let results: SimResult<Vec<RunSummary>> = {
        use rayon::prelude::*;
        (0..runs)
            .into_par_iter()
            .map(|run| run_one(config, policy, run))
            .collect()
    };

    let summary = SweepSummary { runs: results? };
    tracing::info!(
        "sweep of {runs} runs ({} policy): mean {:.1} ticks, min {:?}, max {:?}",
        policy.name(),
        summary.mean_ticks(),
        summary.min_ticks(),
        summary.max_ticks(),
    );
    Ok(summary)
}

fn run_one(config: &BoardingConfig, policy: &dyn BoardingPolicy, run: u64) -> SimResult<RunSummary> {
    let run_config = BoardingConfig {
        seed: SimRng::seed_for_run(config.seed, run),
        output_interval_ticks: 0,
        ..config.clone()
    };
    let mut cabin = CabinBuilder::new(run_config).policy(policy).build()?;
    cabin.run(&mut NoopObserver)?;
    Ok(cabin.summary())
}
