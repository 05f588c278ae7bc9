//! Run and sweep results.

/// What one finished (or interrupted) run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub policy:             String,
    pub rows:               u32,
    pub seats_per_row:      u32,
    pub seed:               u64,
    /// Global tick counter at the moment everyone was seated.
    pub total_ticks:        u64,
    pub passengers:         usize,
    pub shuffle_events:     usize,
    pub bins_stowed:        usize,
    /// Mean of the per-passenger accrued-time counters.
    pub mean_accrued_ticks: f64,
    pub max_accrued_ticks:  u64,
}

/// Results of many independent runs of one configuration, in run order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepSummary {
    pub runs: Vec<RunSummary>,
}

impl SweepSummary {
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total ticks of every run, in run order.
    pub fn totals(&self) -> Vec<u64> {
        self.runs.iter().map(|r| r.total_ticks).collect()
    }

    pub fn mean_ticks(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| r.total_ticks as f64).sum::<f64>() / self.runs.len() as f64
    }

    /// Sample standard deviation of the totals; 0 with fewer than two runs.
    pub fn std_dev_ticks(&self) -> f64 {
        let n = self.runs.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean_ticks();
        let var = self
            .runs
            .iter()
            .map(|r| (r.total_ticks as f64 - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        var.sqrt()
    }

    pub fn min_ticks(&self) -> Option<u64> {
        self.runs.iter().map(|r| r.total_ticks).min()
    }

    pub fn max_ticks(&self) -> Option<u64> {
        self.runs.iter().map(|r| r.total_ticks).max()
    }
}
