//! The shuffle-then-sum experiment.
//!
//! Each trial permutes the value set uniformly at random, sums it left to
//! right in `f32`, and records the total. The value set is built once and
//! only reordered between trials; one generator drives every shuffle.

use rand::Rng;
use tracing::{debug, info};

use crate::dataset::Variant;
use crate::histogram::FrequencyTable;
use crate::random::shuffle;
use crate::summation::sequential_sum;

/// Default number of trials per run.
pub const TRIALS: u64 = 1_000_000;

/// Which dataset to sum and how many times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    pub variant: Variant,
    pub trials: u64,
}

impl ExperimentConfig {
    /// A run of [`TRIALS`] trials over `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            trials: TRIALS,
        }
    }

    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

/// One trial: shuffle `values` in place, then sum them.
pub fn run_trial<R: Rng>(values: &mut [f32], rng: &mut R) -> f32 {
    shuffle(values, rng);
    sequential_sum(values)
}

/// Runs `config.trials` trials and returns the histogram of sums.
///
/// # Complexity
/// Time: O(trials · n), Space: O(n + distinct sums)
///
/// # Examples
/// ```
/// use fp_summation::dataset::Variant;
/// use fp_summation::experiment::{run, ExperimentConfig};
/// use fp_summation::random::create_rng;
/// let config = ExperimentConfig::new(Variant::Binary).with_trials(100);
/// let table = run(&config, &mut create_rng(1));
/// assert_eq!(table.count(128.0), 100);
/// ```
pub fn run<R: Rng>(config: &ExperimentConfig, rng: &mut R) -> FrequencyTable {
    let mut values = config.variant.values();
    let mut table = FrequencyTable::new();
    let progress_step = (config.trials / 10).max(1);

    info!(
        variant = %config.variant,
        elements = values.len(),
        exact_sum = config.variant.exact_sum(),
        trials = config.trials,
        "starting experiment"
    );

    for trial in 0..config.trials {
        table.record(run_trial(&mut values, rng));

        let done = trial + 1;
        if done % progress_step == 0 {
            debug!(done, distinct = table.distinct(), "progress");
        }
    }

    info!(
        trials = table.total(),
        distinct = table.distinct(),
        min = ?table.min_sum(),
        max = ?table.max_sum(),
        "experiment finished"
    );

    table
}
