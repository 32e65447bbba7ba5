//! Estimator engine
//!
//! # Run Loop
//!
//! 1. Validate the meal config and run settings (nothing is sampled if this fails)
//! 2. Seed the random source(s)
//! 3. Simulate `n_runs` meals, recording each total
//! 4. Build the [`SampleSet`] and compute the gift/cash split
//!
//! # Streams
//!
//! With `streams == 1` a single [`RngManager`] seeded with `rng_seed` drives
//! every sample in order. With `streams > 1` the run is cut into `streams`
//! contiguous chunks; chunk `i` owns `RngManager::for_stream(rng_seed, i)` and
//! chunks run on the rayon pool. Chunks are concatenated in index order, so
//! results depend only on the seed and stream count, never on scheduling.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::sample_set::SampleSet;
use crate::aggregator::sample_meal;
use crate::config::compute_config_hash;
use crate::error::EstimatorError;
use crate::models::MealConfig;
use crate::rng::RngManager;

/// Which percentiles set the gift card and the cash top-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GiftPolicy {
    /// Gift card value percentile (default: 50, the median)
    pub gift_percentile: f64,

    /// Percentile the gift plus cash must cover (default: 90)
    pub coverage_percentile: f64,
}

impl Default for GiftPolicy {
    fn default() -> Self {
        Self {
            gift_percentile: 50.0,
            coverage_percentile: 90.0,
        }
    }
}

impl GiftPolicy {
    pub fn validate(&self) -> Result<(), EstimatorError> {
        let in_range = |p: f64| (0.0..=100.0).contains(&p);
        if !in_range(self.gift_percentile) || !in_range(self.coverage_percentile) {
            return Err(EstimatorError::InvalidInput(format!(
                "percentiles must be in [0, 100], got gift={} coverage={}",
                self.gift_percentile, self.coverage_percentile
            )));
        }
        if self.coverage_percentile < self.gift_percentile {
            return Err(EstimatorError::InvalidInput(format!(
                "coverage percentile {} is below gift percentile {}",
                self.coverage_percentile, self.gift_percentile
            )));
        }
        Ok(())
    }
}

fn default_streams() -> usize {
    1
}

/// Full run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub meal: MealConfig,

    /// Number of meals to simulate (must be >= 1)
    pub n_runs: usize,

    /// RNG seed for deterministic simulation
    pub rng_seed: u64,

    /// Independent random streams; 1 runs sequentially, at most `n_runs`
    #[serde(default = "default_streams")]
    pub streams: usize,

    #[serde(default)]
    pub gift_policy: GiftPolicy,
}

impl EstimatorConfig {
    /// Sequential run with the default gift policy.
    pub fn new(meal: MealConfig, n_runs: usize, rng_seed: u64) -> Self {
        Self {
            meal,
            n_runs,
            rng_seed,
            streams: default_streams(),
            gift_policy: GiftPolicy::default(),
        }
    }

    pub fn with_streams(mut self, streams: usize) -> Self {
        self.streams = streams;
        self
    }

    pub fn with_gift_policy(mut self, gift_policy: GiftPolicy) -> Self {
        self.gift_policy = gift_policy;
        self
    }

    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.n_runs < 1 {
            return Err(EstimatorError::InvalidInput(
                "n_runs must be >= 1".to_string(),
            ));
        }
        if self.streams < 1 {
            return Err(EstimatorError::InvalidInput(
                "streams must be >= 1".to_string(),
            ));
        }
        if self.streams > self.n_runs {
            return Err(EstimatorError::InvalidInput(format!(
                "streams ({}) must not exceed n_runs ({})",
                self.streams, self.n_runs
            )));
        }
        self.gift_policy.validate()?;
        self.meal.validate()
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Gift card value (gift percentile of the totals)
    pub gift_value: f64,

    /// Cash on top of the gift card to reach the coverage percentile
    pub cash_value: f64,

    /// Every simulated total, in generation order
    pub samples: SampleSet,

    /// SHA-256 of the canonical meal config
    pub config_hash: String,
}

impl Estimate {
    /// Gift plus cash: the coverage-percentile meal price.
    pub fn total_value(&self) -> f64 {
        self.gift_value + self.cash_value
    }
}

/// Compute `(gift_value, cash_value)` from a sample set.
///
/// `cash_value` is the coverage percentile minus the gift percentile, so it
/// is never negative when coverage >= gift.
pub fn gift_split(samples: &SampleSet, policy: &GiftPolicy) -> Result<(f64, f64), EstimatorError> {
    policy.validate()?;
    let gift_value = samples.percentile(policy.gift_percentile)?;
    let coverage = samples.percentile(policy.coverage_percentile)?;
    Ok((gift_value, coverage - gift_value))
}

/// Simulate `n_runs` meals from a single generator seeded with `rng_seed`
/// and return the median gift value and the 90th-percentile cash margin.
///
/// # Errors
/// - `InvalidInput` if `n_runs < 1` or the tax rate is outside [0, 1)
/// - `Configuration` for malformed probability vectors or price lists
///
/// # Example
/// ```
/// use meal_price_simulator_core_rs::{estimator, presets};
///
/// let estimate = estimator::run(&presets::edibles_dinner(), 1_000, 42).unwrap();
/// assert!(estimate.cash_value >= 0.0);
/// assert_eq!(estimate.samples.len(), 1_000);
/// ```
pub fn run(config: &MealConfig, n_runs: usize, rng_seed: u64) -> Result<Estimate, EstimatorError> {
    Estimator::new(EstimatorConfig::new(config.clone(), n_runs, rng_seed))?.run()
}

/// Validated estimator, ready to run.
#[derive(Debug, Clone)]
pub struct Estimator {
    config: EstimatorConfig,
    config_hash: String,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        let config_hash = compute_config_hash(&config.meal)?;
        Ok(Self {
            config,
            config_hash,
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn config_hash(&self) -> &str {
        &self.config_hash
    }

    pub fn run(&self) -> Result<Estimate, EstimatorError> {
        let EstimatorConfig {
            n_runs,
            rng_seed,
            streams,
            ..
        } = self.config;

        info!(
            n_runs,
            rng_seed,
            streams,
            config_hash = &self.config_hash[..12],
            "starting meal price simulation"
        );

        let totals = if streams == 1 {
            let mut rng = RngManager::new(rng_seed);
            self.generate(n_runs, &mut rng)
        } else {
            self.generate_partitioned(n_runs, rng_seed, streams)
        };

        let samples = SampleSet::new(totals)?;
        let (gift_value, cash_value) = gift_split(&samples, &self.config.gift_policy)?;

        info!(gift_value, cash_value, "meal price simulation complete");

        Ok(Estimate {
            gift_value,
            cash_value,
            samples,
            config_hash: self.config_hash.clone(),
        })
    }

    fn generate(&self, count: usize, rng: &mut RngManager) -> Vec<f64> {
        (0..count)
            .map(|_| sample_meal(&self.config.meal, rng).total())
            .collect()
    }

    fn generate_partitioned(&self, n_runs: usize, rng_seed: u64, streams: usize) -> Vec<f64> {
        let chunks: Vec<Vec<f64>> = chunk_sizes(n_runs, streams)
            .into_par_iter()
            .enumerate()
            .map(|(stream, count)| {
                let mut rng = RngManager::for_stream(rng_seed, stream as u64);
                debug!(stream, count, "generating stream chunk");
                self.generate(count, &mut rng)
            })
            .collect();

        chunks.into_iter().flatten().collect()
    }
}

/// Split `total` into `parts` contiguous chunk sizes; the first
/// `total % parts` chunks get one extra sample.
fn chunk_sizes(total: usize, parts: usize) -> Vec<usize> {
    let base = total / parts;
    let extra = total % parts;
    (0..parts).map(|i| base + usize::from(i < extra)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;

    #[test]
    fn test_chunk_sizes_cover_total() {
        assert_eq!(chunk_sizes(10, 3), vec![4, 3, 3]);
        assert_eq!(chunk_sizes(4, 4), vec![1, 1, 1, 1]);
        assert_eq!(chunk_sizes(9, 1), vec![9]);
    }

    #[test]
    fn test_rejects_zero_runs_and_streams() {
        let meal = presets::edibles_dinner();
        assert!(matches!(
            run(&meal, 0, 1),
            Err(EstimatorError::InvalidInput(_))
        ));

        let config = EstimatorConfig::new(meal, 10, 1).with_streams(0);
        assert!(matches!(
            Estimator::new(config),
            Err(EstimatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_gift_policy_validation() {
        assert!(GiftPolicy::default().validate().is_ok());
        let inverted = GiftPolicy {
            gift_percentile: 90.0,
            coverage_percentile: 50.0,
        };
        assert!(inverted.validate().is_err());
        let out_of_range = GiftPolicy {
            gift_percentile: 50.0,
            coverage_percentile: 101.0,
        };
        assert!(out_of_range.validate().is_err());
    }

    #[test]
    fn test_gift_split_on_known_samples() {
        let samples = SampleSet::new((1..=10).map(f64::from).collect()).unwrap();
        let (gift, cash) = gift_split(&samples, &GiftPolicy::default()).unwrap();
        assert!((gift - 5.5).abs() < 1e-12);
        assert!((cash - 3.6).abs() < 1e-12);
    }

    #[test]
    fn test_streams_more_than_runs_rejected() {
        let config = EstimatorConfig::new(presets::edibles_dinner(), 3, 9).with_streams(8);
        assert!(matches!(
            Estimator::new(config),
            Err(EstimatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_huge_stream_count_rejected_before_allocating() {
        let config =
            EstimatorConfig::new(presets::edibles_dinner(), 10, 1).with_streams(usize::MAX / 16);
        assert!(matches!(
            Estimator::new(config),
            Err(EstimatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_one_sample_per_stream() {
        let config = EstimatorConfig::new(presets::edibles_dinner(), 4, 9).with_streams(4);
        let estimate = Estimator::new(config).unwrap().run().unwrap();
        assert_eq!(estimate.samples.len(), 4);
    }
}
