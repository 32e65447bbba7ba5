//! Sample set and order statistics
//!
//! Holds the meal totals of one run in generation order, plus a sorted copy
//! for percentile queries.

use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;

/// Upper limit on histogram bins; larger requests are rejected.
pub const MAX_HISTOGRAM_BINS: usize = 1_000_000;

/// The `N` meal totals of one run.
///
/// Invariants: at least one value, every value finite. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SampleSet {
    /// Generation order
    values: Vec<f64>,

    /// Ascending order
    sorted: Vec<f64>,
}

/// One bin of a density-normalized histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,

    /// `count / (in_range_total * bin_width)`; integrates to 1 over the bins
    pub density: f64,
}

impl SampleSet {
    pub fn new(values: Vec<f64>) -> Result<Self, EstimatorError> {
        if values.is_empty() {
            return Err(EstimatorError::InvalidInput(
                "sample set must contain at least one value".to_string(),
            ));
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(EstimatorError::InvalidInput(format!(
                "sample {} is not finite",
                index
            )));
        }

        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        Ok(Self { values, sorted })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Totals in the order they were generated.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Totals in ascending order.
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    pub fn median(&self) -> f64 {
        interpolate(&self.sorted, 50.0)
    }

    /// Percentile `p` in [0, 100] using linear interpolation between order
    /// statistics (type-7): `h = (n - 1) * p / 100`.
    ///
    /// # Example
    /// ```
    /// use meal_price_simulator_core_rs::SampleSet;
    ///
    /// let samples = SampleSet::new((1..=10).map(f64::from).collect()).unwrap();
    /// assert!((samples.percentile(50.0).unwrap() - 5.5).abs() < 1e-12);
    /// assert!((samples.percentile(90.0).unwrap() - 9.1).abs() < 1e-12);
    /// ```
    pub fn percentile(&self, p: f64) -> Result<f64, EstimatorError> {
        if !(0.0..=100.0).contains(&p) {
            return Err(EstimatorError::InvalidInput(format!(
                "percentile must be in [0, 100], got {}",
                p
            )));
        }
        Ok(interpolate(&self.sorted, p))
    }

    /// Sorted totals paired with cumulative probability `i / (n - 1)`.
    pub fn empirical_cdf(&self) -> Vec<(f64, f64)> {
        let n = self.sorted.len();
        if n == 1 {
            return vec![(self.sorted[0], 0.0)];
        }
        let step = 1.0 / (n - 1) as f64;
        self.sorted
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i as f64 * step))
            .collect()
    }

    /// Histogram over `[0, upper]` with fixed-width bins starting at 0.
    ///
    /// Bins are half-open except the last, which includes its upper edge.
    /// Totals outside the range are not counted. At most
    /// [`MAX_HISTOGRAM_BINS`] bins.
    pub fn histogram(&self, bin_width: f64, upper: f64) -> Result<Vec<HistogramBin>, EstimatorError> {
        if !(bin_width.is_finite() && bin_width > 0.0) {
            return Err(EstimatorError::InvalidInput(format!(
                "bin width must be positive, got {}",
                bin_width
            )));
        }
        let num_bins = (upper / bin_width).floor();
        if !num_bins.is_finite() || num_bins < 1.0 {
            return Err(EstimatorError::InvalidInput(format!(
                "upper bound {} leaves no bins of width {}",
                upper, bin_width
            )));
        }
        if num_bins > MAX_HISTOGRAM_BINS as f64 {
            return Err(EstimatorError::InvalidInput(format!(
                "upper bound {} with bin width {} needs more than {} bins",
                upper, bin_width, MAX_HISTOGRAM_BINS
            )));
        }
        let num_bins = num_bins as usize;
        let top = num_bins as f64 * bin_width;

        let mut counts = vec![0usize; num_bins];
        for &v in &self.values {
            if !(0.0..=top).contains(&v) {
                continue;
            }
            let bin = ((v / bin_width) as usize).min(num_bins - 1);
            counts[bin] += 1;
        }

        let in_range: usize = counts.iter().sum();
        let scale = if in_range == 0 {
            0.0
        } else {
            1.0 / (in_range as f64 * bin_width)
        };

        Ok(counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: i as f64 * bin_width,
                upper: (i + 1) as f64 * bin_width,
                count,
                density: count as f64 * scale,
            })
            .collect())
    }
}

impl TryFrom<Vec<f64>> for SampleSet {
    type Error = EstimatorError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<SampleSet> for Vec<f64> {
    fn from(samples: SampleSet) -> Self {
        samples.values
    }
}

fn interpolate(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * (p / 100.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = h - lo as f64;
    // Clamp keeps rounding from stepping past the upper order statistic
    (sorted[lo] + frac * (sorted[hi] - sorted[lo])).min(sorted[hi])
}
