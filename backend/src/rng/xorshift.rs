//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for Monte Carlo meal simulation.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. Parallel runs derive one
//! generator per stream with [`RngManager::for_stream`], so a fixed seed and
//! stream count always reproduce the same sample set.

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use meal_price_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let idx = rng.index(10); // [0, 10)
/// assert!(idx < 10);
/// ```
#[derive(Debug, Clone)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Example
    /// ```
    /// use meal_price_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// assert_eq!(rng.get_state(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create the generator for one worker stream of a partitioned run.
    ///
    /// The stream seed is the SplitMix64 finalizer applied to
    /// `seed + (stream + 1) * golden_gamma`, which decorrelates neighbouring
    /// streams even for small consecutive seeds.
    ///
    /// # Example
    /// ```
    /// use meal_price_simulator_core_rs::RngManager;
    ///
    /// let mut a = RngManager::for_stream(42, 0);
    /// let mut b = RngManager::for_stream(42, 1);
    /// assert_ne!(a.next(), b.next());
    /// ```
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        let mut z = seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self::new(z ^ (z >> 31))
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Get current RNG state (for replay)
    ///
    /// # Example
    /// ```
    /// use meal_price_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// let state = rng.get_state();
    ///
    /// // Later, can recreate RNG from this state
    /// let rng2 = RngManager::new(state);
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use meal_price_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let u = rng.next_f64();
    /// assert!(u >= 0.0 && u < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Top 53 bits scaled by 2^-53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform index in `[0, len)`, used for with-replacement draws from a
    /// price list.
    ///
    /// # Panics
    /// Panics if `len == 0`
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index from an empty range");
        (self.next() % len as u64) as usize
    }

    /// Bernoulli trial: `true` with probability `p`.
    ///
    /// Consumes exactly one draw regardless of `p`, so the stream position
    /// does not depend on the configured probability.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Categorical draw: index `i` chosen with probability `weights[i]`.
    ///
    /// Weights are expected to be non-negative and sum to ~1. Zero-weight
    /// entries are never selected; floating-point shortfall in the cumulative
    /// sum falls back to the last positive-weight entry.
    ///
    /// # Panics
    /// Panics if `weights` is empty
    pub fn weighted_index(&mut self, weights: &[f64]) -> usize {
        assert!(!weights.is_empty(), "cannot draw from an empty distribution");

        let u = self.next_f64();
        let mut cumulative = 0.0;
        for (i, w) in weights.iter().enumerate() {
            cumulative += w;
            if u < cumulative {
                return i;
            }
        }

        weights
            .iter()
            .rposition(|w| *w > 0.0)
            .unwrap_or(weights.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = RngManager::new(0);
        assert_ne!(rng.get_state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    #[should_panic(expected = "cannot draw an index from an empty range")]
    fn test_index_empty_range() {
        let mut rng = RngManager::new(12345);
        rng.index(0);
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = RngManager::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_weighted_index_skips_zero_weights() {
        let mut rng = RngManager::new(7);
        for _ in 0..1000 {
            let i = rng.weighted_index(&[0.0, 0.0, 1.0]);
            assert_eq!(i, 2);
        }
        for _ in 0..1000 {
            let i = rng.weighted_index(&[0.5, 0.0, 0.5]);
            assert_ne!(i, 1);
        }
    }

    #[test]
    fn test_weighted_index_shortfall_falls_back_to_last_positive() {
        // Sums to slightly under 1; any u above the sum must not pick index 2
        let mut rng = RngManager::new(99);
        for _ in 0..1000 {
            let i = rng.weighted_index(&[0.3, 0.699_999_9, 0.0]);
            assert!(i < 2);
        }
    }

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = RngManager::new(5);
        for _ in 0..500 {
            assert!(rng.bernoulli(1.0));
            assert!(!rng.bernoulli(0.0));
        }
    }

    #[test]
    fn test_for_stream_is_deterministic() {
        let mut a = RngManager::for_stream(42, 3);
        let mut b = RngManager::for_stream(42, 3);
        for _ in 0..100 {
            assert_eq!(a.next(), b.next());
        }
    }
}
