//! Built-in menus
//!
//! The Edibles dinner menu (University Avenue, Neighborhood of the Arts) for
//! two diners. Assumptions baked into the price lists:
//! - dinner menu only, no wines, no spiked coffee
//! - no $2 bacon add-on, no $26 sharing platter, no ice cream add-ons
//! - salads count as sides

use crate::estimator::{EstimatorConfig, GiftPolicy};
use crate::models::{CourseSpec, DrinkSpec, MealConfig, QuantityDistribution, TipPolicy};

pub const EDIBLES_N_RUNS: usize = 100_000;
pub const EDIBLES_SEED: u64 = 42;

fn cocktail_prices() -> Vec<f64> {
    vec![8.0, 8.0, 9.0, 9.0, 9.0, 10.0, 10.0, 10.0, 12.0, 12.0]
}

fn beer_prices() -> Vec<f64> {
    vec![6.0, 6.0, 6.0, 6.0, 6.0, 5.0, 6.0, 6.0]
}

/// Entree price list; every price lies in [14, 30].
pub fn edibles_entree_prices() -> Vec<f64> {
    vec![16.0, 20.0, 24.0, 30.0, 16.0, 26.0, 19.0, 27.0, 14.0, 27.0, 20.0]
}

/// Two-diner dinner at Edibles.
///
/// Diner A: 80% one drink, 20% two, 70% cocktails. Diner B: 20% none,
/// 80% one, always a cocktail. Both diners get an entree.
pub fn edibles_dinner() -> MealConfig {
    MealConfig {
        diner_a: DrinkSpec {
            quantity: QuantityDistribution::new(vec![0.0, 0.8, 0.2]),
            cocktail_probability: 0.7,
            cocktail_prices: cocktail_prices(),
            beer_prices: beer_prices(),
        },
        diner_b: DrinkSpec {
            quantity: QuantityDistribution::new(vec![0.2, 0.8, 0.0]),
            cocktail_probability: 1.0,
            cocktail_prices: cocktail_prices(),
            beer_prices: beer_prices(),
        },
        appetizers: CourseSpec::new(
            vec![0.2, 0.5, 0.3],
            vec![15.0, 9.0, 14.0, 13.0, 14.0, 8.0, 14.0, 8.0, 16.0],
        ),
        entrees: CourseSpec::new(vec![0.0, 0.0, 1.0], edibles_entree_prices()),
        sides: CourseSpec::new(
            vec![0.5, 0.3, 0.2],
            vec![10.0, 9.0, 9.0, 6.5, 6.5, 6.5, 6.5, 6.5, 6.5],
        ),
        desserts: CourseSpec::new(vec![0.2, 0.3, 0.5], vec![7.0, 8.0, 7.0]),
        tip: TipPolicy {
            percentages: vec![0.15, 0.18, 0.20],
            probabilities: vec![0.1, 0.3, 0.6],
            tax_rate: 0.08,
        },
    }
}

/// The Edibles menu with the default run settings (100 000 meals, seed 42,
/// gift at the median, cash up to the 90th percentile).
pub fn edibles_run() -> EstimatorConfig {
    EstimatorConfig {
        meal: edibles_dinner(),
        n_runs: EDIBLES_N_RUNS,
        rng_seed: EDIBLES_SEED,
        streams: 1,
        gift_policy: GiftPolicy::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edibles_dinner_is_valid() {
        assert!(edibles_dinner().validate().is_ok());
        assert!(edibles_run().validate().is_ok());
    }

    #[test]
    fn test_entree_prices_bounds() {
        let prices = edibles_entree_prices();
        assert!(prices.iter().all(|p| (14.0..=30.0).contains(p)));
    }
}
