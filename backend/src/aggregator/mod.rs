//! Meal aggregator
//!
//! Builds one meal by running the course sampler over every course, in a
//! fixed order, then applies a sampled tip and the fixed tax rate.
//!
//! # Draw Order
//!
//! 1. Diner A drinks
//! 2. Diner B drinks
//! 3. Appetizers
//! 4. Entrees
//! 5. Sides
//! 6. Desserts
//! 7. Tip percentage
//!
//! The order only affects which random numbers each course consumes, but it
//! is fixed so that a seeded run is reproducible.

use crate::error::EstimatorError;
use crate::models::{MealConfig, MealSample};
use crate::rng::RngManager;
use crate::sampler::{draw_course, draw_drinks};

/// Simulate one meal and return its total (pre-tax + tip + tax).
///
/// # Errors
/// Propagates configuration errors; nothing is drawn from `rng` when the
/// config is invalid.
///
/// # Example
/// ```
/// use meal_price_simulator_core_rs::aggregator::simulate_one_meal;
/// use meal_price_simulator_core_rs::{presets, RngManager};
///
/// let config = presets::edibles_dinner();
/// let mut rng = RngManager::new(42);
/// let total = simulate_one_meal(&config, &mut rng).unwrap();
/// assert!(total > 0.0);
/// ```
pub fn simulate_one_meal(config: &MealConfig, rng: &mut RngManager) -> Result<f64, EstimatorError> {
    Ok(simulate_meal(config, rng)?.total())
}

/// Like [`simulate_one_meal`] but returns the per-course breakdown.
pub fn simulate_meal(config: &MealConfig, rng: &mut RngManager) -> Result<MealSample, EstimatorError> {
    config.validate()?;
    Ok(sample_meal(config, rng))
}

/// Per-sample routine used after the config has been validated once.
pub(crate) fn sample_meal(config: &MealConfig, rng: &mut RngManager) -> MealSample {
    let diner_a_drinks = draw_drinks(&config.diner_a, rng);
    let diner_b_drinks = draw_drinks(&config.diner_b, rng);
    let appetizers = draw_course(&config.appetizers, rng);
    let entrees = draw_course(&config.entrees, rng);
    let sides = draw_course(&config.sides, rng);
    let desserts = draw_course(&config.desserts, rng);

    let pre_tax = diner_a_drinks + diner_b_drinks + appetizers + entrees + sides + desserts;

    let tip_percentage = config.tip.sample_percentage(rng);
    let tip = pre_tax * tip_percentage;
    let tax = pre_tax * config.tip.tax_rate;

    MealSample {
        diner_a_drinks,
        diner_b_drinks,
        appetizers,
        entrees,
        sides,
        desserts,
        tip_percentage,
        pre_tax,
        tip,
        tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseSpec, DrinkSpec, QuantityDistribution, TipPolicy};

    fn fixed_price_config() -> MealConfig {
        let one = || QuantityDistribution::exactly(1);
        MealConfig {
            diner_a: DrinkSpec {
                quantity: one(),
                cocktail_probability: 1.0,
                cocktail_prices: vec![10.0],
                beer_prices: vec![5.0],
            },
            diner_b: DrinkSpec {
                quantity: one(),
                cocktail_probability: 0.0,
                cocktail_prices: vec![10.0],
                beer_prices: vec![5.0],
            },
            appetizers: CourseSpec::new(one(), vec![12.0]),
            entrees: CourseSpec::new(QuantityDistribution::exactly(2), vec![20.0]),
            sides: CourseSpec::skipped(vec![6.5]),
            desserts: CourseSpec::new(one(), vec![8.0]),
            tip: TipPolicy {
                percentages: vec![0.20],
                probabilities: vec![1.0],
                tax_rate: 0.10,
            },
        }
    }

    #[test]
    fn test_breakdown_and_total() {
        let config = fixed_price_config();
        let mut rng = RngManager::new(4);
        let meal = simulate_meal(&config, &mut rng).unwrap();

        assert_eq!(meal.diner_a_drinks, 10.0);
        assert_eq!(meal.diner_b_drinks, 5.0);
        assert_eq!(meal.appetizers, 12.0);
        assert_eq!(meal.entrees, 40.0);
        assert_eq!(meal.sides, 0.0);
        assert_eq!(meal.desserts, 8.0);
        assert_eq!(meal.pre_tax, 75.0);
        assert!((meal.tip - 15.0).abs() < 1e-9);
        assert!((meal.tax - 7.5).abs() < 1e-9);
        assert!((meal.total() - 97.5).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_config_draws_nothing() {
        let mut config = fixed_price_config();
        config.desserts.prices.clear();

        let mut rng = RngManager::new(4);
        let before = rng.get_state();
        assert!(simulate_one_meal(&config, &mut rng).is_err());
        assert_eq!(rng.get_state(), before);
    }
}
