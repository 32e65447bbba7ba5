//! Course sampler
//!
//! Draws how many units of a course are ordered, then prices each unit by a
//! uniform draw (with replacement) from the course's price list.
//!
//! # Determinism
//!
//! Every draw goes through the caller's [`RngManager`]; nothing is carried
//! between calls. For a given generator state the number of draws consumed is
//! `1 + q` for a course and `1 + 2q` for drinks.

use crate::error::ConfigurationError;
use crate::models::{CourseSpec, DrinkSpec};
use crate::rng::RngManager;

/// Sum of `quantity` prices drawn uniformly with replacement from `prices`.
///
/// Zero quantity returns 0.0 without touching the generator.
///
/// # Panics
/// Panics if `quantity > 0` and `prices` is empty
///
/// # Example
/// ```
/// use meal_price_simulator_core_rs::sampler::draw_priced_items;
/// use meal_price_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(42);
/// let total = draw_priced_items(&[7.0], 3, &mut rng);
/// assert_eq!(total, 21.0);
/// ```
pub fn draw_priced_items(prices: &[f64], quantity: usize, rng: &mut RngManager) -> f64 {
    (0..quantity).map(|_| prices[rng.index(prices.len())]).sum()
}

/// Price one course: categorical quantity draw, then `q` priced items.
///
/// The spec is validated on every call. A standalone spec has no name, so
/// error fields carry the generic `course.` prefix (`course.quantity`,
/// `course.prices`); [`MealConfig::validate`](crate::models::MealConfig::validate)
/// reports the real course name instead.
pub fn sample_course(spec: &CourseSpec, rng: &mut RngManager) -> Result<f64, ConfigurationError> {
    spec.validate("course")?;
    Ok(draw_course(spec, rng))
}

/// Price one diner's drinks. Each drink is independently a cocktail with the
/// diner's own `cocktail_probability`, otherwise a beer.
///
/// Error fields carry the generic `drinks.` prefix (e.g. `drinks.beer_prices`).
pub fn sample_drinks(spec: &DrinkSpec, rng: &mut RngManager) -> Result<f64, ConfigurationError> {
    spec.validate("drinks")?;
    Ok(draw_drinks(spec, rng))
}

/// [`sample_course`] without validation, for the hot loop.
pub(crate) fn draw_course(spec: &CourseSpec, rng: &mut RngManager) -> f64 {
    let quantity = spec.quantity.sample(rng);
    draw_priced_items(&spec.prices, quantity, rng)
}

/// [`sample_drinks`] without validation, for the hot loop.
pub(crate) fn draw_drinks(spec: &DrinkSpec, rng: &mut RngManager) -> f64 {
    let quantity = spec.quantity.sample(rng);
    (0..quantity)
        .map(|_| {
            let prices = if rng.bernoulli(spec.cocktail_probability) {
                &spec.cocktail_prices
            } else {
                &spec.beer_prices
            };
            draw_priced_items(prices, 1, rng)
        })
        .sum()
}
