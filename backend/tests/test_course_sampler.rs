//! Course Sampler Tests
//!
//! Quantities follow the configured probability vector, and every course
//! total is a sum of exactly `q` prices from the course's price list.

use meal_price_simulator_core_rs::{
    draw_priced_items, sample_course, sample_drinks, ConfigurationError, CourseSpec, DrinkSpec,
    QuantityDistribution, RngManager,
};

/// Prices chosen so that every multiset sum identifies its size:
/// all sums of `q` items lie in [100q, 100q + 3q].
fn tagged_course(quantity: Vec<f64>) -> CourseSpec {
    CourseSpec::new(quantity, vec![100.0, 101.0, 102.0, 103.0])
}

fn quantity_of(total: f64) -> usize {
    (total / 100.0).floor() as usize
}

#[test]
fn test_quantity_frequencies_match_chi_square() {
    let probabilities = vec![0.2, 0.5, 0.3];
    let spec = tagged_course(probabilities.clone());
    let mut rng = RngManager::new(42);
    let n = 10_000;
    let mut counts = [0usize; 3];

    for _ in 0..n {
        let total = sample_course(&spec, &mut rng).unwrap();
        counts[quantity_of(total)] += 1;
    }

    let chi_square: f64 = probabilities
        .iter()
        .zip(counts.iter())
        .map(|(p, &observed)| {
            let expected = p * n as f64;
            (observed as f64 - expected).powi(2) / expected
        })
        .sum();

    // df = 2, p = 0.001 critical value
    assert!(
        chi_square < 13.816,
        "chi-square {} too large for counts {:?}",
        chi_square,
        counts
    );
}

#[test]
fn test_total_is_sum_of_supported_quantity() {
    let spec = tagged_course(vec![0.1, 0.2, 0.3, 0.4]);
    let mut rng = RngManager::new(7);

    for _ in 0..2_000 {
        let total = sample_course(&spec, &mut rng).unwrap();
        let q = quantity_of(total);
        assert!(q <= spec.quantity.max_quantity());
        let extra = total - 100.0 * q as f64;
        assert!(
            (0.0..=3.0 * q as f64).contains(&extra),
            "total {} is not a sum of {} listed prices",
            total,
            q
        );
    }
}

#[test]
fn test_never_ordered_course_is_free() {
    let spec = CourseSpec::skipped(vec![9.0]);
    let mut rng = RngManager::new(3);
    for _ in 0..100 {
        assert_eq!(sample_course(&spec, &mut rng).unwrap(), 0.0);
    }
}

#[test]
fn test_draw_priced_items_uses_every_price() {
    let prices = [1.0, 10.0, 100.0];
    let mut rng = RngManager::new(99);
    let mut seen = [false; 3];
    for _ in 0..500 {
        let v = draw_priced_items(&prices, 1, &mut rng);
        let i = prices.iter().position(|p| *p == v).unwrap();
        seen[i] = true;
    }
    assert_eq!(seen, [true, true, true]);
}

#[test]
fn test_cocktail_share_follows_diner_probability() {
    let spec = DrinkSpec {
        quantity: QuantityDistribution::exactly(1),
        cocktail_probability: 0.7,
        cocktail_prices: vec![10.0],
        beer_prices: vec![6.0],
    };
    let mut rng = RngManager::new(11);
    let n = 20_000;
    let cocktails = (0..n)
        .filter(|_| sample_drinks(&spec, &mut rng).unwrap() == 10.0)
        .count();

    let share = cocktails as f64 / n as f64;
    assert!((share - 0.7).abs() < 0.02, "cocktail share {}", share);
}

#[test]
fn test_invalid_specs_fail_with_configuration_error() {
    let mut rng = RngManager::new(1);

    let empty_prices = CourseSpec::new(vec![0.5, 0.5], vec![]);
    assert!(matches!(
        sample_course(&empty_prices, &mut rng),
        Err(ConfigurationError::EmptyPriceList { .. })
    ));

    let negative = CourseSpec::new(vec![1.5, -0.5], vec![5.0]);
    assert!(matches!(
        sample_course(&negative, &mut rng),
        Err(ConfigurationError::NegativeProbability { .. })
    ));

    let bad_drinks = DrinkSpec {
        quantity: QuantityDistribution::new(vec![0.3, 0.3]),
        cocktail_probability: 0.5,
        cocktail_prices: vec![8.0],
        beer_prices: vec![5.0],
    };
    assert!(matches!(
        sample_drinks(&bad_drinks, &mut rng),
        Err(ConfigurationError::ProbabilitySum { .. })
    ));
}
