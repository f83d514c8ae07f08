//! Numeric value generators.

use rand::Rng;

/// Generate a random integer in the given range (inclusive).
///
/// A degenerate range (`min >= max`) always yields `min`.
pub fn int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Generate a random float in the given range (inclusive), rounded to 2 decimals.
pub fn float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min >= max {
        return min;
    }
    let value = rng.random_range(min..=max);
    // Rounding may step past a bound that has more than 2 decimals
    ((value * 100.0).round() / 100.0).clamp(min, max)
}

/// Pick one integer uniformly from `choices`.
pub fn one_of_int<R: Rng>(rng: &mut R, choices: &[i64]) -> Option<i64> {
    if choices.is_empty() {
        return None;
    }
    Some(choices[rng.random_range(0..choices.len())])
}
