//! List value generators.

use crate::generators::text;
use rand::seq::index;
use rand::Rng;

/// Sample between `min` and `max` distinct items from `pool`.
///
/// Bounds are clamped to the pool size, so the result never repeats an item.
pub fn sample_without_replacement<R: Rng>(
    rng: &mut R,
    pool: &[&str],
    min: usize,
    max: usize,
) -> Vec<String> {
    if pool.is_empty() || max == 0 {
        return vec![];
    }

    let effective_max = max.min(pool.len());
    let effective_min = min.min(effective_max);
    let amount = rng.random_range(effective_min..=effective_max);

    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].to_string())
        .collect()
}

/// Generate between `min` and `max` random alphanumeric strings of length `len`.
pub fn string_list<R: Rng>(rng: &mut R, min: usize, max: usize, len: usize) -> Vec<String> {
    let count = if min >= max {
        min
    } else {
        rng.random_range(min..=max)
    };
    (0..count).map(|_| text::alphanumeric(rng, len)).collect()
}
