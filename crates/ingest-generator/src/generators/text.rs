//! Random string generators.

use rand::Rng;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const ALPHANUMERIC: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const LOWER_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a string of exactly `len` characters drawn uniformly from `charset`.
pub fn from_charset<R: Rng>(rng: &mut R, charset: &[u8], len: usize) -> String {
    if charset.is_empty() {
        return String::new();
    }
    (0..len)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

pub fn letters<R: Rng>(rng: &mut R, len: usize) -> String {
    from_charset(rng, LETTERS, len)
}

pub fn lowercase<R: Rng>(rng: &mut R, len: usize) -> String {
    from_charset(rng, LOWERCASE, len)
}

pub fn alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    from_charset(rng, ALPHANUMERIC, len)
}

pub fn lower_alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    from_charset(rng, LOWER_ALPHANUMERIC, len)
}

/// Alphanumeric string with a length drawn from `[min, max]`.
pub fn alphanumeric_range<R: Rng>(rng: &mut R, min: usize, max: usize) -> String {
    let len = if min >= max {
        min
    } else {
        rng.random_range(min..=max)
    };
    alphanumeric(rng, len)
}

/// Random letters with the first one upper-cased and the rest lower-cased.
pub fn capitalized<R: Rng>(rng: &mut R, len: usize) -> String {
    let word = letters(rng, len);
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
