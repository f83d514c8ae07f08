//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{uuid}` - random UUID
//! - `{letters:N}` - N random ASCII letters
//! - `{lower:N}` - N random lowercase letters
//! - `{alnum:N}` - N random letters or digits
//! - `{capital:N}` - N random letters, first upper-cased, rest lower-cased
//! - `{int:A-B}` - random integer in `[A, B]` (non-negative bounds)
//! - `{int:A-B:W}` - same, zero-padded to width W
//! - `{pick:a|b|c}` - one of the listed options
//!
//! Anything else inside braces is copied through unchanged.

use crate::generators::{numeric, text, uuid};
use rand::Rng;

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('}') else {
            // Unterminated placeholder, keep the tail verbatim
            result.push_str(&rest[start..]);
            return result;
        };

        let token = &after[..end];
        match expand_placeholder(token, rng) {
            Some(expanded) => result.push_str(&expanded),
            None => {
                result.push('{');
                result.push_str(token);
                result.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}

fn expand_placeholder<R: Rng>(token: &str, rng: &mut R) -> Option<String> {
    let (name, arg) = match token.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (token, None),
    };

    match (name, arg) {
        ("uuid", None) => Some(uuid::random_uuid(rng).to_string()),
        ("letters", Some(len)) => Some(text::letters(rng, len.parse().ok()?)),
        ("lower", Some(len)) => Some(text::lowercase(rng, len.parse().ok()?)),
        ("alnum", Some(len)) => Some(text::alphanumeric(rng, len.parse().ok()?)),
        ("capital", Some(len)) => Some(text::capitalized(rng, len.parse().ok()?)),
        ("int", Some(arg)) => expand_int(arg, rng),
        ("pick", Some(options)) => {
            let options: Vec<&str> = options.split('|').collect();
            let idx = rng.random_range(0..options.len());
            Some(options[idx].to_string())
        }
        _ => None,
    }
}

fn expand_int<R: Rng>(arg: &str, rng: &mut R) -> Option<String> {
    let (range, width) = match arg.split_once(':') {
        Some((range, width)) => (range, width.parse::<usize>().ok()?),
        None => (arg, 0),
    };
    let (min, max) = range.split_once('-')?;
    let min: i64 = min.parse().ok()?;
    let max: i64 = max.parse().ok()?;
    if min > max {
        return None;
    }

    let value = numeric::int_range(rng, min, max);
    Some(format!("{value:0width$}"))
}
