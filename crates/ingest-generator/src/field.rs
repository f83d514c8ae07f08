//! Field specifications: the declared distribution of each field in a shape.

use crate::value::ValueType;

/// A named field and the distribution its value is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Distribution of a single field.
///
/// Every field is drawn independently; no kind refers to another field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Random UUID v4, rendered as a string
    Uuid,

    /// Exactly `n` ASCII letters
    Letters(usize),

    /// Exactly `n` ASCII letters or digits
    Alphanumeric(usize),

    /// Template string with placeholders, see [`crate::generators::pattern`]
    Pattern(&'static str),

    /// Integer in `[min, max]`
    IntRange { min: i64, max: i64 },

    /// Float in `[min, max]`, rounded to 2 decimals
    FloatRange { min: f64, max: f64 },

    /// Fair coin
    Bool,

    /// Uniform choice from a set of strings
    OneOf(&'static [&'static str]),

    /// Uniform choice from a set of integers
    OneOfInt(&'static [i64]),

    /// Timestamp uniformly distributed over the trailing `days` window
    RecentTimestamp { days: u32 },

    /// Sample without replacement from `pool`, of a size in `[min, max]`
    Sample {
        pool: &'static [&'static str],
        min: usize,
        max: usize,
    },

    /// Between `min` and `max` random alphanumeric strings of length `len`
    StringList { min: usize, max: usize, len: usize },

    /// Nested record with a fixed field list
    Nested(&'static [FieldSpec]),

    /// Nested record with `count` random keys of length `key_len`, each mapped
    /// to an alphanumeric string with a length in `[min_len, max_len]`.
    ///
    /// Colliding keys collapse, so the record may hold fewer than `count` keys.
    RandomKeys {
        count: usize,
        key_len: usize,
        min_len: usize,
        max_len: usize,
    },
}

impl FieldKind {
    /// The type of value this kind always produces.
    pub fn value_type(&self) -> ValueType {
        match self {
            FieldKind::Uuid
            | FieldKind::Letters(_)
            | FieldKind::Alphanumeric(_)
            | FieldKind::Pattern(_)
            | FieldKind::OneOf(_) => ValueType::String,
            FieldKind::IntRange { .. } | FieldKind::OneOfInt(_) => ValueType::Int,
            FieldKind::FloatRange { .. } => ValueType::Float,
            FieldKind::Bool => ValueType::Bool,
            FieldKind::RecentTimestamp { .. } => ValueType::Timestamp,
            FieldKind::Sample { .. } | FieldKind::StringList { .. } => ValueType::List,
            FieldKind::Nested(_) | FieldKind::RandomKeys { .. } => ValueType::Map,
        }
    }
}
