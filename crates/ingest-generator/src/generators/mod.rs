//! Individual value generators.
//!
//! Each submodule draws one kind of value from a caller-supplied RNG so
//! generation stays reproducible for a given seed.

pub mod array;
pub mod numeric;
pub mod pattern;
pub mod text;
pub mod timestamp;
pub mod uuid;
