//! Synthetic record generator for the ingest load generator.
//!
//! This crate produces randomized records for a small closed set of shapes
//! (user, transaction, event, profile) and wraps them in the envelope the
//! ingestion endpoint expects.
//!
//! # Architecture
//!
//! ```text
//! ShapeSelector (Fixed | Mixed)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - now           │
//! └────────┬─────────┘
//!          │  Shape::fields() -> &[FieldSpec]
//!          ▼
//!    Envelope { schema_name, data: Record }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ingest_generator::{RecordGenerator, Shape, ShapeSelector};
//!
//! let mut generator = RecordGenerator::new(42);
//! let envelope = generator.envelope(ShapeSelector::Fixed(Shape::User));
//! assert_eq!(envelope.schema_name, "user");
//! assert!(envelope.data.contains_key("email"));
//! ```
//!
//! # Field kinds
//!
//! - `uuid` - random UUID v4 drawn from the generator's RNG
//! - `letters` / `alphanumeric` - fixed-length random strings
//! - `pattern` - templates with placeholders (`{uuid}`, `{letters:N}`, `{int:A-B}`, `{pick:a|b}`)
//! - `int_range` / `float_range` - uniform numbers in an inclusive range
//! - `one_of` - uniform choice from an enumerated set
//! - `recent_timestamp` - timestamps over a trailing window
//! - `sample` - random-size sample without replacement from a tag pool
//! - `nested` / `random_keys` - nested records

pub mod envelope;
pub mod error;
pub mod field;
pub mod generator;
pub mod generators;
pub mod shape;
pub mod value;

// Re-exports for convenience
pub use envelope::Envelope;
pub use error::GeneratorError;
pub use field::{FieldKind, FieldSpec};
pub use generator::{unit_seed, RecordGenerator};
pub use shape::{Shape, ShapeSelector};
pub use value::{Record, Value, ValueType};
