//! Record generator producing one record per call.

use crate::envelope::Envelope;
use crate::field::{FieldKind, FieldSpec};
use crate::generators::{array, numeric, pattern, text, timestamp, uuid};
use crate::shape::{Shape, ShapeSelector};
use crate::value::{Record, Value};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Derive the RNG seed of a single dispatch unit.
///
/// Every unit gets its own stream so units can run on any worker in any
/// order and still produce the same records for a given base seed.
pub fn unit_seed(seed: u64, index: u64) -> u64 {
    seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
}

/// Generates records for the known shapes.
///
/// Uses a seeded random number generator, so the same seed always yields
/// the same sequence of records (apart from timestamps, which are anchored
/// to the generator's `now`, see [`RecordGenerator::with_now`]).
pub struct RecordGenerator {
    /// Seeded random number generator
    rng: StdRng,
    /// End of the trailing window for timestamp fields
    now: DateTime<Utc>,
}

impl RecordGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now: Utc::now(),
        }
    }

    /// Create the generator for dispatch unit `index` of a run seeded with `seed`.
    pub fn for_unit(seed: u64, index: u64) -> Self {
        Self::new(unit_seed(seed, index))
    }

    /// Anchor timestamp fields to a fixed instant instead of the wall clock.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Generate one record of the given shape.
    pub fn generate(&mut self, shape: Shape) -> Record {
        self.generate_fields(shape.fields())
    }

    /// Resolve the selector and generate one record of the chosen shape.
    pub fn generate_selected(&mut self, selector: ShapeSelector) -> (Shape, Record) {
        let shape = selector.resolve(&mut self.rng);
        let record = self.generate(shape);
        (shape, record)
    }

    /// Generate one record and wrap it in an envelope named after its shape.
    pub fn envelope(&mut self, selector: ShapeSelector) -> Envelope {
        let (shape, record) = self.generate_selected(selector);
        Envelope::new(shape, record)
    }

    fn generate_fields(&mut self, fields: &[FieldSpec]) -> Record {
        fields
            .iter()
            .map(|field| (field.name.to_string(), self.generate_value(&field.kind)))
            .collect()
    }

    fn generate_value(&mut self, kind: &FieldKind) -> Value {
        let rng = &mut self.rng;
        match kind {
            FieldKind::Uuid => Value::String(uuid::random_uuid(rng).to_string()),

            FieldKind::Letters(len) => Value::String(text::letters(rng, *len)),

            FieldKind::Alphanumeric(len) => Value::String(text::alphanumeric(rng, *len)),

            FieldKind::Pattern(template) => Value::String(pattern::generate_pattern(template, rng)),

            FieldKind::IntRange { min, max } => Value::Int(numeric::int_range(rng, *min, *max)),

            FieldKind::FloatRange { min, max } => {
                Value::Float(numeric::float_range(rng, *min, *max))
            }

            FieldKind::Bool => Value::Bool(rng.random_bool(0.5)),

            FieldKind::OneOf(choices) => {
                if choices.is_empty() {
                    Value::String(String::new())
                } else {
                    Value::String(choices[rng.random_range(0..choices.len())].to_string())
                }
            }

            FieldKind::OneOfInt(choices) => {
                Value::Int(numeric::one_of_int(rng, choices).unwrap_or_default())
            }

            FieldKind::RecentTimestamp { days } => {
                Value::Timestamp(timestamp::recent_timestamp(rng, self.now, *days))
            }

            FieldKind::Sample { pool, min, max } => {
                Value::List(array::sample_without_replacement(rng, pool, *min, *max))
            }

            FieldKind::StringList { min, max, len } => {
                Value::List(array::string_list(rng, *min, *max, *len))
            }

            FieldKind::Nested(fields) => Value::Map(self.generate_fields(fields)),

            FieldKind::RandomKeys {
                count,
                key_len,
                min_len,
                max_len,
            } => {
                let record: Record = (0..*count)
                    .map(|_| {
                        let key = text::alphanumeric(rng, *key_len);
                        let value = text::alphanumeric_range(rng, *min_len, *max_len);
                        (key, Value::String(value))
                    })
                    .collect();
                Value::Map(record)
            }
        }
    }
}
