//! The `{schema_name, data}` wrapper submitted to the ingestion endpoint.

use crate::shape::Shape;
use crate::value::Record;
use serde::Serialize;

/// Envelope around one generated record.
///
/// `schema_name` is a label only; nothing checks it against the shape of `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub schema_name: String,
    pub data: Record,
}

impl Envelope {
    /// Wrap a record, naming it after the shape it was generated from.
    pub fn new(shape: Shape, data: Record) -> Self {
        Self {
            schema_name: shape.name().to_string(),
            data,
        }
    }

    /// Wrap a record under an arbitrary schema name.
    pub fn with_schema_name(schema_name: impl Into<String>, data: Record) -> Self {
        Self {
            schema_name: schema_name.into(),
            data,
        }
    }

    /// Serialize to the JSON body sent over the wire.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Size of the serialized body in bytes.
    pub fn byte_len(&self) -> serde_json::Result<usize> {
        self.to_json().map(|body| body.len())
    }
}
