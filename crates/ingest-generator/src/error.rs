//! Error types for the record generator.

use thiserror::Error;

/// Errors raised while configuring the generator.
///
/// Generation itself never fails; the only fallible step is turning
/// user-supplied names into shapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Shape name is not one of the known shapes
    #[error("Unknown shape '{0}' (expected one of: user, transaction, event, profile, mixed)")]
    UnknownShape(String),
}
