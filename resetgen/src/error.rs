//! Error taxonomy for the generator.
//!
//! Errors are never recovered locally: the first failure while processing
//! any field aborts the whole run, and no output is written. A run that
//! mixes valid and broken procedures is a worse failure mode than one that
//! produces nothing.

use thiserror::Error;

use crate::model::QualifiedName;

/// Error raised while resolving a named type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The requested type is not present in the structural model.
    #[error("unknown type `{0}`")]
    UnknownType(QualifiedName),
}

/// Error raised by a statement builder backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmissionError {
    /// The backend cannot express the requested construct.
    #[error("emission failed: {0}")]
    Backend(String),
}

/// Error raised by the zero-value synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    /// The type kind has no zero-value construction strategy.
    #[error("unsupported type `{0}`")]
    UnsupportedType(String),
}

/// Top-level generation error.
///
/// Carries the offending type's qualified name and field path wherever a
/// field-level decision failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A selected type is not struct-like.
    #[error("type `{name}` is not a composite type")]
    NotAComposite {
        /// The selected type.
        name: QualifiedName,
    },

    /// A field's type has no zero-value construction strategy.
    #[error("field `{field}` of `{owner}`: unsupported type `{type_name}`")]
    UnsupportedType {
        /// Type whose procedure was being generated.
        owner: QualifiedName,
        /// Path of the offending field.
        field: String,
        /// Name or kind of the unsupported type.
        type_name: String,
    },

    /// An anonymous field has an underlying kind the walker cannot handle.
    #[error("field `{field}` of `{owner}`: unsupported anonymous field of kind `{kind}`")]
    UnsupportedAnonymousKind {
        /// Type whose procedure was being generated.
        owner: QualifiedName,
        /// Name of the anonymous field.
        field: String,
        /// Underlying kind label.
        kind: String,
    },

    /// The external resolver failed before walking.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The external statement builder failed.
    #[error(transparent)]
    Emission(#[from] EmissionError),
}
