//! Generates Go `Reset()` methods from a resolved structural type model.
//!
//! Given a [`StructuralModel`] (or any [`TypeResolver`]) describing named
//! types, their underlying schemas and their method sets, a [`Generator`]
//! produces one deterministic reset procedure per selected composite type:
//! each field is restored to its zero value, embedded types either delegate
//! to an existing `Reset` or are flattened into the parent procedure, and a
//! `nonil` field directive swaps nil for a fresh allocation.
//!
//! # Example
//!
//! ```
//! use resetgen::{
//!     BasicKind, CompositeSchema, DomainId, FieldDescriptor, Generator,
//!     NamedTypeDef, QualifiedName, StructuralModel, TypeSchema,
//! };
//!
//! let model = StructuralModel::new().with(NamedTypeDef::new(
//!     QualifiedName::new("github.com/acme/models", "User"),
//!     TypeSchema::Composite(CompositeSchema::new(vec![
//!         FieldDescriptor::new("Name", TypeSchema::Basic(BasicKind::String)),
//!         FieldDescriptor::new("Age", TypeSchema::Basic(BasicKind::Int)),
//!     ])),
//! ));
//!
//! let generator = Generator::new(&model, DomainId::new("github.com/acme/models"));
//! let source = generator
//!     .generate(&[QualifiedName::new("github.com/acme/models", "User")])
//!     .unwrap();
//! assert!(source.contains("func (u *User) Reset() {"));
//! ```
//!
//! A run is all or nothing: the first unresolvable or unsupported type aborts
//! it and no output is produced.

pub mod detect;
pub mod emit;
pub mod error;
pub mod generate;
pub mod model;
pub mod resolver;
pub mod synth;
pub mod walk;

pub use detect::{CapabilityDetector, RESET_OPERATION};
pub use emit::go::{EmitConfig, GoWriter, IndentStyle, LineEnding};
pub use emit::{Guard, StatementBuilder, Stmt};
pub use error::{EmissionError, GenerateError, ResolutionError, SynthError};
pub use generate::{Generator, GENERATED_HEADER};
pub use model::{
    BasicKind, CompositeSchema, Directives, DomainId, FieldDescriptor, QualifiedName, TypeSchema,
    NONIL,
};
pub use resolver::{NamedTypeDef, ReceiverForm, StructuralModel, TypeResolver};
pub use synth::{synthesize, Literal, ValueExpr};
pub use walk::{Action, FieldPath, Walker};
