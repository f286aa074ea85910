//! Structural data model.
//!
//! Read-only snapshots of resolved type information: the type schema
//! taxonomy, composite field descriptors and per-field directives. Built
//! once by the resolver, then shared immutably by the walker, synthesizer
//! and detector.

mod directive;
mod schema;
mod types;

pub use directive::{Directives, NONIL};
pub use schema::{CompositeSchema, FieldDescriptor};
pub use types::{BasicKind, DomainId, QualifiedName, TypeSchema};
