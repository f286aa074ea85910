//! Type resolver boundary.
//!
//! Discovery, parsing and type checking of source files happen outside this
//! crate. Whatever performs them hands over a [`StructuralModel`]: per named
//! type, the resolved underlying schema plus the sets of operation names
//! reachable on its value and by-reference forms. The core queries the model
//! through the [`TypeResolver`] trait and never mutates it, so every walk is
//! an independent, stateless invocation over shared read-only data.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ResolutionError;
use crate::model::{QualifiedName, TypeSchema};

/// Receiver form a method-set query is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiverForm {
    /// The value form of the type.
    Value,
    /// A synthesized by-reference form of the type.
    Reference,
}

/// Read-only query interface over a resolved structural model.
pub trait TypeResolver {
    /// Resolve a named type to its underlying schema.
    fn lookup(&self, name: &QualifiedName) -> Result<&TypeSchema, ResolutionError>;

    /// Whether a zero-argument operation with the given name is reachable on
    /// the requested receiver form of the named type.
    ///
    /// The by-reference method set includes the value set.
    fn has_operation(&self, name: &QualifiedName, form: ReceiverForm, operation: &str) -> bool;
}

/// Definition of one named type in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTypeDef {
    /// Qualified name of the type.
    pub name: QualifiedName,

    /// Resolved underlying schema.
    pub underlying: TypeSchema,

    /// Operations declared on the value form.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub value_operations: BTreeSet<String>,

    /// Operations declared on the by-reference form only.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub reference_operations: BTreeSet<String>,
}

impl NamedTypeDef {
    /// Create a named type definition with empty method sets.
    pub fn new(name: QualifiedName, underlying: TypeSchema) -> Self {
        Self {
            name,
            underlying,
            value_operations: BTreeSet::new(),
            reference_operations: BTreeSet::new(),
        }
    }

    /// Declare an operation on the value form.
    pub fn with_value_operation(mut self, operation: impl Into<String>) -> Self {
        self.value_operations.insert(operation.into());
        self
    }

    /// Declare an operation on the by-reference form.
    pub fn with_reference_operation(mut self, operation: impl Into<String>) -> Self {
        self.reference_operations.insert(operation.into());
        self
    }

    /// The schema of this type as seen by fields referencing it: the
    /// underlying schema wrapped in its declaring name.
    pub fn schema(&self) -> TypeSchema {
        TypeSchema::named(self.name.clone(), self.underlying.clone())
    }
}

/// In-memory structural model, the reference [`TypeResolver`].
///
/// Deserializable from JSON, which is how test fixtures and embedding hosts
/// hand a resolved model across the boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuralModel {
    types: BTreeMap<String, NamedTypeDef>,
}

impl StructuralModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named type definition, replacing any previous one.
    pub fn insert(&mut self, def: NamedTypeDef) {
        self.types.insert(def.name.to_string(), def);
    }

    /// Insert a named type definition, builder style.
    pub fn with(mut self, def: NamedTypeDef) -> Self {
        self.insert(def);
        self
    }

    /// Load a model from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a named type definition.
    pub fn get(&self, name: &QualifiedName) -> Option<&NamedTypeDef> {
        self.types.get(&name.to_string())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the model is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeResolver for StructuralModel {
    fn lookup(&self, name: &QualifiedName) -> Result<&TypeSchema, ResolutionError> {
        self.get(name)
            .map(|def| &def.underlying)
            .ok_or_else(|| ResolutionError::UnknownType(name.clone()))
    }

    fn has_operation(&self, name: &QualifiedName, form: ReceiverForm, operation: &str) -> bool {
        let Some(def) = self.get(name) else {
            return false;
        };
        match form {
            ReceiverForm::Value => def.value_operations.contains(operation),
            // The by-reference set includes everything reachable on the value
            // form.
            ReceiverForm::Reference => {
                def.value_operations.contains(operation)
                    || def.reference_operations.contains(operation)
            }
        }
    }
}
