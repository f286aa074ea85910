//! Structural type schema definitions.
//!
//! This module defines the resolved type representation that the walker,
//! synthesizer and detector operate on. Schemas are read-only snapshots
//! built once by the external resolver; nothing in this crate mutates them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::schema::CompositeSchema;

/// Opaque identifier of the module/package a type is declared in.
///
/// Two fields belong to the same domain iff their owning types carry equal
/// domain identifiers; unexported fields are only assignable from within
/// their own domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DomainId(String);

impl DomainId {
    /// Create a domain identifier from a package path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The full package path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last path segment, used as the package clause and qualifier
    /// in emitted source.
    pub fn base_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Whether this is the empty (universe) domain.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully qualified name of a named type: owning domain plus identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Domain (package path) the type is declared in.
    pub domain: DomainId,
    /// Type identifier within the domain.
    pub ident: String,
}

impl QualifiedName {
    /// Create a qualified name.
    pub fn new(domain: impl Into<String>, ident: impl Into<String>) -> Self {
        Self {
            domain: DomainId::new(domain),
            ident: ident.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.domain.is_empty() {
            f.write_str(&self.ident)
        } else {
            write!(f, "{}.{}", self.domain, self.ident)
        }
    }
}

/// Basic (scalar) type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicKind {
    /// Integer of any signedness or width.
    Int,
    /// String.
    String,
    /// Floating point of any width.
    Float,
    /// Complex number.
    Complex,
    /// Boolean.
    Bool,
}

impl BasicKind {
    /// Canonical source spelling of the kind, used when a type reference
    /// must be printed (e.g. inside container constructors).
    pub fn type_name(&self) -> &'static str {
        match self {
            BasicKind::Int => "int",
            BasicKind::String => "string",
            BasicKind::Float => "float64",
            BasicKind::Complex => "complex128",
            BasicKind::Bool => "bool",
        }
    }
}

/// Resolved type schema.
///
/// A tagged variant over the closed type-kind taxonomy. `Named` wraps any
/// other schema with the declaring name; [`TypeSchema::underlying`] resolves
/// through such wrappers.
///
/// `TypeParam` represents a type parameter of a parameterized (generic)
/// definition. Generic definitions are unsupported: the synthesizer and the
/// walker reject this kind at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum TypeSchema {
    /// Scalar type.
    Basic(BasicKind),

    /// Struct-like aggregate of fields.
    Composite(CompositeSchema),

    /// Pointer to an element type.
    Pointer(Box<TypeSchema>),

    /// Dynamically sized sequence of an element type.
    Slice(Box<TypeSchema>),

    /// Fixed-length sequence of an element type.
    Array {
        /// Number of elements.
        len: u64,
        /// Element type.
        elem: Box<TypeSchema>,
    },

    /// Associative container.
    Map {
        /// Key type.
        key: Box<TypeSchema>,
        /// Value type.
        elem: Box<TypeSchema>,
    },

    /// Channel of an element type.
    Channel(Box<TypeSchema>),

    /// Function type; the signature is opaque to the generator.
    Function {
        /// Source spelling of the signature.
        signature: String,
    },

    /// Interface kind.
    Interface,

    /// A declared name over an underlying schema.
    Named {
        /// The declaring name.
        name: QualifiedName,
        /// The resolved underlying schema.
        underlying: Box<TypeSchema>,
    },

    /// Type parameter of a generic definition (unsupported at run time).
    TypeParam {
        /// Parameter name as declared.
        name: String,
    },
}

impl TypeSchema {
    /// Build a named schema over an underlying one.
    pub fn named(name: QualifiedName, underlying: TypeSchema) -> Self {
        TypeSchema::Named {
            name,
            underlying: Box::new(underlying),
        }
    }

    /// Build a pointer schema.
    pub fn pointer(elem: TypeSchema) -> Self {
        TypeSchema::Pointer(Box::new(elem))
    }

    /// Build a slice schema.
    pub fn slice(elem: TypeSchema) -> Self {
        TypeSchema::Slice(Box::new(elem))
    }

    /// Build a fixed-length array schema.
    pub fn array(len: u64, elem: TypeSchema) -> Self {
        TypeSchema::Array {
            len,
            elem: Box::new(elem),
        }
    }

    /// Build a map schema.
    pub fn map(key: TypeSchema, elem: TypeSchema) -> Self {
        TypeSchema::Map {
            key: Box::new(key),
            elem: Box::new(elem),
        }
    }

    /// Build a channel schema.
    pub fn channel(elem: TypeSchema) -> Self {
        TypeSchema::Channel(Box::new(elem))
    }

    /// Resolve through `Named` wrappers to the structural schema.
    pub fn underlying(&self) -> &TypeSchema {
        let mut current = self;
        while let TypeSchema::Named { underlying, .. } = current {
            current = underlying;
        }
        current
    }

    /// The declaring name, if this schema is named.
    pub fn name(&self) -> Option<&QualifiedName> {
        match self {
            TypeSchema::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Short kind label for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeSchema::Basic(_) => "basic",
            TypeSchema::Composite(_) => "composite",
            TypeSchema::Pointer(_) => "pointer",
            TypeSchema::Slice(_) => "slice",
            TypeSchema::Array { .. } => "array",
            TypeSchema::Map { .. } => "map",
            TypeSchema::Channel(_) => "channel",
            TypeSchema::Function { .. } => "function",
            TypeSchema::Interface => "interface",
            TypeSchema::Named { .. } => "named",
            TypeSchema::TypeParam { .. } => "type parameter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_base_name() {
        assert_eq!(DomainId::new("github.com/acme/models").base_name(), "models");
        assert_eq!(DomainId::new("models").base_name(), "models");
        assert_eq!(DomainId::new("").base_name(), "");
    }

    #[test]
    fn test_qualified_name_display() {
        let name = QualifiedName::new("github.com/acme/models", "User");
        assert_eq!(name.to_string(), "github.com/acme/models.User");

        let bare = QualifiedName::new("", "User");
        assert_eq!(bare.to_string(), "User");
    }

    #[test]
    fn test_underlying_resolves_named_chains() {
        let inner = TypeSchema::Basic(BasicKind::Int);
        let alias = TypeSchema::named(QualifiedName::new("models", "ID"), inner.clone());
        let alias2 = TypeSchema::named(QualifiedName::new("models", "UserID"), alias);
        assert_eq!(alias2.underlying(), &inner);
    }

    #[test]
    fn test_underlying_of_structural_schema_is_identity() {
        let ty = TypeSchema::slice(TypeSchema::Basic(BasicKind::String));
        assert_eq!(ty.underlying(), &ty);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(TypeSchema::Interface.kind_name(), "interface");
        assert_eq!(
            TypeSchema::pointer(TypeSchema::Basic(BasicKind::Int)).kind_name(),
            "pointer"
        );
        assert_eq!(
            TypeSchema::TypeParam { name: "T".into() }.kind_name(),
            "type parameter"
        );
    }

    #[test]
    fn test_schema_serde_round_trip() {
        let ty = TypeSchema::map(
            TypeSchema::Basic(BasicKind::String),
            TypeSchema::slice(TypeSchema::Basic(BasicKind::Int)),
        );
        let json = serde_json::to_string(&ty).unwrap();
        let back: TypeSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty);
    }
}
