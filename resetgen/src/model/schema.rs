//! Composite schema and field descriptors.
//!
//! A composite is a struct-like aggregate; its fields keep declaration
//! order, which the walker preserves end-to-end for reproducible output.

use serde::{Deserialize, Serialize};

use super::directive::Directives;
use super::types::{DomainId, TypeSchema};

/// Struct-like aggregate of fields in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeSchema {
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl CompositeSchema {
    /// Create a composite schema from fields in declaration order.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }
}

/// A single field of a composite type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field identifier. For anonymous (embedded) fields this is the base
    /// identifier of the embedded type.
    pub name: String,

    /// Resolved field type.
    pub ty: TypeSchema,

    /// Whether the field is exported (assignable from foreign domains).
    #[serde(default)]
    pub exported: bool,

    /// Whether the field is an embedding (contributes no explicit name).
    #[serde(default)]
    pub anonymous: bool,

    /// Directives parsed from declaration metadata. Consulted only for this
    /// field itself, never inherited by recursion into subfields.
    #[serde(default, skip_serializing_if = "Directives::is_empty")]
    pub directives: Directives,

    /// Domain of the type this field is declared in.
    #[serde(default)]
    pub owning_domain: DomainId,
}

impl FieldDescriptor {
    /// Create a field descriptor. Exportedness defaults to the source
    /// convention: an identifier starting with an uppercase letter.
    pub fn new(name: impl Into<String>, ty: TypeSchema) -> Self {
        let name = name.into();
        let exported = name.chars().next().is_some_and(|c| c.is_uppercase());
        Self {
            name,
            ty,
            exported,
            anonymous: false,
            directives: Directives::default(),
            owning_domain: DomainId::default(),
        }
    }

    /// Mark the field as an embedding.
    pub fn with_anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }

    /// Override exportedness.
    pub fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Attach parsed directives.
    pub fn with_directives(mut self, directives: Directives) -> Self {
        self.directives = directives;
        self
    }

    /// Parse and attach directive metadata text.
    pub fn with_directive_text(self, text: &str) -> Self {
        self.with_directives(Directives::parse(text))
    }

    /// Set the domain the field is declared in.
    pub fn with_owning_domain(mut self, domain: DomainId) -> Self {
        self.owning_domain = domain;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::BasicKind;

    #[test]
    fn test_exportedness_follows_identifier_case() {
        let f = FieldDescriptor::new("Name", TypeSchema::Basic(BasicKind::String));
        assert!(f.exported);

        let f = FieldDescriptor::new("name", TypeSchema::Basic(BasicKind::String));
        assert!(!f.exported);
    }

    #[test]
    fn test_field_builder() {
        let f = FieldDescriptor::new("Inner", TypeSchema::Interface)
            .with_anonymous(true)
            .with_directive_text("nonil")
            .with_owning_domain(DomainId::new("models"));

        assert!(f.anonymous);
        assert!(f.directives.force_non_nil());
        assert_eq!(f.owning_domain, DomainId::new("models"));
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema = CompositeSchema::new(vec![
            FieldDescriptor::new("B", TypeSchema::Basic(BasicKind::Int)),
            FieldDescriptor::new("A", TypeSchema::Basic(BasicKind::Int)),
        ]);
        let names: Vec<_> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
