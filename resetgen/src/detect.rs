//! Capability and visibility detection.
//!
//! Three pure predicates over the read-only structural model: whether a type
//! carries an existing reset operation, whether a composite has unexported
//! fields, and whether two domains are the same. Capability lookups delegate
//! to the resolver's method-set queries and are memoized per qualified name.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::model::{CompositeSchema, DomainId, QualifiedName, TypeSchema};
use crate::resolver::{ReceiverForm, TypeResolver};

/// Reserved name of the generated reset operation.
pub const RESET_OPERATION: &str = "Reset";

/// Pure capability/visibility queries over a resolver handle.
#[derive(Debug)]
pub struct CapabilityDetector<'a, R: TypeResolver + ?Sized> {
    resolver: &'a R,
    reset_cache: RefCell<HashMap<QualifiedName, bool>>,
}

impl<'a, R: TypeResolver + ?Sized> CapabilityDetector<'a, R> {
    /// Create a detector over a resolver handle.
    pub fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            reset_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Whether a zero-argument `Reset` operation is reachable on the value
    /// form or a synthesized by-reference form of the type.
    ///
    /// Only named types carry method sets; structural kinds never have a
    /// reset capability.
    pub fn has_reset_capability(&self, ty: &TypeSchema) -> bool {
        let Some(name) = ty.name() else {
            return false;
        };
        if let Some(&cached) = self.reset_cache.borrow().get(name) {
            return cached;
        }
        let reachable = self
            .resolver
            .has_operation(name, ReceiverForm::Value, RESET_OPERATION)
            || self
                .resolver
                .has_operation(name, ReceiverForm::Reference, RESET_OPERATION);
        self.reset_cache
            .borrow_mut()
            .insert(name.clone(), reachable);
        reachable
    }

    /// Whether any direct field of the composite is unexported.
    pub fn has_unexported_field(&self, composite: &CompositeSchema) -> bool {
        composite.fields.iter().any(|f| !f.exported)
    }

    /// Whether two owning-domain identifiers are equal.
    pub fn same_domain(&self, a: &DomainId, b: &DomainId) -> bool {
        a == b
    }
}
