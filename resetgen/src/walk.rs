//! Type walking.
//!
//! Drives the per-field decision process for a composite type and produces
//! the ordered action sequence the emission backend consumes. Field
//! declaration order is preserved across all recursion levels; for a fixed
//! model the output is deterministic.
//!
//! Per field, in declaration order:
//!
//! 1. A named field is assigned its zero value.
//! 2. An embedded interface delegates to an existing reset capability under
//!    a nil guard, or is assigned nil.
//! 3. An embedded composite delegates to an existing reset capability if one
//!    is present; otherwise, if it carries unexported fields and lives in a
//!    foreign domain, the whole field is reassigned (element-wise descent is
//!    impossible from here); otherwise its own actions are flattened into
//!    the parent's sequence under the extended path.
//! 4. Any other embedded kind is an error.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::detect::CapabilityDetector;
use crate::error::GenerateError;
use crate::model::{CompositeSchema, DomainId, FieldDescriptor, QualifiedName, TypeSchema};
use crate::resolver::TypeResolver;

/// Ordered list of field selectors from the receiver to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// The empty path (the receiver itself).
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with one more selector.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// The selectors in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// One unit of the walker's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Action {
    /// Assign the field its zero value.
    AssignZero {
        /// Field path from the receiver.
        path: FieldPath,
        /// Declared field type.
        ty: TypeSchema,
        /// Whether the field's `nonil` directive forces allocation.
        force_non_nil: bool,
    },

    /// Invoke the field's existing reset operation.
    InvokeReset {
        /// Field path from the receiver.
        path: FieldPath,
    },

    /// Guard the reset invocation with a nil check, nilling the field in the
    /// else branch. Used for embedded interface fields that may or may not
    /// carry a reset-capable value.
    ConditionalResetOrNil {
        /// Field path from the receiver.
        path: FieldPath,
    },
}

impl Action {
    /// The field path this action applies to.
    pub fn path(&self) -> &FieldPath {
        match self {
            Action::AssignZero { path, .. }
            | Action::InvokeReset { path }
            | Action::ConditionalResetOrNil { path } => path,
        }
    }
}

/// Per-composite walker over a resolver handle.
#[derive(Debug)]
pub struct Walker<'a, R: TypeResolver + ?Sized> {
    detector: CapabilityDetector<'a, R>,
}

impl<'a, R: TypeResolver + ?Sized> Walker<'a, R> {
    /// Create a walker over a resolver handle.
    pub fn new(resolver: &'a R) -> Self {
        Self {
            detector: CapabilityDetector::new(resolver),
        }
    }

    /// Walk a composite type and produce its ordered action sequence.
    ///
    /// `name` is the selected type the generated procedure belongs to; its
    /// domain governs unexported-field reachability for every recursion
    /// level, since the emitted code lives in that domain.
    pub fn walk(
        &self,
        name: &QualifiedName,
        composite: &CompositeSchema,
    ) -> Result<Vec<Action>, GenerateError> {
        let mut actions = Vec::new();
        self.walk_into(name, composite, &FieldPath::root(), &mut actions)?;
        Ok(actions)
    }

    fn walk_into(
        &self,
        owner: &QualifiedName,
        composite: &CompositeSchema,
        prefix: &FieldPath,
        out: &mut Vec<Action>,
    ) -> Result<(), GenerateError> {
        for field in &composite.fields {
            let path = prefix.child(&field.name);

            if !field.anonymous {
                trace!(field = %path, "assign zero");
                out.push(Action::AssignZero {
                    path,
                    ty: field.ty.clone(),
                    force_non_nil: field.directives.force_non_nil(),
                });
                continue;
            }

            match field.ty.underlying() {
                TypeSchema::Interface => {
                    if self.detector.has_reset_capability(&field.ty) {
                        trace!(field = %path, "embedded interface: conditional reset");
                        out.push(Action::ConditionalResetOrNil { path });
                    } else {
                        trace!(field = %path, "embedded interface: assign nil");
                        out.push(Action::AssignZero {
                            path,
                            ty: field.ty.clone(),
                            force_non_nil: false,
                        });
                    }
                }

                TypeSchema::Composite(embedded) => {
                    self.walk_embedded(owner, field, embedded, path, out)?;
                }

                other => {
                    return Err(GenerateError::UnsupportedAnonymousKind {
                        owner: owner.clone(),
                        field: field.name.clone(),
                        kind: other.kind_name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Decide how an embedded composite is reset: delegate to an existing
    /// capability, reassign the whole field, or flatten its own actions into
    /// the parent's sequence.
    fn walk_embedded(
        &self,
        owner: &QualifiedName,
        field: &FieldDescriptor,
        embedded: &CompositeSchema,
        path: FieldPath,
        out: &mut Vec<Action>,
    ) -> Result<(), GenerateError> {
        // An existing capability wins over recursion, so hand-written or
        // previously generated reset logic is reused rather than duplicated.
        if self.detector.has_reset_capability(&field.ty) {
            trace!(field = %path, "embedded composite: delegate to existing reset");
            out.push(Action::InvokeReset { path });
            return Ok(());
        }

        let foreign = match field.ty.name() {
            Some(name) => !self.detector.same_domain(&name.domain, &owner.domain),
            None => false,
        };
        if foreign && self.detector.has_unexported_field(embedded) {
            // Fields unexported in a foreign domain are not assignable from
            // here; the whole embedded value is reassigned instead.
            trace!(field = %path, "embedded composite: opaque whole-field assign");
            out.push(Action::AssignZero {
                path,
                ty: field.ty.clone(),
                force_non_nil: field.directives.force_non_nil(),
            });
            return Ok(());
        }

        trace!(field = %path, "embedded composite: flatten");
        self.walk_into(owner, embedded, &path, out)
    }
}
