//! Code emission contract.
//!
//! The core never produces source text directly: the walker's actions are
//! lowered to structured statements and issued against the
//! [`StatementBuilder`] trait. [`go::GoWriter`] is the reference backend.

pub mod go;

use serde::{Deserialize, Serialize};

use crate::error::EmissionError;
use crate::synth::ValueExpr;
use crate::walk::FieldPath;

/// Condition guarding a conditional emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Guard {
    /// The field at the path is not nil.
    NotNil(FieldPath),
}

/// A lowered statement, used inside conditional branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stmt")]
pub enum Stmt {
    /// Assign a synthesized value to the field at the path.
    Assign {
        /// Field path from the receiver.
        path: FieldPath,
        /// Value to assign.
        value: ValueExpr,
    },

    /// Invoke a zero-argument operation on the field at the path.
    Call {
        /// Field path from the receiver.
        path: FieldPath,
        /// Operation name.
        operation: String,
    },
}

/// Statement-builder abstraction the core emits against.
pub trait StatementBuilder {
    /// Emit an assignment of a synthesized value to a field.
    fn emit_assignment(&mut self, path: &FieldPath, value: &ValueExpr)
        -> Result<(), EmissionError>;

    /// Emit a zero-argument operation call on a field.
    fn emit_call(&mut self, path: &FieldPath, operation: &str) -> Result<(), EmissionError>;

    /// Emit a guarded conditional with then/else statement lists.
    fn emit_conditional(
        &mut self,
        guard: &Guard,
        then_stmts: &[Stmt],
        else_stmts: &[Stmt],
    ) -> Result<(), EmissionError>;
}
