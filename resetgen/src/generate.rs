//! Generation run pipeline.
//!
//! Drives one run end to end: resolve every selected type, walk it, lower
//! the action sequence and render one procedure per type into an
//! independent buffer, then serialize the buffers in selection order behind
//! a single file preamble. The first error aborts the whole run and nothing
//! is produced; a run never emits a mix of valid and broken procedures.

use tracing::debug;

use crate::detect::RESET_OPERATION;
use crate::emit::go::{EmitConfig, GoWriter};
use crate::emit::{Guard, StatementBuilder, Stmt};
use crate::error::{GenerateError, SynthError};
use crate::model::{DomainId, QualifiedName, TypeSchema};
use crate::resolver::TypeResolver;
use crate::synth::{synthesize, ValueExpr};
use crate::walk::{Action, Walker};

/// Header comment marking emitted files as generated.
pub const GENERATED_HEADER: &str = "// Code generated by resetgen. DO NOT EDIT.";

/// Reset-procedure generator for one output domain.
#[derive(Debug)]
pub struct Generator<'a, R: TypeResolver + ?Sized> {
    resolver: &'a R,
    domain: DomainId,
    config: EmitConfig,
}

impl<'a, R: TypeResolver + ?Sized> Generator<'a, R> {
    /// Create a generator emitting into the given domain.
    pub fn new(resolver: &'a R, domain: DomainId) -> Self {
        Self {
            resolver,
            domain,
            config: EmitConfig::default(),
        }
    }

    /// Override the emission configuration.
    pub fn with_config(mut self, config: EmitConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate one source file with a reset procedure per selected type,
    /// in selection order.
    pub fn generate(&self, selection: &[QualifiedName]) -> Result<String, GenerateError> {
        debug!(domain = %self.domain, types = selection.len(), "starting generation run");

        let walker = Walker::new(self.resolver);
        let mut bodies = Vec::with_capacity(selection.len());
        for name in selection {
            bodies.push(self.generate_one(&walker, name)?);
        }

        let eol = self.config.line_ending.as_str();
        let mut out = String::new();
        out.push_str(GENERATED_HEADER);
        out.push_str(eol);
        out.push_str(&format!("package {}", self.package_clause()));
        out.push_str(eol);
        for body in &bodies {
            out.push_str(eol);
            out.push_str(body);
        }

        debug!(domain = %self.domain, "generation run complete");
        Ok(out)
    }

    fn package_clause(&self) -> &str {
        let base = self.domain.base_name();
        if base.is_empty() {
            "main"
        } else {
            base
        }
    }

    /// Generate one procedure into its own buffer.
    fn generate_one(&self, walker: &Walker<'a, R>, name: &QualifiedName) -> Result<String, GenerateError> {
        let schema = self.resolver.lookup(name)?;
        let composite = match schema.underlying() {
            TypeSchema::Composite(composite) => composite,
            _ => {
                return Err(GenerateError::NotAComposite { name: name.clone() });
            }
        };

        let actions = walker.walk(name, composite)?;
        debug!(r#type = %name, actions = actions.len(), "walked composite");

        let mut writer = GoWriter::new(
            receiver_ident(&name.ident),
            self.domain.clone(),
            self.config.clone(),
        );
        writer.begin_procedure(&name.ident, RESET_OPERATION);
        for action in &actions {
            self.emit_action(name, action, &mut writer)?;
        }
        writer.end_procedure();
        Ok(writer.finish())
    }

    /// Lower one action and issue it against the statement builder.
    fn emit_action<B: StatementBuilder + ?Sized>(
        &self,
        owner: &QualifiedName,
        action: &Action,
        builder: &mut B,
    ) -> Result<(), GenerateError> {
        match action {
            Action::AssignZero {
                path,
                ty,
                force_non_nil,
            } => {
                let value = synthesize(ty, *force_non_nil).map_err(|err| match err {
                    SynthError::UnsupportedType(type_name) => GenerateError::UnsupportedType {
                        owner: owner.clone(),
                        field: path.to_string(),
                        type_name,
                    },
                })?;
                builder.emit_assignment(path, &value)?;
            }

            Action::InvokeReset { path } => {
                builder.emit_call(path, RESET_OPERATION)?;
            }

            Action::ConditionalResetOrNil { path } => {
                builder.emit_conditional(
                    &Guard::NotNil(path.clone()),
                    &[Stmt::Call {
                        path: path.clone(),
                        operation: RESET_OPERATION.to_string(),
                    }],
                    &[Stmt::Assign {
                        path: path.clone(),
                        value: ValueExpr::Nil,
                    }],
                )?;
            }
        }
        Ok(())
    }
}

/// Receiver identifier for a type: the first letter of the identifier,
/// lowercased.
fn receiver_ident(type_ident: &str) -> String {
    type_ident
        .chars()
        .next()
        .map(|c| c.to_lowercase().to_string())
        .unwrap_or_else(|| "x".to_string())
}
