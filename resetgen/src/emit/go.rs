//! Go text backend.
//!
//! Renders lowered statements as Go source against a receiver identifier.
//! Type references are printed qualified unless they live in the domain the
//! output belongs to; value strategies render to the matching Go
//! constructor (`T{}`, `&T{}`, `new(T)`, `make(...)`, literals, `nil`).

use crate::error::EmissionError;
use crate::model::{DomainId, TypeSchema};
use crate::synth::{Literal, ValueExpr};
use crate::walk::FieldPath;

use super::{Guard, StatementBuilder, Stmt};

/// Indentation style for emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// Tabs (the Go convention).
    #[default]
    Tabs,

    /// Two spaces.
    Spaces2,

    /// Four spaces.
    Spaces4,
}

impl IndentStyle {
    /// One indentation unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndentStyle::Tabs => "\t",
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
        }
    }
}

/// Line ending style for emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style line endings.
    #[default]
    Lf,

    /// Windows-style line endings.
    CrLf,
}

impl LineEnding {
    /// The line terminator string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Backend configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitConfig {
    /// Indentation style.
    pub indent: IndentStyle,

    /// Line ending style.
    pub line_ending: LineEnding,
}

impl EmitConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Set the line ending style.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Statement builder producing Go source text.
#[derive(Debug, Clone)]
pub struct GoWriter {
    receiver: String,
    domain: DomainId,
    config: EmitConfig,
    buf: String,
    depth: usize,
}

impl GoWriter {
    /// Create a writer for a procedure body.
    ///
    /// `receiver` is the receiver identifier; `domain` is the domain the
    /// output belongs to, so types declared there print unqualified.
    pub fn new(receiver: impl Into<String>, domain: DomainId, config: EmitConfig) -> Self {
        Self {
            receiver: receiver.into(),
            domain,
            config,
            buf: String::new(),
            depth: 0,
        }
    }

    /// Open the reset procedure for a type: `func (x *T) Reset() {`.
    pub fn begin_procedure(&mut self, type_ident: &str, operation: &str) {
        let line = format!(
            "func ({} *{}) {}() {{",
            self.receiver, type_ident, operation
        );
        self.line(&line);
        self.depth += 1;
    }

    /// Close the procedure.
    pub fn end_procedure(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Consume the writer and return the rendered text.
    pub fn finish(self) -> String {
        self.buf
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(self.config.indent.as_str());
        }
        self.buf.push_str(text);
        self.buf.push_str(self.config.line_ending.as_str());
    }

    fn path_expr(&self, path: &FieldPath) -> String {
        let mut expr = self.receiver.clone();
        for segment in path.segments() {
            expr.push('.');
            expr.push_str(segment);
        }
        expr
    }

    /// Print a Go type reference.
    ///
    /// Inline composite types and type parameters have no printable
    /// reference and are backend errors.
    pub fn type_ref(&self, ty: &TypeSchema) -> Result<String, EmissionError> {
        match ty {
            TypeSchema::Basic(kind) => Ok(kind.type_name().to_string()),
            TypeSchema::Named { name, .. } => {
                if name.domain == self.domain || name.domain.is_empty() {
                    Ok(name.ident.clone())
                } else {
                    Ok(format!("{}.{}", name.domain.base_name(), name.ident))
                }
            }
            TypeSchema::Pointer(elem) => Ok(format!("*{}", self.type_ref(elem)?)),
            TypeSchema::Slice(elem) => Ok(format!("[]{}", self.type_ref(elem)?)),
            TypeSchema::Array { len, elem } => Ok(format!("[{}]{}", len, self.type_ref(elem)?)),
            TypeSchema::Map { key, elem } => Ok(format!(
                "map[{}]{}",
                self.type_ref(key)?,
                self.type_ref(elem)?
            )),
            TypeSchema::Channel(elem) => Ok(format!("chan {}", self.type_ref(elem)?)),
            TypeSchema::Function { signature } => Ok(signature.clone()),
            TypeSchema::Interface => Ok("interface{}".to_string()),
            TypeSchema::Composite(_) => Err(EmissionError::Backend(
                "inline composite types have no printable reference".to_string(),
            )),
            TypeSchema::TypeParam { name } => Err(EmissionError::Backend(format!(
                "type parameter `{}` has no printable reference",
                name
            ))),
        }
    }

    /// Render a value-construction strategy as a Go expression.
    pub fn value_expr(&self, value: &ValueExpr) -> Result<String, EmissionError> {
        match value {
            ValueExpr::Literal(literal) => Ok(match literal {
                Literal::IntZero => "0",
                Literal::EmptyStr => "\"\"",
                Literal::FloatZero => "0.0",
                Literal::ComplexZero => "0",
                Literal::False => "false",
            }
            .to_string()),
            ValueExpr::Nil => Ok("nil".to_string()),
            ValueExpr::ZeroValueOf(ty) => Ok(format!("{}{{}}", self.type_ref(ty)?)),
            ValueExpr::AllocZero { pointee, zero } => match zero.as_ref() {
                // A construct-default pointee reads best as a composite
                // literal behind a reference.
                ValueExpr::ZeroValueOf(ty) => Ok(format!("&{}{{}}", self.type_ref(ty)?)),
                _ => Ok(format!("new({})", self.type_ref(pointee)?)),
            },
            ValueExpr::MakeSlice(ty) => Ok(format!("make({}, 0)", self.type_ref(ty)?)),
            ValueExpr::MakeMap(ty) => Ok(format!("make({})", self.type_ref(ty)?)),
            ValueExpr::MakeChannel(ty) => Ok(format!("make({})", self.type_ref(ty)?)),
        }
    }

    fn emit_stmt(&mut self, stmt: &Stmt) -> Result<(), EmissionError> {
        match stmt {
            Stmt::Assign { path, value } => self.emit_assignment(path, value),
            Stmt::Call { path, operation } => self.emit_call(path, operation),
        }
    }
}

impl StatementBuilder for GoWriter {
    fn emit_assignment(
        &mut self,
        path: &FieldPath,
        value: &ValueExpr,
    ) -> Result<(), EmissionError> {
        let rendered = self.value_expr(value)?;
        let line = format!("{} = {}", self.path_expr(path), rendered);
        self.line(&line);
        Ok(())
    }

    fn emit_call(&mut self, path: &FieldPath, operation: &str) -> Result<(), EmissionError> {
        let line = format!("{}.{}()", self.path_expr(path), operation);
        self.line(&line);
        Ok(())
    }

    fn emit_conditional(
        &mut self,
        guard: &Guard,
        then_stmts: &[Stmt],
        else_stmts: &[Stmt],
    ) -> Result<(), EmissionError> {
        let Guard::NotNil(path) = guard;
        let line = format!("if {} != nil {{", self.path_expr(path));
        self.line(&line);
        self.depth += 1;
        for stmt in then_stmts {
            self.emit_stmt(stmt)?;
        }
        self.depth -= 1;
        if else_stmts.is_empty() {
            self.line("}");
        } else {
            self.line("} else {");
            self.depth += 1;
            for stmt in else_stmts {
                self.emit_stmt(stmt)?;
            }
            self.depth -= 1;
            self.line("}");
        }
        Ok(())
    }
}
