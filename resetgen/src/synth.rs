//! Zero-value synthesis.
//!
//! Maps one type-kind to the strategy that constructs its zero value. The
//! dispatch is a closed match over the taxonomy; only `TypeParam` (the
//! stand-in for parameterized definitions) has no strategy and is rejected
//! at run time.
//!
//! | Type-kind | Strategy |
//! |-----------|----------|
//! | `Basic` | canonical zero literal (`0`, `""`, `0.0`, `0`, `false`) |
//! | `Composite` | construct-default reference to the type (`T{}`) |
//! | `Pointer` | nil; with `nonil`, a zero pointee behind a reference |
//! | `Slice` | nil; with `nonil`, a fresh length-zero slice |
//! | `Array` | zero array of the fixed length (`[N]T{}`) |
//! | `Map` | nil; with `nonil`, a fresh empty map |
//! | `Channel` | nil; with `nonil`, a fresh channel |
//! | `Function` | nil |
//! | `Interface` | nil |
//! | `Named` | resolve to underlying and recurse |

use serde::{Deserialize, Serialize};

use crate::error::SynthError;
use crate::model::{BasicKind, TypeSchema};

/// Canonical zero literal per basic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// `0`
    IntZero,
    /// `""`
    EmptyStr,
    /// `0.0`
    FloatZero,
    /// `0`
    ComplexZero,
    /// `false`
    False,
}

/// Value-construction strategy produced by the synthesizer.
///
/// Strategies reference the *declared* type of the field, so a named
/// composite prints as a construct-default reference to its name, never as a
/// per-field expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy")]
pub enum ValueExpr {
    /// A zero literal.
    Literal(Literal),

    /// The nil value.
    Nil,

    /// Construct-default instance of the type (`T{}`, `[N]T{}`).
    ZeroValueOf(TypeSchema),

    /// One zero instance of the pointee, behind a fresh reference.
    AllocZero {
        /// Declared pointee type.
        pointee: TypeSchema,
        /// Recursively synthesized zero of the pointee.
        zero: Box<ValueExpr>,
    },

    /// Freshly allocated length-zero slice of the declared type.
    MakeSlice(TypeSchema),

    /// Freshly allocated empty map of the declared type.
    MakeMap(TypeSchema),

    /// Freshly constructed channel of the declared type.
    MakeChannel(TypeSchema),
}

/// Synthesize the zero-value construction strategy for a type.
///
/// `force_non_nil` comes from the field's own `nonil` directive and is never
/// propagated into nested synthesis calls.
pub fn synthesize(ty: &TypeSchema, force_non_nil: bool) -> Result<ValueExpr, SynthError> {
    synthesize_as(ty, ty, force_non_nil)
}

/// Dispatch on `current` (walking through `Named`) while keeping `declared`
/// for strategy payloads.
fn synthesize_as(
    declared: &TypeSchema,
    current: &TypeSchema,
    force_non_nil: bool,
) -> Result<ValueExpr, SynthError> {
    match current {
        TypeSchema::Named { underlying, .. } => synthesize_as(declared, underlying, force_non_nil),

        TypeSchema::Basic(kind) => Ok(ValueExpr::Literal(match kind {
            BasicKind::Int => Literal::IntZero,
            BasicKind::String => Literal::EmptyStr,
            BasicKind::Float => Literal::FloatZero,
            BasicKind::Complex => Literal::ComplexZero,
            BasicKind::Bool => Literal::False,
        })),

        TypeSchema::Composite(_) => Ok(ValueExpr::ZeroValueOf(declared.clone())),

        TypeSchema::Pointer(elem) => {
            if force_non_nil {
                let zero = synthesize(elem, false)?;
                Ok(ValueExpr::AllocZero {
                    pointee: (**elem).clone(),
                    zero: Box::new(zero),
                })
            } else {
                Ok(ValueExpr::Nil)
            }
        }

        TypeSchema::Slice(_) => {
            if force_non_nil {
                Ok(ValueExpr::MakeSlice(declared.clone()))
            } else {
                Ok(ValueExpr::Nil)
            }
        }

        TypeSchema::Array { .. } => Ok(ValueExpr::ZeroValueOf(declared.clone())),

        TypeSchema::Map { .. } => {
            if force_non_nil {
                Ok(ValueExpr::MakeMap(declared.clone()))
            } else {
                Ok(ValueExpr::Nil)
            }
        }

        TypeSchema::Channel(_) => {
            if force_non_nil {
                Ok(ValueExpr::MakeChannel(declared.clone()))
            } else {
                Ok(ValueExpr::Nil)
            }
        }

        TypeSchema::Function { .. } | TypeSchema::Interface => Ok(ValueExpr::Nil),

        TypeSchema::TypeParam { name } => Err(SynthError::UnsupportedType(name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompositeSchema, QualifiedName};

    fn int() -> TypeSchema {
        TypeSchema::Basic(BasicKind::Int)
    }

    #[test]
    fn test_basic_kinds_yield_canonical_zeros() {
        let cases = [
            (BasicKind::Int, Literal::IntZero),
            (BasicKind::String, Literal::EmptyStr),
            (BasicKind::Float, Literal::FloatZero),
            (BasicKind::Complex, Literal::ComplexZero),
            (BasicKind::Bool, Literal::False),
        ];
        for (kind, literal) in cases {
            let got = synthesize(&TypeSchema::Basic(kind), false).unwrap();
            assert_eq!(got, ValueExpr::Literal(literal));
        }
    }

    #[test]
    fn test_pointer_nil_and_nonil() {
        let composite = TypeSchema::named(
            QualifiedName::new("models", "Inner"),
            TypeSchema::Composite(CompositeSchema::default()),
        );
        let ptr = TypeSchema::pointer(composite.clone());

        assert_eq!(synthesize(&ptr, false).unwrap(), ValueExpr::Nil);

        let got = synthesize(&ptr, true).unwrap();
        assert_eq!(
            got,
            ValueExpr::AllocZero {
                pointee: composite.clone(),
                zero: Box::new(ValueExpr::ZeroValueOf(composite)),
            }
        );
    }

    #[test]
    fn test_slice_nil_and_nonil() {
        let slice = TypeSchema::slice(int());
        assert_eq!(synthesize(&slice, false).unwrap(), ValueExpr::Nil);
        assert_eq!(
            synthesize(&slice, true).unwrap(),
            ValueExpr::MakeSlice(slice.clone())
        );
    }

    #[test]
    fn test_map_nil_and_nonil() {
        let map = TypeSchema::map(TypeSchema::Basic(BasicKind::String), int());
        assert_eq!(synthesize(&map, false).unwrap(), ValueExpr::Nil);
        assert_eq!(synthesize(&map, true).unwrap(), ValueExpr::MakeMap(map.clone()));
    }

    #[test]
    fn test_channel_nil_and_nonil() {
        let ch = TypeSchema::channel(int());
        assert_eq!(synthesize(&ch, false).unwrap(), ValueExpr::Nil);
        assert_eq!(
            synthesize(&ch, true).unwrap(),
            ValueExpr::MakeChannel(ch.clone())
        );
    }

    #[test]
    fn test_fixed_array_is_zero_value_regardless_of_nonil() {
        let arr = TypeSchema::array(3, int());
        assert_eq!(
            synthesize(&arr, false).unwrap(),
            ValueExpr::ZeroValueOf(arr.clone())
        );
        assert_eq!(
            synthesize(&arr, true).unwrap(),
            ValueExpr::ZeroValueOf(arr.clone())
        );
    }

    #[test]
    fn test_function_and_interface_are_nil() {
        let f = TypeSchema::Function {
            signature: "func()".to_string(),
        };
        assert_eq!(synthesize(&f, false).unwrap(), ValueExpr::Nil);
        assert_eq!(synthesize(&TypeSchema::Interface, false).unwrap(), ValueExpr::Nil);
    }

    #[test]
    fn test_named_composite_keeps_declared_name() {
        let named = TypeSchema::named(
            QualifiedName::new("models", "Inner"),
            TypeSchema::Composite(CompositeSchema::default()),
        );
        let got = synthesize(&named, false).unwrap();
        assert_eq!(got, ValueExpr::ZeroValueOf(named));
    }

    #[test]
    fn test_named_alias_of_slice_dispatches_on_underlying() {
        let alias = TypeSchema::named(QualifiedName::new("models", "Items"), TypeSchema::slice(int()));
        assert_eq!(synthesize(&alias, false).unwrap(), ValueExpr::Nil);
        assert_eq!(
            synthesize(&alias, true).unwrap(),
            ValueExpr::MakeSlice(alias.clone())
        );
    }

    #[test]
    fn test_nonil_is_not_propagated_into_pointee_synthesis() {
        // Pointer to slice with nonil: the pointee slice is synthesized
        // without the directive and stays nil.
        let ptr = TypeSchema::pointer(TypeSchema::slice(int()));
        let got = synthesize(&ptr, true).unwrap();
        assert_eq!(
            got,
            ValueExpr::AllocZero {
                pointee: TypeSchema::slice(int()),
                zero: Box::new(ValueExpr::Nil),
            }
        );
    }

    #[test]
    fn test_type_param_is_unsupported() {
        let err = synthesize(&TypeSchema::TypeParam { name: "T".into() }, false).unwrap_err();
        assert_eq!(err, SynthError::UnsupportedType("T".to_string()));
    }
}
