//! Operator inversion catalog
//!
//! The catalog knows ten operators in two families and maps each one to a
//! single inverse inside its own family. Anything else `syn` can put in a
//! binary expression (`%`, `&&`, `<<`, `+=`, ...) is outside the catalog.

use std::fmt;

use quote::ToTokens;
use serde::Deserialize;
use syn::BinOp;

use crate::error::{MutationError, Result};

/// Operator family; an operator is only ever inverted within its family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorFamily {
    Arithmetic,
    Relational,
}

/// An invertible operator kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl Operator {
    /// Every operator in the catalog
    pub const ALL: [Operator; 10] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Equal,
        Operator::NotEqual,
        Operator::LessThan,
        Operator::LessOrEqual,
        Operator::GreaterThan,
        Operator::GreaterOrEqual,
    ];

    /// The designated opposite of this operator
    pub fn inverse(self) -> Operator {
        match self {
            Operator::Add => Operator::Subtract,
            Operator::Subtract => Operator::Add,
            Operator::Multiply => Operator::Divide,
            Operator::Divide => Operator::Multiply,
            Operator::Equal => Operator::NotEqual,
            Operator::NotEqual => Operator::Equal,
            Operator::LessThan => Operator::GreaterOrEqual,
            Operator::LessOrEqual => Operator::GreaterThan,
            Operator::GreaterThan => Operator::LessOrEqual,
            Operator::GreaterOrEqual => Operator::LessThan,
        }
    }

    pub fn family(self) -> OperatorFamily {
        match self {
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
                OperatorFamily::Arithmetic
            }
            _ => OperatorFamily::Relational,
        }
    }

    /// Rust source symbol of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterOrEqual => ">=",
        }
    }

    /// Look up a `syn` operator in the catalog
    pub fn from_bin_op(op: &BinOp) -> Option<Operator> {
        let operator = match op {
            BinOp::Add(_) => Operator::Add,
            BinOp::Sub(_) => Operator::Subtract,
            BinOp::Mul(_) => Operator::Multiply,
            BinOp::Div(_) => Operator::Divide,
            BinOp::Eq(_) => Operator::Equal,
            BinOp::Ne(_) => Operator::NotEqual,
            BinOp::Lt(_) => Operator::LessThan,
            BinOp::Le(_) => Operator::LessOrEqual,
            BinOp::Gt(_) => Operator::GreaterThan,
            BinOp::Ge(_) => Operator::GreaterOrEqual,
            _ => return None,
        };
        Some(operator)
    }

    /// Build a fresh `syn` operator token for this operator
    pub fn to_bin_op(self) -> BinOp {
        match self {
            Operator::Add => BinOp::Add(Default::default()),
            Operator::Subtract => BinOp::Sub(Default::default()),
            Operator::Multiply => BinOp::Mul(Default::default()),
            Operator::Divide => BinOp::Div(Default::default()),
            Operator::Equal => BinOp::Eq(Default::default()),
            Operator::NotEqual => BinOp::Ne(Default::default()),
            Operator::LessThan => BinOp::Lt(Default::default()),
            Operator::LessOrEqual => BinOp::Le(Default::default()),
            Operator::GreaterThan => BinOp::Gt(Default::default()),
            Operator::GreaterOrEqual => BinOp::Ge(Default::default()),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Invert a `syn` operator, failing for anything outside the catalog
pub fn invert_bin_op(op: &BinOp) -> Result<BinOp> {
    Operator::from_bin_op(op)
        .map(|operator| operator.inverse().to_bin_op())
        .ok_or_else(|| MutationError::UnsupportedOperator {
            operator: op.to_token_stream().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn parse_op(expr: &str) -> BinOp {
        match syn::parse_str::<syn::Expr>(expr).unwrap() {
            syn::Expr::Binary(binary) => binary.op,
            other => panic!("not a binary expression: {:?}", other),
        }
    }

    #[test]
    fn test_inversion_table() {
        let expected = [
            (Operator::Add, Operator::Subtract),
            (Operator::Subtract, Operator::Add),
            (Operator::Multiply, Operator::Divide),
            (Operator::Divide, Operator::Multiply),
            (Operator::Equal, Operator::NotEqual),
            (Operator::NotEqual, Operator::Equal),
            (Operator::LessThan, Operator::GreaterOrEqual),
            (Operator::LessOrEqual, Operator::GreaterThan),
            (Operator::GreaterThan, Operator::LessOrEqual),
            (Operator::GreaterOrEqual, Operator::LessThan),
        ];
        for (operator, inverse) in expected {
            assert_eq!(operator.inverse(), inverse, "inverse of {}", operator);
        }
    }

    #[test]
    fn test_syn_mapping() {
        for operator in Operator::ALL {
            let op = parse_op(&format!("a {} b", operator.symbol()));
            assert_eq!(Operator::from_bin_op(&op), Some(operator));
            assert_eq!(Operator::from_bin_op(&operator.to_bin_op()), Some(operator));
        }
    }

    #[test]
    fn test_invert_bin_op() {
        let inverted = invert_bin_op(&parse_op("a < b")).unwrap();
        assert_eq!(Operator::from_bin_op(&inverted), Some(Operator::GreaterOrEqual));
    }

    #[test]
    fn test_unsupported_operators() {
        for expr in ["a % b", "a && b", "a << b", "a ^ b"] {
            let result = invert_bin_op(&parse_op(expr));
            assert!(
                matches!(result, Err(MutationError::UnsupportedOperator { .. })),
                "{} should be unsupported",
                expr
            );
        }
    }

    #[test]
    fn test_unsupported_operator_is_named() {
        let err = invert_bin_op(&parse_op("a % b")).unwrap_err();
        assert_eq!(err.to_string(), "Operator '%' has no defined inverse");
    }

    proptest! {
        #[test]
        fn inversion_is_an_involution(operator in proptest::sample::select(Operator::ALL.to_vec())) {
            prop_assert_eq!(operator.inverse().inverse(), operator);
        }

        #[test]
        fn inversion_stays_in_family(operator in proptest::sample::select(Operator::ALL.to_vec())) {
            prop_assert_ne!(operator.inverse(), operator);
            prop_assert_eq!(operator.inverse().family(), operator.family());
        }
    }
}
