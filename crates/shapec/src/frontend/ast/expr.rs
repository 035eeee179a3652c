//! Expression AST nodes

use crate::common::Span;
use std::fmt;

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn value(literal: Literal, span: Span) -> Self {
        Self::new(ExprKind::Value(literal), span)
    }

    pub fn nill(span: Span) -> Self {
        Self::new(ExprKind::Nill, span)
    }

    pub fn is_nill(&self) -> bool {
        matches!(self.kind, ExprKind::Nill)
    }
}

/// Expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Literal leaf: 10, 2.5, "text", size
    Value(Literal),

    /// Empty slot: `line();`
    Nill,

    /// Placeholder for nodes that carry nothing the checker inspects
    Context,
}

/// Scalar payload of a `Value`
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Ident(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Float(v) => write!(f, "{}", v),
            Literal::Str(s) => write!(f, "\"{}\"", s),
            Literal::Ident(name) => write!(f, "{}", name),
        }
    }
}
