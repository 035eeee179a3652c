//! Turtle instruction AST nodes

use super::Expr;
use crate::common::Span;

/// Instruction node, shared by rule bodies and axioms
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub span: Span,
}

impl Instruction {
    pub fn new(kind: InstructionKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Instruction kinds
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionKind {
    /// Rule invocation: F(n);
    CallRule { id: String, argument: Expr },

    /// Turn left: left(angle);
    Left(Expr),

    /// Turn right: right(angle);
    Right(Expr),

    /// Draw a segment: line(length);
    Line(Expr),

    /// Save turtle state: push;
    Push,

    /// Restore turtle state: pop;
    Pop,

    /// Move without drawing: jump(x, y);
    Jump { x: Expr, y: Expr },

    /// Variable binding: size = 4;
    Assign { id: String, value: Expr },
}
