//! Shape-level AST nodes

use super::{Expr, Instruction};
use crate::common::Span;

/// Draw statement: a shape placed at a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    pub shape: Shape,
    pub x: Expr,
    pub y: Expr,
    pub span: Span,
}

impl Draw {
    pub fn new(shape: Shape, x: Expr, y: Expr, span: Span) -> Self {
        Self { shape, x, y, span }
    }
}

/// Shape definition
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: String,
    pub pencil: String,
    /// Location of the pencil color, used when reporting it
    pub pencil_span: Span,
    pub rules: Vec<Rule>,
    pub axiom: Axiom,
    pub span: Span,
}

impl Shape {
    pub fn new(
        name: impl Into<String>,
        pencil: impl Into<String>,
        pencil_span: Span,
        rules: Vec<Rule>,
        axiom: Axiom,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            pencil: pencil.into(),
            pencil_span,
            rules,
            axiom,
            span,
        }
    }
}

/// Named production rule with a single parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: String,
    pub param: String,
    pub instructions: Vec<Instruction>,
    pub span: Span,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        param: impl Into<String>,
        instructions: Vec<Instruction>,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            param: param.into(),
            instructions,
            span,
        }
    }
}

/// Initial instruction sequence of a shape
#[derive(Debug, Clone, PartialEq)]
pub struct Axiom {
    pub instructions: Vec<Instruction>,
    pub span: Span,
}

impl Axiom {
    pub fn new(instructions: Vec<Instruction>, span: Span) -> Self {
        Self { instructions, span }
    }
}
