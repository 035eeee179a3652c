//! Semantic checker - rule resolution and color validation
//!
//! One depth-first, pre-order pass over a [`Scene`]. Violations never abort
//! the pass: each one is recorded as a [`Diagnostic`] and traversal goes on,
//! so the caller always receives every problem in the order it was found.

use crate::frontend::ast::*;
use super::diagnostic::Diagnostic;
use super::palette::Palette;
use super::scope::Scope;

/// Semantic checker for shape scenes
pub struct SemanticChecker {
    palette: Palette,
    diagnostics: Vec<Diagnostic>,
}

impl SemanticChecker {
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            diagnostics: Vec::new(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Check a scene from a fresh, parentless scope
    pub fn check(&mut self, scene: &Scene) -> Vec<Diagnostic> {
        self.check_with_parent(scene, None)
    }

    /// Check a scene whose scope falls back to `parent` for lookups
    ///
    /// Every draw of the scene shares one scope, so rules defined by an
    /// earlier shape are visible to later shapes.
    pub fn check_with_parent<'p>(
        &mut self,
        scene: &Scene,
        parent: Option<&'p Scope<'p>>,
    ) -> Vec<Diagnostic> {
        self.diagnostics.clear();

        let mut scope = match parent {
            Some(parent) => Scope::with_parent(parent),
            None => Scope::new(),
        };
        for draw in &scene.draws {
            self.check_draw(draw, &mut scope);
        }

        std::mem::take(&mut self.diagnostics)
    }

    fn check_draw(&mut self, draw: &Draw, scope: &mut Scope<'_>) {
        self.check_shape(&draw.shape, scope);
        self.check_expr(&draw.x);
        self.check_expr(&draw.y);
    }

    fn check_shape(&mut self, shape: &Shape, scope: &mut Scope<'_>) {
        self.check_pencil(shape);
        for rule in &shape.rules {
            self.check_rule(rule, scope);
        }
        self.check_axiom(&shape.axiom, scope);
    }

    fn check_pencil(&mut self, shape: &Shape) {
        if !self.palette.accepts(&shape.pencil) {
            self.diagnostics
                .push(Diagnostic::invalid_color(&shape.pencil, shape.pencil_span));
        }
    }

    fn check_rule(&mut self, rule: &Rule, scope: &mut Scope<'_>) {
        // Defined before the body so self-recursion resolves
        scope.define_rule(&rule.name, &rule.param);
        for instruction in &rule.instructions {
            self.check_instruction(instruction, scope);
        }
    }

    fn check_axiom(&mut self, axiom: &Axiom, scope: &mut Scope<'_>) {
        for instruction in &axiom.instructions {
            self.check_instruction(instruction, scope);
        }
    }

    fn check_instruction(&mut self, instruction: &Instruction, scope: &mut Scope<'_>) {
        match &instruction.kind {
            InstructionKind::CallRule { id, argument } => {
                if !scope.is_rule_defined(id) {
                    self.diagnostics
                        .push(Diagnostic::undefined_rule(id, instruction.span));
                }
                // TODO: require an integer-valued argument
                self.check_expr(argument);
            }
            InstructionKind::Left(expr)
            | InstructionKind::Right(expr)
            | InstructionKind::Line(expr) => {
                self.check_expr(expr);
            }
            InstructionKind::Push | InstructionKind::Pop => {}
            InstructionKind::Jump { x, y } => {
                self.check_expr(x);
                self.check_expr(y);
            }
            InstructionKind::Assign { id, value } => {
                // The binding is not visible to its own right-hand side
                self.check_expr(value);
                scope.define_var(id, value.clone());
            }
        }
    }

    fn check_expr(&self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Value(_) | ExprKind::Nill | ExprKind::Context => {}
        }
    }
}

impl Default for SemanticChecker {
    fn default() -> Self {
        Self::new()
    }
}
