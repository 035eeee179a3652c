//! Indented tree rendering of a scene, for `--dump-ast`

use std::fmt::Write;

use crate::frontend::ast::*;

const INDENT: &str = "|  ";

/// Read-only printer producing one line per node
pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    /// Render `scene` as an indented tree
    pub fn print(scene: &Scene) -> String {
        let mut printer = Self { out: String::new() };
        printer.scene(scene);
        printer.out
    }

    fn line(&mut self, depth: usize, text: impl std::fmt::Display) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        let _ = writeln!(self.out, "{}", text);
    }

    fn scene(&mut self, scene: &Scene) {
        self.line(0, "Scene:");
        for draw in &scene.draws {
            self.draw(draw, 1);
        }
    }

    fn draw(&mut self, draw: &Draw, depth: usize) {
        self.line(depth, "Draw:");
        self.shape(&draw.shape, depth + 1);
        self.expr(&draw.x, depth + 1, Some("X"));
        self.expr(&draw.y, depth + 1, Some("Y"));
    }

    fn shape(&mut self, shape: &Shape, depth: usize) {
        self.line(depth, "Shape:");
        self.line(depth + 1, format_args!("name: {}", shape.name));
        self.line(depth + 1, format_args!("pencil: {}", shape.pencil));
        for rule in &shape.rules {
            self.line(depth + 1, "Rule:");
            self.line(depth + 2, format_args!("name: {}", rule.name));
            self.line(depth + 2, format_args!("param: {}", rule.param));
            self.instructions(&rule.instructions, depth + 2);
        }
        self.line(depth + 1, "Axiom:");
        self.instructions(&shape.axiom.instructions, depth + 2);
    }

    fn instructions(&mut self, instructions: &[Instruction], depth: usize) {
        for instruction in instructions {
            self.instruction(instruction, depth);
        }
    }

    fn instruction(&mut self, instruction: &Instruction, depth: usize) {
        match &instruction.kind {
            InstructionKind::CallRule { id, argument } => {
                self.line(depth, format_args!("CallRule: {}", id));
                self.expr(argument, depth + 1, None);
            }
            InstructionKind::Left(expr) => {
                self.line(depth, "Left:");
                self.expr(expr, depth + 1, None);
            }
            InstructionKind::Right(expr) => {
                self.line(depth, "Right:");
                self.expr(expr, depth + 1, None);
            }
            InstructionKind::Line(expr) => {
                self.line(depth, "Line:");
                self.expr(expr, depth + 1, None);
            }
            InstructionKind::Push => self.line(depth, "Push"),
            InstructionKind::Pop => self.line(depth, "Pop"),
            InstructionKind::Jump { x, y } => {
                self.line(depth, "Jump:");
                self.expr(x, depth + 1, Some("X"));
                self.expr(y, depth + 1, Some("Y"));
            }
            InstructionKind::Assign { id, value } => {
                self.line(depth, format_args!("Assign: {}", id));
                self.expr(value, depth + 1, None);
            }
        }
    }

    fn expr(&mut self, expr: &Expr, depth: usize, header: Option<&str>) {
        match (&expr.kind, header) {
            (ExprKind::Value(literal), Some(header)) => {
                self.line(depth, format_args!("{}: {}", header, literal));
            }
            (ExprKind::Value(literal), None) => {
                self.line(depth, format_args!("value: {}", literal));
            }
            (ExprKind::Nill, Some(header)) => self.line(depth, format_args!("{}: nill", header)),
            (ExprKind::Nill, None) => self.line(depth, "nill"),
            (ExprKind::Context, Some(header)) => {
                self.line(depth, format_args!("{}: ContextNode", header));
            }
            (ExprKind::Context, None) => self.line(depth, "ContextNode"),
        }
    }
}
