//! Recursive descent parser for shape sources

use std::collections::HashMap;

use crate::common::{CompileError, CompileResult, Span};
use crate::frontend::ast::*;
use crate::frontend::lexer::{Lexer, Token, TokenKind};

/// Draw statement whose shape has not been looked up yet
struct PendingDraw {
    shape: String,
    shape_span: Span,
    x: Expr,
    y: Expr,
    span: Span,
}

/// Recursive descent parser for shape sources
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source
    pub fn new(source: &'a str) -> CompileResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse a complete scene
    ///
    /// Shapes are definitions; every draw statement gets its own copy of the
    /// shape it names, wherever in the file that shape is defined.
    pub fn parse(&mut self) -> CompileResult<Scene> {
        let mut shapes: HashMap<String, Shape> = HashMap::new();
        let mut pending = Vec::new();

        while !self.at_end() {
            match self.current.kind {
                TokenKind::Shape => {
                    let shape = self.parse_shape()?;
                    if shapes.contains_key(&shape.name) {
                        return Err(CompileError::parser(
                            format!("shape '{}' is already defined", shape.name),
                            shape.span,
                        ));
                    }
                    shapes.insert(shape.name.clone(), shape);
                }
                TokenKind::Draw => pending.push(self.parse_draw()?),
                _ => {
                    return Err(CompileError::parser(
                        format!("expected 'shape' or 'draw', found {}", self.current.kind),
                        self.current.span,
                    ));
                }
            }
        }

        let draws = pending
            .into_iter()
            .map(|draw| {
                let shape = shapes.get(&draw.shape).cloned().ok_or_else(|| {
                    CompileError::parser(format!("unknown shape '{}'", draw.shape), draw.shape_span)
                })?;
                Ok(Draw::new(shape, draw.x, draw.y, draw.span))
            })
            .collect::<CompileResult<Vec<_>>>()?;

        Ok(Scene::new(draws))
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }

    fn advance(&mut self) -> CompileResult<Token> {
        let prev = std::mem::replace(&mut self.current, self.lexer.next_token()?);
        Ok(prev)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    fn match_token(&mut self, kind: &TokenKind) -> CompileResult<bool> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> CompileResult<Token> {
        if self.check(&kind) {
            self.advance()
        } else {
            Err(CompileError::parser(
                format!("expected {}, found {}", kind, self.current.kind),
                self.current.span,
            ))
        }
    }

    fn expect_identifier(&mut self) -> CompileResult<(String, Span)> {
        if let TokenKind::Identifier(name) = &self.current.kind {
            let name = name.clone();
            let span = self.advance()?.span;
            Ok((name, span))
        } else {
            Err(CompileError::parser(
                format!("expected identifier, found {}", self.current.kind),
                self.current.span,
            ))
        }
    }

    // =========================================================================
    // Items
    // =========================================================================

    fn parse_shape(&mut self) -> CompileResult<Shape> {
        let start = self.expect(TokenKind::Shape)?.span;
        let (name, _) = self.expect_identifier()?;
        self.expect(TokenKind::LBrace)?;

        self.expect(TokenKind::Pencil)?;
        let (pencil, pencil_span) = self.parse_color()?;
        self.expect(TokenKind::Semi)?;

        let mut rules = Vec::new();
        while self.check(&TokenKind::Rule) {
            rules.push(self.parse_rule()?);
        }

        let axiom_start = self.expect(TokenKind::Axiom)?.span;
        let (instructions, body_span) = self.parse_block()?;
        let axiom = Axiom::new(instructions, axiom_start.merge(body_span));

        let end = self.expect(TokenKind::RBrace)?.span;
        Ok(Shape::new(name, pencil, pencil_span, rules, axiom, start.merge(end)))
    }

    /// Colors are taken verbatim; validating them is the checker's job
    fn parse_color(&mut self) -> CompileResult<(String, Span)> {
        match &self.current.kind {
            TokenKind::Identifier(s) | TokenKind::HexColor(s) | TokenKind::StringLiteral(s) => {
                let color = s.clone();
                let span = self.advance()?.span;
                Ok((color, span))
            }
            other => Err(CompileError::parser(
                format!("expected color, found {}", other),
                self.current.span,
            )),
        }
    }

    fn parse_rule(&mut self) -> CompileResult<Rule> {
        let start = self.expect(TokenKind::Rule)?.span;
        let (name, _) = self.expect_identifier()?;
        self.expect(TokenKind::LParen)?;
        let (param, _) = self.expect_identifier()?;
        self.expect(TokenKind::RParen)?;
        let (instructions, body_span) = self.parse_block()?;
        Ok(Rule::new(name, param, instructions, start.merge(body_span)))
    }

    fn parse_draw(&mut self) -> CompileResult<PendingDraw> {
        let start = self.expect(TokenKind::Draw)?.span;
        let (shape, shape_span) = self.expect_identifier()?;

        let (x, y) = if self.match_token(&TokenKind::At)? {
            self.expect(TokenKind::LParen)?;
            let x = self.parse_optional_expr()?;
            self.expect(TokenKind::Comma)?;
            let y = self.parse_optional_expr()?;
            self.expect(TokenKind::RParen)?;
            (x, y)
        } else {
            let empty = Span::new(shape_span.end, shape_span.end);
            (Expr::nill(empty), Expr::nill(empty))
        };

        let end = self.expect(TokenKind::Semi)?.span;
        Ok(PendingDraw {
            shape,
            shape_span,
            x,
            y,
            span: start.merge(end),
        })
    }

    // =========================================================================
    // Instructions
    // =========================================================================

    fn parse_block(&mut self) -> CompileResult<(Vec<Instruction>, Span)> {
        let start = self.expect(TokenKind::LBrace)?.span;
        let mut instructions = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.at_end() {
            instructions.push(self.parse_instruction()?);
        }
        let end = self.expect(TokenKind::RBrace)?.span;
        Ok((instructions, start.merge(end)))
    }

    fn parse_instruction(&mut self) -> CompileResult<Instruction> {
        let start = self.current.span;

        let kind = match &self.current.kind {
            TokenKind::Left => {
                self.advance()?;
                InstructionKind::Left(self.parse_argument()?)
            }
            TokenKind::Right => {
                self.advance()?;
                InstructionKind::Right(self.parse_argument()?)
            }
            TokenKind::Line => {
                self.advance()?;
                InstructionKind::Line(self.parse_argument()?)
            }
            TokenKind::Push => {
                self.advance()?;
                InstructionKind::Push
            }
            TokenKind::Pop => {
                self.advance()?;
                InstructionKind::Pop
            }
            TokenKind::Jump => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let x = self.parse_optional_expr()?;
                self.expect(TokenKind::Comma)?;
                let y = self.parse_optional_expr()?;
                self.expect(TokenKind::RParen)?;
                InstructionKind::Jump { x, y }
            }
            TokenKind::Identifier(id) => {
                let id = id.clone();
                self.advance()?;
                if self.match_token(&TokenKind::Eq)? {
                    let value = self.parse_expr()?;
                    InstructionKind::Assign { id, value }
                } else {
                    let argument = self.parse_argument()?;
                    InstructionKind::CallRule { id, argument }
                }
            }
            other => {
                return Err(CompileError::parser(
                    format!("expected instruction, found {}", other),
                    self.current.span,
                ));
            }
        };

        let end = self.expect(TokenKind::Semi)?.span;
        Ok(Instruction::new(kind, start.merge(end)))
    }

    /// Parenthesised single argument: `(expr)` or `()`
    fn parse_argument(&mut self) -> CompileResult<Expr> {
        self.expect(TokenKind::LParen)?;
        let expr = self.parse_optional_expr()?;
        self.expect(TokenKind::RParen)?;
        Ok(expr)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn parse_optional_expr(&mut self) -> CompileResult<Expr> {
        if self.check(&TokenKind::RParen) || self.check(&TokenKind::Comma) {
            let at = self.current.span.start;
            return Ok(Expr::nill(Span::new(at, at)));
        }
        self.parse_expr()
    }

    fn parse_expr(&mut self) -> CompileResult<Expr> {
        let token = self.advance()?;
        let span = token.span;

        match token.kind {
            TokenKind::IntLiteral(s) => Ok(Expr::value(Literal::Int(parse_int(&s, span)?), span)),
            TokenKind::FloatLiteral(s) => {
                Ok(Expr::value(Literal::Float(parse_float(&s, span)?), span))
            }
            TokenKind::StringLiteral(s) => Ok(Expr::value(Literal::Str(s), span)),
            TokenKind::Identifier(name) => Ok(Expr::value(Literal::Ident(name), span)),
            TokenKind::Minus => {
                let operand = self.advance()?;
                let span = span.merge(operand.span);
                match operand.kind {
                    TokenKind::IntLiteral(s) => {
                        Ok(Expr::value(Literal::Int(parse_int(&format!("-{}", s), span)?), span))
                    }
                    TokenKind::FloatLiteral(s) => {
                        Ok(Expr::value(Literal::Float(-parse_float(&s, span)?), span))
                    }
                    other => Err(CompileError::parser(
                        format!("expected number after '-', found {}", other),
                        operand.span,
                    )),
                }
            }
            other => Err(CompileError::parser(
                format!("expected expression, found {}", other),
                span,
            )),
        }
    }
}

fn parse_int(text: &str, span: Span) -> CompileResult<i64> {
    text.parse()
        .map_err(|_| CompileError::parser(format!("integer literal '{}' out of range", text), span))
}

fn parse_float(text: &str, span: Span) -> CompileResult<f64> {
    text.parse()
        .map_err(|_| CompileError::parser(format!("invalid float literal '{}'", text), span))
}
