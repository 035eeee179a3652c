//! Token definitions for the shape lexer

use crate::common::Span;
use logos::Logos;

/// Token with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// All token kinds of the shape language
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]  // Skip whitespace
#[logos(skip r"//[^\n]*")]      // Skip line comments
pub enum TokenKind {
    // === Keywords ===
    #[token("shape")]
    Shape,
    #[token("pencil")]
    Pencil,
    #[token("rule")]
    Rule,
    #[token("axiom")]
    Axiom,
    #[token("draw")]
    Draw,
    #[token("at")]
    At,
    #[token("left")]
    Left,
    #[token("right")]
    Right,
    #[token("line")]
    Line,
    #[token("push")]
    Push,
    #[token("pop")]
    Pop,
    #[token("jump")]
    Jump,

    // === Identifiers ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // === Literals ===
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    IntLiteral(String),

    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    FloatLiteral(String),

    // Quotes are stripped
    #[regex(r#""[^"\n]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    StringLiteral(String),

    // Any `#`-prefixed word; whether it is a valid color is decided later
    #[regex(r"#[0-9a-zA-Z]*", |lex| lex.slice().to_string())]
    HexColor(String),

    // === Punctuation ===
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("-")]
    Minus,

    // Special
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Shape => write!(f, "'shape'"),
            TokenKind::Pencil => write!(f, "'pencil'"),
            TokenKind::Rule => write!(f, "'rule'"),
            TokenKind::Axiom => write!(f, "'axiom'"),
            TokenKind::Draw => write!(f, "'draw'"),
            TokenKind::At => write!(f, "'at'"),
            TokenKind::Left => write!(f, "'left'"),
            TokenKind::Right => write!(f, "'right'"),
            TokenKind::Line => write!(f, "'line'"),
            TokenKind::Push => write!(f, "'push'"),
            TokenKind::Pop => write!(f, "'pop'"),
            TokenKind::Jump => write!(f, "'jump'"),
            TokenKind::Identifier(s) => write!(f, "identifier '{}'", s),
            TokenKind::IntLiteral(s) => write!(f, "integer '{}'", s),
            TokenKind::FloatLiteral(s) => write!(f, "float '{}'", s),
            TokenKind::StringLiteral(s) => write!(f, "string \"{}\"", s),
            TokenKind::HexColor(s) => write!(f, "color '{}'", s),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Eq => write!(f, "'='"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}
