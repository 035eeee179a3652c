//! Non-fatal semantic findings

use crate::common::{CompileError, Span};
use std::fmt;

/// A recorded semantic error; checking continues after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    pub fn undefined_rule(id: &str, span: Span) -> Self {
        Self::new(format!("Don't exist's rule '{}'", id), span)
    }

    pub fn invalid_color(color: &str, span: Span) -> Self {
        Self::new(format!("Invalid color '{}'", color), span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<Diagnostic> for CompileError {
    fn from(diagnostic: Diagnostic) -> Self {
        CompileError::semantic(diagnostic.message, diagnostic.span)
    }
}
