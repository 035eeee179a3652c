//! Common infrastructure shared by the lexer, parser and checker

mod error;
mod span;

pub use error::{CompileError, CompileResult, DiagnosticReporter};
pub use span::Span;
