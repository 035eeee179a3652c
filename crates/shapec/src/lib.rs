//! Shape Compiler - checker for the turtle-graphics shape language
//!
//! A scene is a list of draw statements; each draws a shape (pencil color,
//! production rules, axiom) at a coordinate. This library parses such scenes
//! and checks them for undefined rule references and invalid pencil colors.
//!
//! ## Architecture
//!
//! - **Frontend** (`frontend/`): lexing, parsing, AST, semantic checking, printing
//! - **Driver** (`driver/`): file loading and orchestration
//! - **Common** (`common/`): errors, spans, diagnostic rendering

pub mod common;
pub mod driver;
pub mod frontend;

// Re-exports for convenience
pub use common::{CompileError, CompileResult, DiagnosticReporter, Span};
pub use frontend::{CheckReport, CompileContext, FrontendConfig, ShapeFrontend};
pub use frontend::sema::{Diagnostic, Palette, Scope, SemanticChecker};
