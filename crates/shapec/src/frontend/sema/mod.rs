//! Semantic analysis module
//!
//! This module validates a parsed scene: rule references and pencil colors.

mod scope;
mod palette;
mod diagnostic;
mod checker;

pub use scope::Scope;
pub use palette::{Palette, is_hex_color};
pub use diagnostic::Diagnostic;
pub use checker::SemanticChecker;
