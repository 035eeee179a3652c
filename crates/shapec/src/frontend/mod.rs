//! Shape language frontend
//!
//! The frontend is responsible for:
//! 1. Lexing source code into tokens
//! 2. Parsing tokens into a scene AST
//! 3. Semantic checking of rules and pencil colors

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod sema;

use crate::common::{CompileError, CompileResult, DiagnosticReporter};

pub use ast::Scene;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use printer::AstPrinter;
pub use sema::{Diagnostic, Palette, Scope, SemanticChecker};

/// Configuration options passed to the frontend
#[derive(Debug, Clone, Default)]
pub struct FrontendConfig {
    pub dump_tokens: bool,
    pub dump_ast: bool,
    pub verbose: bool,
    /// Named colors a pencil may use besides hex codes
    pub palette: Palette,
}

/// Compilation context providing access to diagnostics and file info
pub struct CompileContext<'a> {
    pub filename: String,
    pub file_id: usize,
    pub reporter: &'a DiagnosticReporter,
}

impl<'a> CompileContext<'a> {
    pub fn new(filename: String, file_id: usize, reporter: &'a DiagnosticReporter) -> Self {
        Self { filename, file_id, reporter }
    }
}

/// Outcome of checking one source file
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub scene: Scene,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Diagnostic texts in discovery order
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Frontend for `.shape` sources
pub struct ShapeFrontend;

impl ShapeFrontend {
    pub fn new() -> Self {
        Self
    }

    /// File extensions this frontend handles
    pub fn extensions(&self) -> &'static [&'static str] {
        &[".shape"]
    }

    /// Run lex -> parse -> check over `source`
    ///
    /// Lexer and parser errors are reported and returned; semantic
    /// diagnostics are reported and collected into the [`CheckReport`].
    pub fn check(
        &self,
        source: &str,
        ctx: &CompileContext,
        config: &FrontendConfig,
    ) -> CompileResult<CheckReport> {
        // Phase 1: Lexing (optional token dump)
        if config.dump_tokens {
            if config.verbose {
                eprintln!("Lexing {}...", ctx.filename);
            }
            match self.dump_tokens(source) {
                Ok(tokens) => {
                    eprintln!("=== Tokens ===");
                    eprint!("{}", tokens);
                    eprintln!("=== End Tokens ===\n");
                }
                Err(e) => {
                    ctx.reporter.report_error(ctx.file_id, &e);
                    return Err(e);
                }
            }
        }

        // Phase 2: Parsing
        if config.verbose {
            eprintln!("Parsing {}...", ctx.filename);
        }

        let scene = match Parser::new(source).and_then(|mut parser| parser.parse()) {
            Ok(scene) => scene,
            Err(e) => {
                ctx.reporter.report_error(ctx.file_id, &e);
                return Err(e);
            }
        };

        if config.dump_ast {
            eprintln!("=== AST ===");
            eprint!("{}", AstPrinter::print(&scene));
            eprintln!("=== End AST ===\n");
        }

        // Phase 3: Semantic checking
        if config.verbose {
            eprintln!("Checking {} draw(s)...", scene.draws.len());
        }

        let mut checker = SemanticChecker::with_palette(config.palette.clone());
        let diagnostics = checker.check(&scene);
        for diagnostic in &diagnostics {
            ctx.reporter
                .report_error(ctx.file_id, &CompileError::from(diagnostic.clone()));
        }

        if config.verbose {
            eprintln!("Found {} diagnostic(s)", diagnostics.len());
        }

        Ok(CheckReport { scene, diagnostics })
    }

    /// One line per token, for debugging
    pub fn dump_tokens(&self, source: &str) -> CompileResult<String> {
        let lexer = Lexer::new(source);
        let tokens = lexer.tokenize_all()?;
        let mut output = String::new();
        for token in &tokens {
            output.push_str(&format!("{:?}\n", token));
        }
        Ok(output)
    }

    /// Indented AST rendering, for debugging
    pub fn dump_ast(&self, source: &str) -> CompileResult<String> {
        let mut parser = Parser::new(source)?;
        let scene = parser.parse()?;
        Ok(AstPrinter::print(&scene))
    }
}

impl Default for ShapeFrontend {
    fn default() -> Self {
        Self::new()
    }
}
