//! shapec - checker for turtle-graphics shape scenes
//!
//! Usage: shapec [OPTIONS] <input>

use anyhow::Context;
use clap::Parser as ClapParser;
use shape_compiler::driver;
use shape_compiler::{CompileError, FrontendConfig, Palette};
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "shapec")]
#[command(author = "Shapes Team")]
#[command(version = "0.1.0")]
#[command(about = "Checks turtle-graphics shape scenes for semantic errors", long_about = None)]
struct Args {
    /// Input source file (.shape)
    #[arg(required = true)]
    input: PathBuf,

    /// Accept an extra named pencil color (repeatable)
    #[arg(long = "allow-color", value_name = "NAME")]
    allow_colors: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dump AST (for debugging)
    #[arg(long)]
    dump_ast: bool,

    /// Dump tokens (for debugging)
    #[arg(long)]
    dump_tokens: bool,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Returns the number of semantic diagnostics found
fn run(args: &Args) -> anyhow::Result<usize> {
    let mut palette = Palette::default();
    for name in &args.allow_colors {
        palette.allow(name.as_str());
    }

    let config = FrontendConfig {
        dump_tokens: args.dump_tokens,
        dump_ast: args.dump_ast,
        verbose: args.verbose,
        palette,
    };

    if args.verbose {
        eprintln!("Checking {}", args.input.display());
    }

    let report = match driver::check_file(&args.input, &config) {
        Ok(report) => report,
        Err(CompileError::Io(err)) => {
            return Err(err).with_context(|| format!("failed to read {}", args.input.display()));
        }
        // Already rendered by the frontend
        Err(_) => process::exit(1),
    };

    if args.verbose && report.is_clean() {
        eprintln!("{}: no semantic errors", args.input.display());
    }

    Ok(report.diagnostics.len())
}
