//! Check driver: file loading and frontend orchestration

use std::fs;
use std::path::Path;

use crate::common::{CompileResult, DiagnosticReporter};
use crate::frontend::{CheckReport, CompileContext, FrontendConfig, ShapeFrontend};

/// Check a single source held in memory, rendering errors to stderr
pub fn check_source(
    source: &str,
    filename: &str,
    config: &FrontendConfig,
) -> CompileResult<CheckReport> {
    check_source_with(source, filename, config, &mut DiagnosticReporter::new())
}

/// Check a single source, routing errors through `reporter`
pub fn check_source_with(
    source: &str,
    filename: &str,
    config: &FrontendConfig,
    reporter: &mut DiagnosticReporter,
) -> CompileResult<CheckReport> {
    let file_id = reporter.add_file(filename, source);
    let ctx = CompileContext::new(filename.to_string(), file_id, reporter);
    ShapeFrontend::new().check(source, &ctx, config)
}

/// Read `path` and check it, rendering errors to stderr
pub fn check_file(path: &Path, config: &FrontendConfig) -> CompileResult<CheckReport> {
    check_file_with(path, config, &mut DiagnosticReporter::new())
}

/// Read `path` and check it, routing errors through `reporter`
pub fn check_file_with(
    path: &Path,
    config: &FrontendConfig,
    reporter: &mut DiagnosticReporter,
) -> CompileResult<CheckReport> {
    let source = fs::read_to_string(path)?;
    let filename = path.display().to_string();

    let frontend = ShapeFrontend::new();
    let known = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .is_some_and(|ext| frontend.extensions().contains(&ext.as_str()));
    if !known && config.verbose {
        eprintln!("warning: {} does not have a .shape extension", filename);
    }

    check_source_with(&source, &filename, config, reporter)
}
