//! End-to-end checks: source text through lexer, parser and checker

use pretty_assertions::assert_eq;
use shape_compiler::driver::{check_file, check_file_with, check_source_with};
use shape_compiler::frontend::{AstPrinter, CheckReport, ShapeFrontend};
use shape_compiler::{CompileError, CompileResult, DiagnosticReporter, FrontendConfig, Palette};
use std::io::Write;
use std::path::Path;

fn check_quietly(source: &str, config: &FrontendConfig) -> CompileResult<CheckReport> {
    check_source_with(source, "test.shape", config, &mut DiagnosticReporter::silent())
}

fn check_file_quietly(path: &Path) -> CompileResult<CheckReport> {
    check_file_with(path, &FrontendConfig::default(), &mut DiagnosticReporter::silent())
}

fn check(source: &str) -> Vec<String> {
    check_quietly(source, &FrontendConfig::default())
        .expect("source should parse")
        .messages()
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn invalid_short_hex_color() {
    let messages = check(
        r#"
        shape tri {
            pencil #12;
            axiom { line(10); left(120); line(10); }
        }
        draw tri at (0, 0);
        "#,
    );
    assert_eq!(messages, vec!["Invalid color '#12'"]);
}

#[test]
fn axiom_calls_rule_of_same_shape() {
    let messages = check(
        r#"
        shape koch {
            pencil purple;
            rule F(n) {
                line(n);
                left(60);
                F(n);
            }
            axiom { F(3); }
        }
        draw koch at (10, 10);
        "#,
    );
    assert!(messages.is_empty(), "unexpected diagnostics: {:?}", messages);
}

#[test]
fn axiom_calls_missing_rule() {
    let messages = check(
        r#"
        shape s {
            pencil green;
            axiom { G(1); }
        }
        draw s;
        "#,
    );
    assert_eq!(messages, vec!["Don't exist's rule 'G'"]);
}

#[test]
fn later_shape_sees_earlier_shapes_rules() {
    let messages = check(
        r#"
        shape lib {
            pencil black;
            rule A(n) { line(n); }
            axiom { }
        }
        shape user {
            pencil #0A0;
            axiom { A(5); }
        }
        draw lib;
        draw user at (1, 2);
        "#,
    );
    assert!(messages.is_empty(), "unexpected diagnostics: {:?}", messages);
}

#[test]
fn draw_order_decides_visibility() {
    // `user` is drawn before `lib`, so `A` is not defined yet when it is checked
    let messages = check(
        r#"
        shape lib { pencil black; rule A(n) { line(n); } axiom { } }
        shape user { pencil black; axiom { A(5); } }
        draw user;
        draw lib;
        draw user;
        "#,
    );
    assert_eq!(messages, vec!["Don't exist's rule 'A'"]);
}

#[test]
fn every_problem_is_reported_in_order() {
    let messages = check(
        r##"
        shape a {
            pencil orange;
            rule R(n) { X(n); R(n); }
            axiom { size = 3; R(size); Y(); }
        }
        shape b {
            pencil "#GGGGGG";
            axiom { jump(1, 2); push; Z(1); pop; }
        }
        draw a;
        draw b;
        "##,
    );
    assert_eq!(
        messages,
        vec![
            "Invalid color 'orange'",
            "Don't exist's rule 'X'",
            "Don't exist's rule 'Y'",
            "Invalid color '#GGGGGG'",
            "Don't exist's rule 'Z'",
        ]
    );
}

#[test]
fn shape_checked_once_per_draw() {
    let messages = check("shape s { pencil red; axiom { } } draw s; draw s at (5, 5);");
    assert_eq!(messages, vec!["Invalid color 'red'", "Invalid color 'red'"]);
}

#[test]
fn extra_palette_colors() {
    let mut config = FrontendConfig::default();
    config.palette.allow("red");

    let report = check_quietly("shape s { pencil red; axiom { } } draw s;", &config).unwrap();
    assert!(report.is_clean());

    let config = FrontendConfig {
        palette: Palette::with_names(["red"]),
        ..FrontendConfig::default()
    };
    let report = check_quietly("shape s { pencil blue; axiom { } } draw s;", &config).unwrap();
    assert_eq!(report.messages(), vec!["Invalid color 'blue'"]);
}

#[test]
fn diagnostics_carry_source_spans() {
    let source = "shape s { pencil #12; axiom { G(1); } } draw s;";
    let report = check_quietly(source, &FrontendConfig::default()).unwrap();

    let spans: Vec<&str> = report
        .diagnostics
        .iter()
        .map(|d| &source[d.span.start..d.span.end])
        .collect();
    assert_eq!(spans, vec!["#12", "G(1);"]);
}

#[test]
fn checking_twice_gives_same_result() {
    let source = "shape s { pencil #12; axiom { G(1); } } draw s;";
    assert_eq!(check(source), check(source));
}

#[test]
fn syntax_error_is_fatal() {
    let result = check_quietly("shape s { pencil blue; axiom { line(1) } }", &FrontendConfig::default());
    assert!(matches!(result, Err(CompileError::Parser { .. })));
}

#[test]
fn lexer_error_is_fatal() {
    let result = check_quietly("shape s { pencil blue; axiom { line(1$); } }", &FrontendConfig::default());
    assert!(matches!(result, Err(CompileError::Lexer { .. })));
}

#[test]
fn check_file_reads_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".shape").tempfile().unwrap();
    write!(file, "shape s {{ pencil blue; axiom {{ F(1); }} }} draw s;").unwrap();

    let report = check_file_quietly(file.path()).unwrap();
    assert_eq!(report.messages(), vec!["Don't exist's rule 'F'"]);
    assert_eq!(report.scene.draws.len(), 1);
}

#[test]
fn check_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = check_file(&dir.path().join("missing.shape"), &FrontendConfig::default());
    assert!(matches!(result, Err(CompileError::Io(_))));
}

#[test]
fn dumps_match_parsed_scene() {
    let source = "shape s { pencil blue; axiom { push; } } draw s at (1, 2);";
    let frontend = ShapeFrontend::new();

    let tokens = frontend.dump_tokens(source).unwrap();
    assert_eq!(tokens.lines().count(), 22);
    assert!(tokens.lines().last().unwrap().contains("Eof"));

    let report = check_quietly(source, &FrontendConfig::default()).unwrap();
    assert_eq!(frontend.dump_ast(source).unwrap(), AstPrinter::print(&report.scene));
}

#[test]
fn garden_demo() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/garden.shape");
    let report = check_file_quietly(&path).unwrap();

    assert_eq!(report.scene.draws.len(), 4);
    assert_eq!(
        report.messages(),
        vec!["Invalid color 'brown'", "Don't exist's rule 'Sprout'"]
    );
}

#[test]
fn every_diagnostic_goes_through_the_reporter() {
    let mut reporter = DiagnosticReporter::silent();
    let source = "shape s { pencil #12; axiom { G(1); H(2); } } draw s;";

    let report = check_source_with(source, "test.shape", &FrontendConfig::default(), &mut reporter).unwrap();
    assert_eq!(report.diagnostics.len(), 3);
    assert_eq!(reporter.reported(), 3);

    let mut reporter = DiagnosticReporter::silent();
    let result = check_source_with("draw s", "bad.shape", &FrontendConfig::default(), &mut reporter);
    assert!(result.is_err());
    assert_eq!(reporter.reported(), 1);
}

#[test]
fn quoted_hex_pencil_reaches_the_checker() {
    let messages = check(r##"shape s { pencil "#12"; axiom { } } shape t { pencil "#aBc"; axiom { } } draw s; draw t;"##);
    assert_eq!(messages, vec!["Invalid color '#12'"]);
}
