//! Loading requirement files and program trees from disk.

use std::io::Write;

use brrr_req::repr::{Decl, Expr, Match, Module, ParsedProgram, Pattern};
use brrr_req::{evaluate_all, fingerprint_definition, load_requirements, ConfigError, Verdict};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

fn square_module() -> Module {
    Module::new(vec![Decl::fun(vec![Match::new(
        "square",
        vec![Pattern::var("n")],
        Expr::apps(Expr::var("pow"), vec![Expr::var("n"), Expr::int(2)]),
    )])])
}

#[test]
fn requirements_file_end_to_end() {
    let module = square_module();
    let expected = fingerprint_definition(&module, "square").unwrap().unwrap();
    let file = write_temp(&format!(
        r#"
        [[requirement]]
        description = "square is defined via pow"
        rules = [
          {{ kind = "defined_by_function", target = "square", via = "pow" }},
          {{ kind = "not_used", target = "unsafePerformIO" }},
        ]

        [[requirement]]
        description = "square matches the reference"
        rules = [{{ kind = "matches_expected", target = "square", fingerprint = {expected} }}]

        [[requirement]]
        description = "no recursion helpers"
        rules = [{{ kind = "not_defined", target = "square" }}]
        "#
    ));

    let reqs = load_requirements(file.path()).unwrap();
    assert_eq!(reqs.len(), 3);

    let results = evaluate_all(&reqs, &ParsedProgram::Parsed(module));
    let verdicts: Vec<_> = results.iter().map(|r| r.verdict).collect();
    assert_eq!(verdicts, vec![Verdict::Pass, Verdict::Pass, Verdict::Fail]);
    assert_eq!(results[2].messages(), vec!["`square` should not be defined."]);
}

#[test]
fn program_tree_from_json() {
    let json = ParsedProgram::Parsed(square_module());
    let text = serde_json::to_string(&json).unwrap();
    let decoded = ParsedProgram::from_json(&text).unwrap();
    assert_eq!(decoded, json);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_requirements(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_file_names_the_path() {
    let file = write_temp("[[requirement]]\ndescription = 3\n");
    let err = load_requirements(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseFile { .. }));
}
