//! End-to-end behaviour of each rule kind on small programs.

use brrr_req::repr::{
    Alt, Decl, Expr, GuardedRhs, Literal, Match, Module, ParsedProgram, Pattern, Range, Stmt,
};
use brrr_req::{evaluate, fingerprint_definition, Requirement, Rule, Verdict};

// ============================================================================
// HELPERS
// ============================================================================

/// `name params = body` as the only declaration.
fn program(name: &str, params: Vec<Pattern>, body: Expr) -> ParsedProgram {
    ParsedProgram::Parsed(Module::new(vec![Decl::fun(vec![Match::new(name, params, body)])]))
}

/// Diagnostics from a single-rule requirement.
fn run(rule: Rule, program: &ParsedProgram) -> Vec<String> {
    evaluate(&Requirement::new("rule", vec![rule]), program)
        .diagnostics
        .into_iter()
        .map(|d| d.message)
        .collect()
}

fn add(a: Expr, b: Expr) -> Expr {
    Expr::infix(a, "+", b)
}

// ============================================================================
// DEFINED BY FUNCTION
// ============================================================================

#[test]
fn defined_by_direct_application_passes() {
    let p = program("f", vec![Pattern::var("x")], Expr::app(Expr::var("g"), Expr::var("x")));
    assert!(run(Rule::defined_by_function("f", "g"), &p).is_empty());
}

#[test]
fn defined_by_under_operator_fails() {
    let p = program(
        "f",
        vec![Pattern::var("x")],
        add(Expr::app(Expr::var("g"), Expr::var("x")), Expr::int(1)),
    );
    assert_eq!(
        run(Rule::defined_by_function("f", "g"), &p),
        vec!["`f` is not defined directly using `g`."]
    );
}

#[test]
fn defined_by_let_bound_result_passes() {
    // f x = let y = g x in y
    let body = Expr::let_in(
        vec![Decl::value("y", Expr::app(Expr::var("g"), Expr::var("x")))],
        Expr::var("y"),
    );
    let p = program("f", vec![Pattern::var("x")], body);
    assert!(run(Rule::defined_by_function("f", "g"), &p).is_empty());
}

#[test]
fn defined_by_let_bound_result_other_function_fails() {
    // f x = let y = h x in y
    let body = Expr::let_in(
        vec![Decl::value("y", Expr::app(Expr::var("h"), Expr::var("x")))],
        Expr::var("y"),
    );
    let p = program("f", vec![Pattern::var("x")], body);
    assert_eq!(
        run(Rule::defined_by_function("f", "g"), &p),
        vec!["`f` is not defined directly using `g`."]
    );
}

#[test]
fn defined_by_through_let_passes() {
    let body = Expr::let_in(
        vec![Decl::value("y", Expr::app(Expr::var("g"), Expr::var("x")))],
        Expr::app(Expr::var("g"), Expr::var("y")),
    );
    let p = program("f", vec![Pattern::var("x")], body);
    assert!(run(Rule::defined_by_function("f", "g"), &p).is_empty());
}

#[test]
fn defined_by_partial_application_passes() {
    let p = program(
        "sumAll",
        vec![],
        Expr::paren(Expr::apps(Expr::var("foldr"), vec![Expr::op("+"), Expr::int(0)])),
    );
    assert!(run(Rule::defined_by_function("sumAll", "foldr"), &p).is_empty());
}

// ============================================================================
// MATCHES EXPECTED
// ============================================================================

#[test]
fn matches_expected_is_position_insensitive() {
    let reference = program("f", vec![Pattern::var("x")], add(Expr::var("x"), Expr::int(1)));
    let ParsedProgram::Parsed(ref reference_module) = reference else {
        unreachable!()
    };
    let expected = fingerprint_definition(reference_module, "f").unwrap().unwrap();

    let moved = program(
        "f",
        vec![Pattern::var("x").at(Range::span(3, 3, 3, 4))],
        add(Expr::var("x").at(Range::span(3, 7, 3, 8)), Expr::int(1)).at(Range::span(3, 7, 3, 12)),
    );
    assert!(run(Rule::matches_expected("f", expected), &moved).is_empty());

    let different = program("f", vec![Pattern::var("x")], add(Expr::var("x"), Expr::int(2)));
    let diags = run(Rule::matches_expected("f", expected), &different);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].starts_with("`f` does not have the expected definition. ("));
}

/// `f 0 = 1` and `f n | n > 0 = n * f (n - 1) | otherwise = 0`, with the
/// second equation's guard placed at `line` when given.
fn factorial_equations(line: Option<u32>) -> (Match, Match) {
    let base = Match::new("f", vec![Pattern::lit(Literal::int(0))], Expr::int(1));
    let mut guard = Expr::infix(Expr::var("n"), ">", Expr::int(0));
    if let Some(line) = line {
        guard = guard.at(Range::span(line, 5, line, 10));
    }
    let step = Match::guarded(
        "f",
        vec![Pattern::var("n")],
        vec![
            GuardedRhs::new(
                guard,
                Expr::infix(
                    Expr::var("n"),
                    "*",
                    Expr::app(
                        Expr::var("f"),
                        Expr::paren(Expr::infix(Expr::var("n"), "-", Expr::int(1))),
                    ),
                ),
            ),
            GuardedRhs::new(Expr::var("otherwise"), Expr::int(0)),
        ],
    );
    (base, step)
}

fn fingerprint_of(equations: Vec<Match>) -> u64 {
    let module = Module::new(vec![Decl::fun(equations)]);
    fingerprint_definition(&module, "f").unwrap().unwrap()
}

#[test]
fn matches_expected_combines_equations_in_order() {
    let (base, step) = factorial_equations(None);
    let expected = fingerprint_of(vec![base.clone(), step.clone()]);

    let (moved_base, mut moved_step) = factorial_equations(Some(9));
    moved_step.range = Range::span(9, 1, 10, 20);
    assert_eq!(fingerprint_of(vec![moved_base, moved_step]), expected);

    let reordered = ParsedProgram::Parsed(Module::new(vec![Decl::fun(vec![step, base])]));
    assert_eq!(
        run(Rule::matches_expected("f", expected), &reordered).len(),
        1,
        "equation order is part of the definition"
    );
}

// ============================================================================
// SIMPLE PARAMS
// ============================================================================

#[test]
fn simple_params_tuple_passes() {
    let p = program(
        "f",
        vec![Pattern::paren(Pattern::tuple(vec![Pattern::var("x"), Pattern::var("y")]))],
        Expr::var("x"),
    );
    assert!(run(Rule::has_simple_params("f"), &p).is_empty());
}

#[test]
fn simple_params_constructor_fails() {
    let p = program(
        "f",
        vec![Pattern::paren(Pattern::con("Just", vec![Pattern::var("x")]))],
        Expr::var("x"),
    );
    assert_eq!(
        run(Rule::has_simple_params("f"), &p),
        vec!["`f` has equations with pattern matching."]
    );
}

#[test]
fn simple_params_wildcard_passes() {
    let p = program("f", vec![Pattern::wild()], Expr::int(1));
    assert!(run(Rule::has_simple_params("f"), &p).is_empty());
}

// ============================================================================
// USES ALL PARAMS
// ============================================================================

#[test]
fn uses_all_params_unused_fails() {
    let p = program("f", vec![Pattern::var("x"), Pattern::var("y")], Expr::var("x"));
    assert_eq!(run(Rule::uses_all_params("f"), &p), vec!["`f` has unused arguments."]);
}

#[test]
fn uses_all_params_both_used_passes() {
    let p = program(
        "f",
        vec![Pattern::var("x"), Pattern::var("y")],
        add(Expr::var("x"), Expr::var("y")),
    );
    assert!(run(Rule::uses_all_params("f"), &p).is_empty());
}

#[test]
fn uses_all_params_through_let_passes() {
    let p = program(
        "f",
        vec![Pattern::var("x")],
        Expr::let_in(vec![Decl::value("y", Expr::var("x"))], Expr::var("y")),
    );
    assert!(run(Rule::uses_all_params("f"), &p).is_empty());
}

#[test]
fn uses_all_params_tuple_components_checked() {
    let p = program(
        "swap",
        vec![Pattern::tuple(vec![Pattern::var("a"), Pattern::var("b")])],
        Expr::tuple(vec![Expr::var("b"), Expr::var("b")]),
    );
    assert_eq!(run(Rule::uses_all_params("swap"), &p), vec!["`swap` has unused arguments."]);
}

// ============================================================================
// NOT DEFINED / NOT USED
// ============================================================================

#[test]
fn missing_definition_is_reported_by_every_definition_rule() {
    let p = program("g", vec![Pattern::var("x")], Expr::var("x"));

    assert!(run(Rule::not_defined("f"), &p).is_empty());
    assert_eq!(run(Rule::defined_by_function("f", "g"), &p), vec!["`f` is not defined."]);
    assert_eq!(run(Rule::matches_expected("f", 1), &p), vec!["`f` is not defined."]);
    assert_eq!(run(Rule::uses_all_params("f"), &p), vec!["`f` is not defined."]);
    assert_eq!(
        run(Rule::has_simple_params("f"), &p),
        vec!["`f` is not defined as a function."]
    );
}

#[test]
fn not_defined_and_defined_by_are_exclusive() {
    let p = program("f", vec![Pattern::var("x")], Expr::app(Expr::var("g"), Expr::var("x")));
    assert_eq!(run(Rule::not_defined("f"), &p), vec!["`f` should not be defined."]);
    assert!(run(Rule::defined_by_function("f", "g"), &p).is_empty());
}

#[test]
fn not_used_absent_passes() {
    let p = program("main", vec![], Expr::app(Expr::var("print"), Expr::int(1)));
    assert!(run(Rule::not_used("unsafePerformIO"), &p).is_empty());
}

#[test]
fn not_used_in_guard_fails() {
    let eq = Match::guarded(
        "f",
        vec![Pattern::var("x")],
        vec![GuardedRhs::new(
            Expr::app(Expr::var("unsafePerformIO"), Expr::var("x")),
            Expr::int(1),
        )],
    );
    let p = ParsedProgram::Parsed(Module::new(vec![Decl::fun(vec![eq])]));
    assert_eq!(
        run(Rule::not_used("unsafePerformIO"), &p),
        vec!["`unsafePerformIO` should not be used."]
    );
}

#[test]
fn not_used_in_where_binding_fails() {
    let eq = Match::new("f", vec![], Expr::var("helper")).with_where(vec![Decl::value(
        "helper",
        Expr::paren(Expr::paren(Expr::paren(Expr::var("unsafePerformIO")))),
    )]);
    let p = ParsedProgram::Parsed(Module::new(vec![Decl::fun(vec![eq])]));
    assert_eq!(run(Rule::not_used("unsafePerformIO"), &p).len(), 1);
}

#[test]
fn not_used_in_comprehension_and_case_fails() {
    let body = Expr::case(
        Expr::var("xs"),
        vec![Alt::new(
            Pattern::var("ys"),
            Expr::let_in(
                vec![],
                Expr::do_block(vec![
                    Stmt::generator(Pattern::var("v"), Expr::var("ys")),
                    Stmt::qualifier(Expr::app(
                        Expr::var("unsafePerformIO"),
                        Expr::lit(Literal::string("x")),
                    )),
                ]),
            ),
        )],
    );
    let p = program("f", vec![Pattern::var("xs")], body);
    assert_eq!(run(Rule::not_used("unsafePerformIO"), &p).len(), 1);
}

#[test]
fn verdict_for_single_failing_rule_is_fail() {
    let p = program("f", vec![Pattern::var("x")], Expr::var("x"));
    let eval = evaluate(&Requirement::new("no f", vec![Rule::not_defined("f")]), &p);
    assert_eq!(eval.verdict, Verdict::Fail);
}
