//! Requirement-level aggregation: verdicts, ordering and unparsable input.

use brrr_req::repr::{Decl, Expr, Match, Module, ParsedProgram, Pattern};
use brrr_req::{
    evaluate, evaluate_all, Requirement, Rule, Verdict, UNPARSABLE_MESSAGE, UNRECOGNIZED_MESSAGE,
};

/// `double x = x * 2` with a type signature.
fn double_program() -> ParsedProgram {
    use brrr_req::repr::Type;

    Module::new(vec![
        Decl::type_sig(&["double"], Type::fun(Type::con("Int"), Type::con("Int"))),
        Decl::fun(vec![Match::new(
            "double",
            vec![Pattern::var("x")],
            Expr::infix(Expr::var("x"), "*", Expr::int(2)),
        )]),
    ])
    .into()
}

fn every_rule_kind() -> Vec<Rule> {
    vec![
        Rule::defined_by_function("double", "times"),
        Rule::matches_expected("double", 7),
        Rule::has_simple_params("double"),
        Rule::uses_all_params("double"),
        Rule::not_defined("double"),
        Rule::not_used("x"),
        Rule::Unrecognized,
    ]
}

#[test]
fn unparsable_is_inconclusive_for_any_rules() {
    for rules in [vec![], every_rule_kind(), vec![Rule::Unrecognized]] {
        let eval = evaluate(&Requirement::new("r", rules), &ParsedProgram::Unparsable);
        assert_eq!(eval.verdict, Verdict::Inconclusive);
        assert_eq!(eval.messages(), vec![UNPARSABLE_MESSAGE]);
    }
}

#[test]
fn diagnostics_accumulate_in_rule_order() {
    let req = Requirement::new(
        "double is written plainly",
        vec![
            Rule::not_defined("double"),
            Rule::has_simple_params("double"),
            Rule::defined_by_function("double", "times"),
        ],
    );
    let eval = evaluate(&req, &double_program());

    assert_eq!(eval.description, "double is written plainly");
    assert_eq!(eval.verdict, Verdict::Fail);
    assert_eq!(
        eval.messages(),
        vec![
            "`double` should not be defined.",
            "`double` is not defined directly using `times`.",
        ]
    );
}

#[test]
fn every_rule_runs_without_short_circuit() {
    let eval = evaluate(&Requirement::new("all", every_rule_kind()), &double_program());
    let messages = eval.messages();

    assert_eq!(messages.len(), 5);
    assert_eq!(messages[0], "`double` is not defined directly using `times`.");
    assert!(messages[1].starts_with("`double` does not have the expected definition."));
    assert_eq!(messages[2], "`double` should not be defined.");
    assert_eq!(messages[3], "`x` should not be used.");
    assert_eq!(messages[4], UNRECOGNIZED_MESSAGE);
}

#[test]
fn passing_requirement() {
    let req = Requirement::new(
        "double uses its argument",
        vec![
            Rule::uses_all_params("double"),
            Rule::has_simple_params("double"),
            Rule::not_used("unsafePerformIO"),
            Rule::not_defined("triple"),
        ],
    );
    let eval = evaluate(&req, &double_program());
    assert_eq!(eval.verdict, Verdict::Pass);
    assert!(eval.diagnostics.is_empty());
}

#[test]
fn batch_matches_individual_evaluation() {
    let program = double_program();
    let reqs: Vec<Requirement> = every_rule_kind()
        .into_iter()
        .enumerate()
        .map(|(i, rule)| Requirement::new(format!("#{i}"), vec![rule]))
        .collect();

    let batch = evaluate_all(&reqs, &program);
    let single: Vec<_> = reqs.iter().map(|r| evaluate(r, &program)).collect();
    assert_eq!(batch, single);

    let inconclusive = evaluate_all(&reqs, &ParsedProgram::Unparsable);
    assert!(inconclusive.iter().all(|e| e.verdict == Verdict::Inconclusive));
}

#[test]
fn evaluation_does_not_touch_the_tree() {
    let program = double_program();
    let before = program.clone();
    let _ = evaluate(&Requirement::new("all", every_rule_kind()), &program);
    assert_eq!(program, before);
}
