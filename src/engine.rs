//! Requirement evaluation.
//!
//! A requirement's rules are independent: every rule runs and all
//! diagnostics are kept, in rule order. Evaluation is read-only over the
//! tree, so [`evaluate_all`] runs requirements concurrently with rayon.

use brrr_req_repr::{Module, ParsedProgram};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::rules::{
    Diagnostic, Evaluation, Requirement, Rule, Verdict, UNPARSABLE_MESSAGE, UNRECOGNIZED_MESSAGE,
};

/// Evaluate one requirement against a parse outcome.
///
/// An unparsable program is `Inconclusive` with a single fixed diagnostic,
/// whatever the rules are. Otherwise the verdict is `Pass` exactly when no
/// rule produced a diagnostic.
pub fn evaluate(requirement: &Requirement, program: &ParsedProgram) -> Evaluation {
    let Some(module) = program.module() else {
        info!("Requirement '{}': program did not parse", requirement.description);
        return Evaluation {
            description: requirement.description.clone(),
            verdict: Verdict::Inconclusive,
            diagnostics: vec![Diagnostic::new(UNPARSABLE_MESSAGE)],
        };
    };

    let diagnostics: Vec<Diagnostic> = requirement
        .rules
        .iter()
        .flat_map(|rule| check_rule(rule, module))
        .collect();
    let verdict = if diagnostics.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    info!(
        "Requirement '{}': {} ({} diagnostic(s))",
        requirement.description,
        verdict,
        diagnostics.len()
    );
    Evaluation {
        description: requirement.description.clone(),
        verdict,
        diagnostics,
    }
}

/// Evaluate many requirements against the same program, in parallel.
/// Output order follows input order.
pub fn evaluate_all(requirements: &[Requirement], program: &ParsedProgram) -> Vec<Evaluation> {
    debug!("Evaluating {} requirement(s)", requirements.len());
    requirements
        .par_iter()
        .map(|requirement| evaluate(requirement, program))
        .collect()
}

/// Run a single rule. Unknown rule kinds yield a fixed diagnostic.
pub fn check_rule(rule: &Rule, module: &Module) -> Vec<Diagnostic> {
    let Some(checker) = rule.checker() else {
        warn!("Skipping rule of unrecognized kind");
        return vec![Diagnostic::new(UNRECOGNIZED_MESSAGE)];
    };

    let diagnostics = checker.check(module);
    debug!(
        "Rule {} on `{}`: {} diagnostic(s)",
        checker.kind(),
        rule.target().unwrap_or_default(),
        diagnostics.len()
    );
    diagnostics
}
