//! Rule, requirement and verdict types.

use std::fmt;

use brrr_req_repr::Module;
use serde::{Deserialize, Serialize};

use crate::checks::{
    DefinedByFunctionRule, MatchesExpectedRule, NotDefinedRule, NotUsedRule, SimpleParamsRule,
    UsesAllParamsRule,
};

/// Fixed diagnostic for programs that did not parse.
pub const UNPARSABLE_MESSAGE: &str = "Could not check this requirement.";

/// Fixed diagnostic for rule kinds this version does not know.
pub const UNRECOGNIZED_MESSAGE: &str = "Could not understand this requirement.";

/// The kinds of rule that have a checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    DefinedByFunction,
    MatchesExpected,
    HasSimpleParams,
    UsesAllParams,
    NotDefined,
    NotUsed,
}

impl RuleKind {
    /// All rule kinds.
    pub fn all() -> &'static [RuleKind] {
        &[
            RuleKind::DefinedByFunction,
            RuleKind::MatchesExpected,
            RuleKind::HasSimpleParams,
            RuleKind::UsesAllParams,
            RuleKind::NotDefined,
            RuleKind::NotUsed,
        ]
    }

    /// Short kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::DefinedByFunction => "defined-by-function",
            RuleKind::MatchesExpected => "matches-expected",
            RuleKind::HasSimpleParams => "has-simple-params",
            RuleKind::UsesAllParams => "uses-all-params",
            RuleKind::NotDefined => "not-defined",
            RuleKind::NotUsed => "not-used",
        }
    }

    /// What the rule checks.
    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::DefinedByFunction => {
                "Every body of the target is an application headed by the given function, \
                 looking through parentheses and the final expression of local bindings."
            }
            RuleKind::MatchesExpected => {
                "The target's right-hand sides, with source positions erased, have the \
                 expected fingerprint."
            }
            RuleKind::HasSimpleParams => {
                "Every parameter of every equation of the target is a variable, a wildcard, \
                 or a tuple or parenthesization of simple parameters."
            }
            RuleKind::UsesAllParams => {
                "Every variable bound by the target's parameters is referenced in the \
                 equation's body or local bindings."
            }
            RuleKind::NotDefined => "The target is not defined anywhere.",
            RuleKind::NotUsed => "The target is not referenced anywhere.",
        }
    }

    /// Parse a kind from its kebab-case or snake_case name.
    pub fn parse_name(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all().iter().copied().find(|kind| kind.name() == normalized)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A checker for one rule instance.
pub trait Check: Send + Sync {
    /// The rule kind.
    fn kind(&self) -> RuleKind;

    /// Check a parsed module; an empty result means the rule holds.
    fn check(&self, module: &Module) -> Vec<Diagnostic>;
}

/// One declarative rule about a submitted program.
///
/// Deserializes from a table tagged by `kind`. Unknown kinds become
/// [`Rule::Unrecognized`] rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    DefinedByFunction(DefinedByFunctionRule),
    MatchesExpected(MatchesExpectedRule),
    HasSimpleParams(SimpleParamsRule),
    UsesAllParams(UsesAllParamsRule),
    NotDefined(NotDefinedRule),
    NotUsed(NotUsedRule),
    #[serde(other)]
    Unrecognized,
}

impl Rule {
    /// `target` must be defined directly in terms of `via`.
    pub fn defined_by_function(target: impl Into<String>, via: impl Into<String>) -> Self {
        Self::DefinedByFunction(DefinedByFunctionRule {
            target: target.into(),
            via: via.into(),
        })
    }

    /// `target` must have the given fingerprint.
    pub fn matches_expected(target: impl Into<String>, fingerprint: u64) -> Self {
        Self::MatchesExpected(MatchesExpectedRule {
            target: target.into(),
            fingerprint,
        })
    }

    /// `target` must not pattern-match on its parameters.
    pub fn has_simple_params(target: impl Into<String>) -> Self {
        Self::HasSimpleParams(SimpleParamsRule {
            target: target.into(),
        })
    }

    /// `target` must use all of its parameters.
    pub fn uses_all_params(target: impl Into<String>) -> Self {
        Self::UsesAllParams(UsesAllParamsRule {
            target: target.into(),
        })
    }

    /// `target` must not be defined.
    pub fn not_defined(target: impl Into<String>) -> Self {
        Self::NotDefined(NotDefinedRule {
            target: target.into(),
        })
    }

    /// `target` must not be referenced.
    pub fn not_used(target: impl Into<String>) -> Self {
        Self::NotUsed(NotUsedRule {
            target: target.into(),
        })
    }

    /// The checker for this rule, or `None` when the kind is unknown.
    pub fn checker(&self) -> Option<&dyn Check> {
        match self {
            Rule::DefinedByFunction(rule) => Some(rule),
            Rule::MatchesExpected(rule) => Some(rule),
            Rule::HasSimpleParams(rule) => Some(rule),
            Rule::UsesAllParams(rule) => Some(rule),
            Rule::NotDefined(rule) => Some(rule),
            Rule::NotUsed(rule) => Some(rule),
            Rule::Unrecognized => None,
        }
    }

    /// The rule kind, or `None` when unknown.
    pub fn kind(&self) -> Option<RuleKind> {
        self.checker().map(|check| check.kind())
    }

    /// The name the rule is about, if it has one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Rule::DefinedByFunction(rule) => Some(&rule.target),
            Rule::MatchesExpected(rule) => Some(&rule.target),
            Rule::HasSimpleParams(rule) => Some(&rule.target),
            Rule::UsesAllParams(rule) => Some(&rule.target),
            Rule::NotDefined(rule) => Some(&rule.target),
            Rule::NotUsed(rule) => Some(&rule.target),
            Rule::Unrecognized => None,
        }
    }
}

/// A named group of rules that must all hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Requirement {
    pub description: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Requirement {
    pub fn new(description: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            description: description.into(),
            rules,
        }
    }
}

/// A human-readable explanation of one rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Diagnostic {
    pub message: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl PartialEq<&str> for Diagnostic {
    fn eq(&self, other: &&str) -> bool {
        self.message == *other
    }
}

/// Outcome of evaluating one requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The program parsed and every rule holds.
    Pass,
    /// The program parsed and at least one rule failed.
    Fail,
    /// The program did not parse.
    Inconclusive,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail => write!(f, "fail"),
            Verdict::Inconclusive => write!(f, "inconclusive"),
        }
    }
}

/// The description, verdict and diagnostics for one requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub description: String,
    pub verdict: Verdict,
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    /// Diagnostic messages as plain strings.
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(Diagnostic::as_str).collect()
    }
}
