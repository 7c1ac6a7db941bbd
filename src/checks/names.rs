//! Forbidden definitions and forbidden references.

use brrr_req_repr::{Expr_, Module};
use serde::{Deserialize, Serialize};

use crate::definitions::definitions_of;
use crate::query::{fold_bool_by_kind, Combine, Node};
use crate::rules::{Check, Diagnostic, RuleKind};

/// `target` must not be defined anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotDefinedRule {
    pub target: String,
}

impl Check for NotDefinedRule {
    fn kind(&self) -> RuleKind {
        RuleKind::NotDefined
    }

    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        if definitions_of(module, &self.target).is_empty() {
            Vec::new()
        } else {
            vec![Diagnostic::new(format!(
                "`{}` should not be defined.",
                self.target
            ))]
        }
    }
}

/// `target` must not be referenced anywhere, qualified or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotUsedRule {
    pub target: String,
}

impl Check for NotUsedRule {
    fn kind(&self) -> RuleKind {
        RuleKind::NotUsed
    }

    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        let used = fold_bool_by_kind(
            module,
            |node| match node {
                Node::Expr(expr) => match &expr.value {
                    Expr_::Var(name) => Some(name.refers_to(&self.target)),
                    _ => None,
                },
                _ => None,
            },
            Combine::Any,
        );
        if used {
            vec![Diagnostic::new(format!(
                "`{}` should not be used.",
                self.target
            ))]
        } else {
            Vec::new()
        }
    }
}
