//! Parameter-shape and parameter-usage checks.

use brrr_req_repr::{Expr_, Match, Module, Name, Pattern, Pattern_};
use serde::{Deserialize, Serialize};

use super::not_defined;
use crate::definitions::definitions_of;
use crate::query::{collect_by_kind, fold_bool_by_kind, Combine, Node};
use crate::rules::{Check, Diagnostic, RuleKind};

/// No equation of `target` may pattern-match on its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimpleParamsRule {
    pub target: String,
}

impl Check for SimpleParamsRule {
    fn kind(&self) -> RuleKind {
        RuleKind::HasSimpleParams
    }

    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        let params: Vec<&Pattern> = collect_by_kind(module, |node| match node {
            Node::Match(equation) if equation.name.is_ident(&self.target) => {
                equation.params.iter().collect()
            }
            _ => Vec::new(),
        });

        if params.is_empty() {
            vec![Diagnostic::new(format!(
                "`{}` is not defined as a function.",
                self.target
            ))]
        } else if params.into_iter().all(is_simple_param) {
            Vec::new()
        } else {
            vec![Diagnostic::new(format!(
                "`{}` has equations with pattern matching.",
                self.target
            ))]
        }
    }
}

/// A lowercase variable, a wildcard, or a tuple or parenthesization of
/// simple parameters.
pub fn is_simple_param(pattern: &Pattern) -> bool {
    match &pattern.value {
        Pattern_::Var(name) => name.text().chars().next().is_some_and(char::is_lowercase),
        Pattern_::Wild => true,
        Pattern_::Tuple(elems) => elems.iter().all(is_simple_param),
        Pattern_::Paren(inner) => is_simple_param(inner),
        Pattern_::Lit(_)
        | Pattern_::NPlusK(_, _)
        | Pattern_::Con(_, _)
        | Pattern_::InfixCon(_, _, _)
        | Pattern_::List(_)
        | Pattern_::As(_, _)
        | Pattern_::Lazy(_)
        | Pattern_::Bang(_) => false,
    }
}

/// Every equation of `target` must reference each variable its parameters bind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsesAllParamsRule {
    pub target: String,
}

impl Check for UsesAllParamsRule {
    fn kind(&self) -> RuleKind {
        RuleKind::UsesAllParams
    }

    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        if definitions_of(module, &self.target).is_empty() {
            return vec![not_defined(&self.target)];
        }

        let all_used = fold_bool_by_kind(
            module,
            |node| match node {
                Node::Match(equation) if equation.name.is_ident(&self.target) => {
                    Some(uses_all_params(equation))
                }
                _ => None,
            },
            Combine::All,
        );
        if all_used {
            Vec::new()
        } else {
            vec![Diagnostic::new(format!(
                "`{}` has unused arguments.",
                self.target
            ))]
        }
    }
}

fn uses_all_params(equation: &Match) -> bool {
    bound_params(equation)
        .into_iter()
        .all(|name| is_referenced(equation, name))
}

/// Variables bound by the parameter patterns: plain variables, `n+k`
/// patterns and as-patterns, at any depth.
fn bound_params(equation: &Match) -> Vec<&Name> {
    equation
        .params
        .iter()
        .flat_map(|param| {
            collect_by_kind(param, |node| match node {
                Node::Pattern(pattern) => match &pattern.value {
                    Pattern_::Var(name) | Pattern_::NPlusK(name, _) | Pattern_::As(name, _) => {
                        Some(name)
                    }
                    _ => None,
                },
                _ => None,
            })
        })
        .collect()
}

/// Is `name` referenced anywhere in the equation's body or `where` block?
fn is_referenced(equation: &Match, name: &Name) -> bool {
    let refers = |node: Node<'_>| match node {
        Node::Expr(expr) => match &expr.value {
            Expr_::Var(qname) => Some(qname.module.is_none() && qname.name == *name),
            _ => None,
        },
        _ => None,
    };

    fold_bool_by_kind(Node::Rhs(&equation.rhs), refers, Combine::Any)
        || equation
            .binds
            .as_ref()
            .is_some_and(|binds| fold_bool_by_kind(Node::Binds(binds), refers, Combine::Any))
}
