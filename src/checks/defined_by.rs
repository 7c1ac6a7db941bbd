//! "Defined directly using" checks.

use brrr_req_repr::{Binds, Decl, Decl_, Expr, Expr_, Module, Name, Pattern_, Rhs};
use serde::{Deserialize, Serialize};

use super::not_defined;
use crate::definitions::definitions_of;
use crate::rules::{Check, Diagnostic, RuleKind};

/// Every body of `target` must be an application headed by `via`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinedByFunctionRule {
    pub target: String,
    pub via: String,
}

impl Check for DefinedByFunctionRule {
    fn kind(&self) -> RuleKind {
        RuleKind::DefinedByFunction
    }

    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        let defs = definitions_of(module, &self.target);
        if defs.is_empty() {
            return vec![not_defined(&self.target)];
        }

        let direct = defs
            .into_iter()
            .flat_map(Rhs::bodies)
            .all(|body| is_headed_by(body, &self.via));
        if direct {
            Vec::new()
        } else {
            vec![Diagnostic::new(format!(
                "`{}` is not defined directly using `{}`.",
                self.target, self.via
            ))]
        }
    }
}

/// Follow the head of an expression: the function of an application, the
/// body of a `let`, the inside of parentheses, until none applies.
///
/// A bare variable bound by a simple `x = e` binding of an enclosing `let`
/// is replaced by `e`, so `let y = g x in y` is headed by `g`. Each binding
/// is followed at most once.
pub fn head_of(expr: &Expr) -> &Expr {
    let mut scopes: Vec<&Binds> = Vec::new();
    let mut followed: Vec<&Decl> = Vec::new();
    let mut current = expr;
    loop {
        current = match &current.value {
            Expr_::App(func, _) => &**func,
            Expr_::Paren(inner) => &**inner,
            Expr_::Let(binds, body) => {
                scopes.push(binds);
                &**body
            }
            Expr_::Var(qname) if qname.module.is_none() => {
                match local_binding(&scopes, &qname.name) {
                    Some((decl, bound))
                        if !followed.iter().any(|seen| std::ptr::eq(*seen, decl)) =>
                    {
                        followed.push(decl);
                        bound
                    }
                    _ => return current,
                }
            }
            _ => return current,
        };
    }
}

/// The innermost unguarded `name = e` binding among `scopes`.
fn local_binding<'a>(scopes: &[&'a Binds], name: &Name) -> Option<(&'a Decl, &'a Expr)> {
    scopes.iter().rev().copied().find_map(|binds| {
        binds.decls.iter().find_map(|decl| match &decl.value {
            Decl_::PatBind {
                pattern,
                rhs: Rhs::UnGuarded(body),
                ..
            } if matches!(&pattern.strip_parens().value, Pattern_::Var(var) if var == name) => {
                Some((decl, body))
            }
            _ => None,
        })
    })
}

fn is_headed_by(body: &Expr, via: &str) -> bool {
    matches!(&head_of(body).value, Expr_::Var(name) if name.refers_to(via))
}
