//! Locating the definitions of a name anywhere in a module.

use brrr_req_repr::{Decl_, Match, Module, Pattern, Pattern_, Rhs};

use crate::query::{collect_by_kind, Node};

/// Right-hand sides of every definition of `name`, in document order.
///
/// A name is defined by each function equation whose head is the identifier
/// `name`, and by each pattern binding whose pattern is the bare variable
/// `name` (parentheses allowed). Local `let`/`where` definitions count too.
pub fn definitions_of<'a>(module: &'a Module, name: &str) -> Vec<&'a Rhs> {
    collect_by_kind(module, |node| match node {
        Node::Match(equation) if equation.name.is_ident(name) => Some(&equation.rhs),
        Node::Decl(decl) => match &decl.value {
            Decl_::PatBind { pattern, rhs, .. } if binds_exactly(pattern, name) => Some(rhs),
            _ => None,
        },
        _ => None,
    })
}

/// Every function equation whose head is the identifier `name`.
pub fn equations_of<'a>(module: &'a Module, name: &str) -> Vec<&'a Match> {
    collect_by_kind(module, |node| match node {
        Node::Match(equation) if equation.name.is_ident(name) => Some(equation),
        _ => None,
    })
}

fn binds_exactly(pattern: &Pattern, name: &str) -> bool {
    matches!(&pattern.strip_parens().value, Pattern_::Var(var) if var.is_ident(name))
}
