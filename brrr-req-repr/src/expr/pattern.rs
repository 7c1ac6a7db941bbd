//! Pattern types for parameters, bindings and case alternatives

use serde::{Deserialize, Serialize};

use super::location::WithLoc;
use super::{Literal, Name, QName};

/// Pattern with source location
pub type Pattern = WithLoc<Pattern_>;

/// Pattern underlying type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pattern_ {
    /// Wildcard pattern `_`
    Wild,

    /// Variable binding pattern `x`
    Var(Name),

    /// Literal pattern `0`, `'a'`, `"yes"`
    Lit(Literal),

    /// Numeric-offset pattern `n+1`
    NPlusK(Name, i64),

    /// Constructor application `Just x`, `Nothing`
    Con(QName, Vec<Pattern>),

    /// Infix constructor application `x : xs`
    InfixCon(Box<Pattern>, QName, Box<Pattern>),

    /// Tuple pattern `(p₁, p₂, ...)`
    Tuple(Vec<Pattern>),

    /// List pattern `[p₁, p₂]`
    List(Vec<Pattern>),

    /// Parenthesized pattern `(p)`
    Paren(Box<Pattern>),

    /// As-pattern `xs@p`
    As(Name, Box<Pattern>),

    /// Irrefutable pattern `~p`
    Lazy(Box<Pattern>),

    /// Strict pattern `!p`
    Bang(Box<Pattern>),
}

impl Pattern {
    /// Synthetic wildcard pattern
    pub fn wild() -> Self {
        WithLoc::synthetic(Pattern_::Wild)
    }

    /// Synthetic variable pattern
    pub fn var(name: &str) -> Self {
        WithLoc::synthetic(Pattern_::Var(Name::ident(name)))
    }

    /// Synthetic literal pattern
    pub fn lit(lit: Literal) -> Self {
        WithLoc::synthetic(Pattern_::Lit(lit))
    }

    /// Synthetic `n+k` pattern
    pub fn n_plus_k(name: &str, k: i64) -> Self {
        WithLoc::synthetic(Pattern_::NPlusK(Name::ident(name), k))
    }

    /// Synthetic constructor pattern
    pub fn con(con: &str, args: Vec<Pattern>) -> Self {
        WithLoc::synthetic(Pattern_::Con(QName::unqual(Name::ident(con)), args))
    }

    /// Synthetic infix constructor pattern, e.g. `cons(x, ":", xs)`
    pub fn infix_con(left: Pattern, op: &str, right: Pattern) -> Self {
        WithLoc::synthetic(Pattern_::InfixCon(
            Box::new(left),
            QName::unqual(Name::symbol(op)),
            Box::new(right),
        ))
    }

    /// Synthetic tuple pattern
    pub fn tuple(elems: Vec<Pattern>) -> Self {
        WithLoc::synthetic(Pattern_::Tuple(elems))
    }

    /// Synthetic list pattern
    pub fn list(elems: Vec<Pattern>) -> Self {
        WithLoc::synthetic(Pattern_::List(elems))
    }

    /// Synthetic parenthesized pattern
    pub fn paren(inner: Pattern) -> Self {
        WithLoc::synthetic(Pattern_::Paren(Box::new(inner)))
    }

    /// Synthetic as-pattern
    pub fn as_pat(name: &str, inner: Pattern) -> Self {
        WithLoc::synthetic(Pattern_::As(Name::ident(name), Box::new(inner)))
    }

    /// Peel off any number of enclosing parentheses
    pub fn strip_parens(&self) -> &Pattern {
        let mut pat = self;
        while let Pattern_::Paren(inner) = &pat.value {
            pat = inner;
        }
        pat
    }
}
