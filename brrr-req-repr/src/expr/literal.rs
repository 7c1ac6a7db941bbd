//! Literal value types

use serde::{Deserialize, Serialize};

/// Literal values appearing in expressions and patterns
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    /// Integer literal `42`
    Int(i64),
    /// Fractional literal `3.14`, kept as its source text for exact equality
    Frac(String),
    /// Character literal `'a'`
    Char(char),
    /// String literal `"hello"`
    String(String),
}

impl Literal {
    /// Create an integer literal
    pub const fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Create a fractional literal from its source text
    pub fn frac(text: impl Into<String>) -> Self {
        Self::Frac(text.into())
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create a char literal
    pub const fn char(c: char) -> Self {
        Self::Char(c)
    }
}
