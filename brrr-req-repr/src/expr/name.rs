//! Identifiers and (possibly qualified) names

use serde::{Deserialize, Serialize};

/// A binder or reference name.
///
/// Alphanumeric names (`map`, `Just`) are `Ident`; operator names
/// (`+`, `<$>`, `:|`) are `Symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Name {
    Ident(String),
    Symbol(String),
}

impl Name {
    /// Create an identifier name
    pub fn ident(s: impl Into<String>) -> Self {
        Self::Ident(s.into())
    }

    /// Create an operator name
    pub fn symbol(s: impl Into<String>) -> Self {
        Self::Symbol(s.into())
    }

    /// The identifier text, if this is a bare identifier
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(s) => Some(s),
            Self::Symbol(_) => None,
        }
    }

    /// Is this the identifier `name`? Operators never match.
    pub fn is_ident(&self, name: &str) -> bool {
        self.as_ident() == Some(name)
    }

    /// Raw text of the name regardless of kind
    pub fn text(&self) -> &str {
        match self {
            Self::Ident(s) | Self::Symbol(s) => s,
        }
    }
}

/// A reference name, optionally qualified by a module path (`Data.List.sort`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QName {
    pub module: Option<String>,
    pub name: Name,
}

impl QName {
    /// Unqualified name
    pub fn unqual(name: Name) -> Self {
        Self { module: None, name }
    }

    /// Module-qualified name
    pub fn qual(module: impl Into<String>, name: Name) -> Self {
        Self {
            module: Some(module.into()),
            name,
        }
    }

    /// Does this reference denote the identifier `target`?
    /// The module qualifier is ignored.
    pub fn refers_to(&self, target: &str) -> bool {
        self.name.is_ident(target)
    }
}
