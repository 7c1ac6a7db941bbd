//! Declarations, equations and right-hand sides

use serde::{Deserialize, Serialize};

use crate::expr::{Expr, Name, Pattern, QName, Range, Stmt, WithLoc};

/// Declaration with source location
pub type Decl = WithLoc<Decl_>;

/// Type expression with source location
pub type Type = WithLoc<Type_>;

/// Declaration underlying type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl_ {
    /// Function binding: one or more equations `f p₁ p₂ = e`
    FunBind(Vec<Match>),
    /// Pattern binding `p = e` (a bare variable on the left is the common case)
    PatBind {
        pattern: Pattern,
        rhs: Rhs,
        binds: Option<Binds>,
    },
    /// Type signature `f, g :: T`
    TypeSig(Vec<Name>, Type),
    /// Algebraic data type `data T a = C₁ t | C₂`
    Data {
        name: Name,
        params: Vec<Name>,
        constructors: Vec<ConDecl>,
    },
}

/// One equation of a function binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Source range
    pub range: Range,
    /// Head identifier (or operator, for infix definitions)
    pub name: Name,
    /// Parameter patterns
    pub params: Vec<Pattern>,
    /// Body
    pub rhs: Rhs,
    /// Trailing `where` bindings
    pub binds: Option<Binds>,
}

/// Right-hand side of an equation or binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rhs {
    /// `= e`
    UnGuarded(Expr),
    /// `| g₁ = e₁ | g₂ = e₂`
    Guarded(Vec<GuardedRhs>),
}

/// One guarded alternative `| guards = body`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardedRhs {
    /// Source range
    pub range: Range,
    /// Guard statements (boolean conditions, pattern guards, lets)
    pub guards: Vec<Stmt>,
    /// Body selected when all guards hold
    pub body: Expr,
}

/// A block of local declarations (`let` or `where`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Binds {
    /// Source range
    pub range: Range,
    pub decls: Vec<Decl>,
}

/// Data constructor declaration `C t₁ t₂`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConDecl {
    /// Source range
    pub range: Range,
    pub name: Name,
    pub fields: Vec<Type>,
}

/// Type expression underlying type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type_ {
    /// Type variable `a`
    Var(Name),
    /// Type constructor `Int`, `Maybe`
    Con(QName),
    /// Function type `a -> b`
    Fun(Box<Type>, Box<Type>),
    /// Type application `Maybe a`
    App(Box<Type>, Box<Type>),
    /// List type `[a]`
    List(Box<Type>),
    /// Tuple type `(a, b)`
    Tuple(Vec<Type>),
}

impl Rhs {
    /// Every body expression: the single body, or each guarded body in order
    pub fn bodies(&self) -> Vec<&Expr> {
        match self {
            Self::UnGuarded(body) => vec![body],
            Self::Guarded(alts) => alts.iter().map(|alt| &alt.body).collect(),
        }
    }
}

impl GuardedRhs {
    /// Create a single-condition guarded alternative
    pub fn new(guard: Expr, body: Expr) -> Self {
        Self {
            range: Range::SYNTHETIC,
            guards: vec![Stmt::qualifier(guard)],
            body,
        }
    }
}

impl Binds {
    pub fn new(decls: Vec<Decl>) -> Self {
        Self {
            range: Range::SYNTHETIC,
            decls,
        }
    }
}

impl Match {
    /// Create an unguarded equation `name params = body`
    pub fn new(name: &str, params: Vec<Pattern>, body: Expr) -> Self {
        Self {
            range: Range::SYNTHETIC,
            name: Name::ident(name),
            params,
            rhs: Rhs::UnGuarded(body),
            binds: None,
        }
    }

    /// Create a guarded equation
    pub fn guarded(name: &str, params: Vec<Pattern>, alts: Vec<GuardedRhs>) -> Self {
        Self {
            range: Range::SYNTHETIC,
            name: Name::ident(name),
            params,
            rhs: Rhs::Guarded(alts),
            binds: None,
        }
    }

    /// Attach `where` bindings
    pub fn with_where(mut self, decls: Vec<Decl>) -> Self {
        self.binds = Some(Binds::new(decls));
        self
    }
}

impl Decl {
    /// Synthetic function binding
    pub fn fun(equations: Vec<Match>) -> Self {
        WithLoc::synthetic(Decl_::FunBind(equations))
    }

    /// Synthetic pattern binding `pattern = body`
    pub fn pat_bind(pattern: Pattern, body: Expr) -> Self {
        WithLoc::synthetic(Decl_::PatBind {
            pattern,
            rhs: Rhs::UnGuarded(body),
            binds: None,
        })
    }

    /// Synthetic variable binding `name = body`
    pub fn value(name: &str, body: Expr) -> Self {
        Self::pat_bind(Pattern::var(name), body)
    }

    /// Synthetic type signature
    pub fn type_sig(names: &[&str], ty: Type) -> Self {
        WithLoc::synthetic(Decl_::TypeSig(
            names.iter().map(|n| Name::ident(*n)).collect(),
            ty,
        ))
    }
}

impl Type {
    /// Synthetic type constructor
    pub fn con(name: &str) -> Self {
        WithLoc::synthetic(Type_::Con(QName::unqual(Name::ident(name))))
    }

    /// Synthetic function type
    pub fn fun(arg: Type, result: Type) -> Self {
        WithLoc::synthetic(Type_::Fun(Box::new(arg), Box::new(result)))
    }
}
