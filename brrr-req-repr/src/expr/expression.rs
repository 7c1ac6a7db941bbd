//! Expression types

use serde::{Deserialize, Serialize};

use super::location::{Range, WithLoc};
use super::pattern::Pattern;
use super::{Literal, Name, QName};
use crate::decl::{Binds, Decl, Rhs, Type};

/// Expression with source location
pub type Expr = WithLoc<Expr_>;

/// Statement with source location (do-blocks, guards, comprehensions)
pub type Stmt = WithLoc<Stmt_>;

/// Expression underlying type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr_ {
    // === Atoms ===
    /// Variable reference `x`, `Data.List.sort`, `(+)`
    Var(QName),
    /// Constructor reference `Just`, `True`
    Con(QName),
    /// Literal `42`, `"hello"`
    Lit(Literal),

    // === Application ===
    /// Prefix application `f x`
    App(Box<Expr>, Box<Expr>),
    /// Infix application `x + y`, ``x `div` y``.
    /// The operator is itself a `Var` or `Con` expression.
    InfixApp(Box<Expr>, Box<Expr>, Box<Expr>),
    /// Negation `-x`
    Neg(Box<Expr>),
    /// Left section `(x +)`
    LeftSection(Box<Expr>, Box<Expr>),
    /// Right section `(+ x)`
    RightSection(Box<Expr>, Box<Expr>),

    // === Binding forms ===
    /// Lambda `\p₁ p₂ -> e`
    Lambda(Vec<Pattern>, Box<Expr>),
    /// Local bindings `let { ... } in e`
    Let(Binds, Box<Expr>),

    // === Control flow ===
    /// Conditional `if c then t else f`
    If(Box<Expr>, Box<Expr>, Box<Expr>),
    /// Case analysis `case e of { alts }`
    Case(Box<Expr>, Vec<Alt>),
    /// Do-block `do { stmts }`
    Do(Vec<Stmt>),

    // === Data ===
    /// Tuple `(a, b)`
    Tuple(Vec<Expr>),
    /// List `[a, b]`
    List(Vec<Expr>),
    /// List comprehension `[e | stmts]`
    ListComp(Box<Expr>, Vec<Stmt>),
    /// Arithmetic sequence `[a..]`, `[a, b..c]`
    EnumFrom {
        from: Box<Expr>,
        then: Option<Box<Expr>>,
        to: Option<Box<Expr>>,
    },

    // === Misc ===
    /// Parenthesized expression `(e)`
    Paren(Box<Expr>),
    /// Type annotation `e :: T`
    Annotated(Box<Expr>, Type),
}

/// Statement underlying type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt_ {
    /// Binding statement `p <- e`
    Generator(Pattern, Expr),
    /// Plain expression (a guard condition, or an action in a do-block)
    Qualifier(Expr),
    /// Local bindings `let { ... }`
    Let(Binds),
}

/// Alternative in a case expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alt {
    /// Source range
    pub range: Range,
    /// Pattern to match
    pub pattern: Pattern,
    /// Body, possibly guarded
    pub rhs: Rhs,
    /// Trailing `where` bindings
    pub binds: Option<Binds>,
}

impl Alt {
    /// Create an unguarded alternative
    pub fn new(pattern: Pattern, body: Expr) -> Self {
        Self {
            range: Range::SYNTHETIC,
            pattern,
            rhs: Rhs::UnGuarded(body),
            binds: None,
        }
    }
}

impl Expr {
    /// Synthetic unqualified variable reference
    pub fn var(name: &str) -> Self {
        WithLoc::synthetic(Expr_::Var(QName::unqual(Name::ident(name))))
    }

    /// Synthetic module-qualified variable reference
    pub fn qvar(module: &str, name: &str) -> Self {
        WithLoc::synthetic(Expr_::Var(QName::qual(module, Name::ident(name))))
    }

    /// Synthetic operator reference `(+)`
    pub fn op(symbol: &str) -> Self {
        WithLoc::synthetic(Expr_::Var(QName::unqual(Name::symbol(symbol))))
    }

    /// Synthetic constructor reference
    pub fn con(name: &str) -> Self {
        WithLoc::synthetic(Expr_::Con(QName::unqual(Name::ident(name))))
    }

    /// Synthetic literal
    pub fn lit(lit: Literal) -> Self {
        WithLoc::synthetic(Expr_::Lit(lit))
    }

    /// Synthetic integer literal
    pub fn int(v: i64) -> Self {
        Self::lit(Literal::Int(v))
    }

    /// Synthetic application `f x`
    pub fn app(func: Expr, arg: Expr) -> Self {
        WithLoc::synthetic(Expr_::App(Box::new(func), Box::new(arg)))
    }

    /// Synthetic curried application `f a b c`
    pub fn apps(func: Expr, args: Vec<Expr>) -> Self {
        args.into_iter().fold(func, Self::app)
    }

    /// Synthetic operator application `l <op> r`
    pub fn infix(left: Expr, op: &str, right: Expr) -> Self {
        WithLoc::synthetic(Expr_::InfixApp(
            Box::new(left),
            Box::new(Self::op(op)),
            Box::new(right),
        ))
    }

    /// Synthetic backtick application ``l `name` r``
    pub fn backtick(left: Expr, name: &str, right: Expr) -> Self {
        WithLoc::synthetic(Expr_::InfixApp(
            Box::new(left),
            Box::new(Self::var(name)),
            Box::new(right),
        ))
    }

    /// Synthetic lambda
    pub fn lambda(params: Vec<Pattern>, body: Expr) -> Self {
        WithLoc::synthetic(Expr_::Lambda(params, Box::new(body)))
    }

    /// Synthetic `let decls in body`
    pub fn let_in(decls: Vec<Decl>, body: Expr) -> Self {
        WithLoc::synthetic(Expr_::Let(Binds::new(decls), Box::new(body)))
    }

    /// Synthetic conditional
    pub fn if_then_else(cond: Expr, then: Expr, otherwise: Expr) -> Self {
        WithLoc::synthetic(Expr_::If(Box::new(cond), Box::new(then), Box::new(otherwise)))
    }

    /// Synthetic case expression
    pub fn case(scrutinee: Expr, alts: Vec<Alt>) -> Self {
        WithLoc::synthetic(Expr_::Case(Box::new(scrutinee), alts))
    }

    /// Synthetic do-block
    pub fn do_block(stmts: Vec<Stmt>) -> Self {
        WithLoc::synthetic(Expr_::Do(stmts))
    }

    /// Synthetic tuple
    pub fn tuple(elems: Vec<Expr>) -> Self {
        WithLoc::synthetic(Expr_::Tuple(elems))
    }

    /// Synthetic list
    pub fn list(elems: Vec<Expr>) -> Self {
        WithLoc::synthetic(Expr_::List(elems))
    }

    /// Synthetic parenthesized expression
    pub fn paren(inner: Expr) -> Self {
        WithLoc::synthetic(Expr_::Paren(Box::new(inner)))
    }
}

impl Stmt {
    /// Synthetic guard/action statement
    pub fn qualifier(expr: Expr) -> Self {
        WithLoc::synthetic(Stmt_::Qualifier(expr))
    }

    /// Synthetic generator `p <- e`
    pub fn generator(pattern: Pattern, expr: Expr) -> Self {
        WithLoc::synthetic(Stmt_::Generator(pattern, expr))
    }

    /// Synthetic `let` statement
    pub fn let_stmt(decls: Vec<Decl>) -> Self {
        WithLoc::synthetic(Stmt_::Let(Binds::new(decls)))
    }
}
