//! Generic whole-tree queries.
//!
//! [`Node`] is a borrowed view over every kind of tree node. The two query
//! primitives walk the entire tree depth-first in document order, descending
//! into bodies, guards, local bindings, patterns and parentheses alike:
//!
//! - [`collect_by_kind`] gathers whatever an extractor returns for each node.
//! - [`fold_bool_by_kind`] folds a boolean test with AND or OR; nodes the
//!   test does not apply to contribute the identity of the combinator.

use brrr_req_repr::{
    Alt, Binds, ConDecl, Decl, Decl_, Expr, Expr_, GuardedRhs, Match, Module, Pattern, Pattern_,
    Rhs, Stmt, Stmt_, Type, Type_,
};

/// Borrowed reference to one node of the program tree, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Module(&'a Module),
    Decl(&'a Decl),
    Match(&'a Match),
    Rhs(&'a Rhs),
    GuardedRhs(&'a GuardedRhs),
    Binds(&'a Binds),
    Alt(&'a Alt),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Pattern(&'a Pattern),
    ConDecl(&'a ConDecl),
    Type(&'a Type),
}

/// Boolean combinator for [`fold_bool_by_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Logical AND; identity `true`.
    All,
    /// Logical OR; identity `false`.
    Any,
}

impl Combine {
    /// Result contributed by nodes the test does not apply to.
    pub const fn identity(self) -> bool {
        match self {
            Self::All => true,
            Self::Any => false,
        }
    }

    const fn apply(self, acc: bool, value: bool) -> bool {
        match self {
            Self::All => acc && value,
            Self::Any => acc || value,
        }
    }
}

impl<'a> Node<'a> {
    /// Direct children in document order.
    pub fn children(self) -> Vec<Node<'a>> {
        let mut out = Vec::new();
        match self {
            Node::Module(module) => out.extend(module.decls.iter().map(Node::Decl)),
            Node::Decl(decl) => match &decl.value {
                Decl_::FunBind(equations) => out.extend(equations.iter().map(Node::Match)),
                Decl_::PatBind {
                    pattern,
                    rhs,
                    binds,
                } => {
                    out.push(Node::Pattern(pattern));
                    out.push(Node::Rhs(rhs));
                    out.extend(binds.iter().map(Node::Binds));
                }
                Decl_::TypeSig(_, ty) => out.push(Node::Type(ty)),
                Decl_::Data { constructors, .. } => {
                    out.extend(constructors.iter().map(Node::ConDecl));
                }
            },
            Node::Match(equation) => {
                out.extend(equation.params.iter().map(Node::Pattern));
                out.push(Node::Rhs(&equation.rhs));
                out.extend(equation.binds.iter().map(Node::Binds));
            }
            Node::Rhs(rhs) => match rhs {
                Rhs::UnGuarded(body) => out.push(Node::Expr(body)),
                Rhs::Guarded(alts) => out.extend(alts.iter().map(Node::GuardedRhs)),
            },
            Node::GuardedRhs(alt) => {
                out.extend(alt.guards.iter().map(Node::Stmt));
                out.push(Node::Expr(&alt.body));
            }
            Node::Binds(binds) => out.extend(binds.decls.iter().map(Node::Decl)),
            Node::Alt(alt) => {
                out.push(Node::Pattern(&alt.pattern));
                out.push(Node::Rhs(&alt.rhs));
                out.extend(alt.binds.iter().map(Node::Binds));
            }
            Node::Stmt(stmt) => match &stmt.value {
                Stmt_::Generator(pattern, expr) => {
                    out.push(Node::Pattern(pattern));
                    out.push(Node::Expr(expr));
                }
                Stmt_::Qualifier(expr) => out.push(Node::Expr(expr)),
                Stmt_::Let(binds) => out.push(Node::Binds(binds)),
            },
            Node::Expr(expr) => expr_children(expr, &mut out),
            Node::Pattern(pattern) => pattern_children(pattern, &mut out),
            Node::ConDecl(con) => out.extend(con.fields.iter().map(Node::Type)),
            Node::Type(ty) => match &ty.value {
                Type_::Var(_) | Type_::Con(_) => {}
                Type_::Fun(a, b) | Type_::App(a, b) => {
                    out.push(Node::Type(a));
                    out.push(Node::Type(b));
                }
                Type_::List(inner) => out.push(Node::Type(inner)),
                Type_::Tuple(elems) => out.extend(elems.iter().map(Node::Type)),
            },
        }
        out
    }

    /// Pre-order traversal of this node and all of its descendants.
    pub fn walk(self, visit: &mut impl FnMut(Node<'a>)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

fn expr_children<'a>(expr: &'a Expr, out: &mut Vec<Node<'a>>) {
    match &expr.value {
        Expr_::Var(_) | Expr_::Con(_) | Expr_::Lit(_) => {}
        Expr_::App(a, b) | Expr_::LeftSection(a, b) | Expr_::RightSection(a, b) => {
            out.push(Node::Expr(a));
            out.push(Node::Expr(b));
        }
        Expr_::InfixApp(left, op, right) => {
            out.push(Node::Expr(left));
            out.push(Node::Expr(op));
            out.push(Node::Expr(right));
        }
        Expr_::Neg(inner) | Expr_::Paren(inner) => out.push(Node::Expr(inner)),
        Expr_::Lambda(params, body) => {
            out.extend(params.iter().map(Node::Pattern));
            out.push(Node::Expr(body));
        }
        Expr_::Let(binds, body) => {
            out.push(Node::Binds(binds));
            out.push(Node::Expr(body));
        }
        Expr_::If(cond, then, otherwise) => {
            out.push(Node::Expr(cond));
            out.push(Node::Expr(then));
            out.push(Node::Expr(otherwise));
        }
        Expr_::Case(scrutinee, alts) => {
            out.push(Node::Expr(scrutinee));
            out.extend(alts.iter().map(Node::Alt));
        }
        Expr_::Do(stmts) => out.extend(stmts.iter().map(Node::Stmt)),
        Expr_::Tuple(elems) | Expr_::List(elems) => out.extend(elems.iter().map(Node::Expr)),
        Expr_::ListComp(body, stmts) => {
            out.push(Node::Expr(body));
            out.extend(stmts.iter().map(Node::Stmt));
        }
        Expr_::EnumFrom { from, then, to } => {
            out.push(Node::Expr(from));
            out.extend(then.iter().map(|e| Node::Expr(e)));
            out.extend(to.iter().map(|e| Node::Expr(e)));
        }
        Expr_::Annotated(inner, ty) => {
            out.push(Node::Expr(inner));
            out.push(Node::Type(ty));
        }
    }
}

fn pattern_children<'a>(pattern: &'a Pattern, out: &mut Vec<Node<'a>>) {
    match &pattern.value {
        Pattern_::Wild | Pattern_::Var(_) | Pattern_::Lit(_) | Pattern_::NPlusK(_, _) => {}
        Pattern_::Con(_, args) | Pattern_::Tuple(args) | Pattern_::List(args) => {
            out.extend(args.iter().map(Node::Pattern));
        }
        Pattern_::InfixCon(left, _, right) => {
            out.push(Node::Pattern(left));
            out.push(Node::Pattern(right));
        }
        Pattern_::Paren(inner)
        | Pattern_::As(_, inner)
        | Pattern_::Lazy(inner)
        | Pattern_::Bang(inner) => out.push(Node::Pattern(inner)),
    }
}

impl<'a> From<&'a Module> for Node<'a> {
    fn from(module: &'a Module) -> Self {
        Node::Module(module)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Node::Expr(expr)
    }
}

impl<'a> From<&'a Pattern> for Node<'a> {
    fn from(pattern: &'a Pattern) -> Self {
        Node::Pattern(pattern)
    }
}

/// Collect results from every node under (and including) `root`.
///
/// `extract` yields nothing for node kinds it does not care about. Results
/// are concatenated in traversal order.
pub fn collect_by_kind<'a, T, I>(
    root: impl Into<Node<'a>>,
    mut extract: impl FnMut(Node<'a>) -> I,
) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let mut results = Vec::new();
    root.into().walk(&mut |node| results.extend(extract(node)));
    results
}

/// Fold a boolean test over every node under (and including) `root`.
///
/// `test` returns `None` for node kinds it does not apply to; those nodes
/// contribute `combine.identity()` and never change the result.
pub fn fold_bool_by_kind<'a>(
    root: impl Into<Node<'a>>,
    mut test: impl FnMut(Node<'a>) -> Option<bool>,
    combine: Combine,
) -> bool {
    let mut acc = combine.identity();
    root.into().walk(&mut |node| {
        let value = test(node).unwrap_or(combine.identity());
        acc = combine.apply(acc, value);
    });
    acc
}
