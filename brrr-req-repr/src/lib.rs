//! Program tree for structural requirement checking
//!
//! The tree is produced by an external parser and only ever read here.
//! Every node that came from source text carries a [`Range`]; positions are
//! ignored by [`fingerprint`].

pub mod expr;
pub mod decl;
pub mod module;
pub mod encoding;
mod error;

pub use decl::{Binds, ConDecl, Decl, Decl_, GuardedRhs, Match, Rhs, Type, Type_};
pub use encoding::{canonical_form, fingerprint, FINGERPRINT_MODULUS};
pub use error::{ReprError, ReprResult};
pub use expr::{
    Alt, Expr, Expr_, Literal, Name, Pattern, Pattern_, Pos, QName, Range, Stmt, Stmt_, WithLoc,
};
pub use module::{Module, ParsedProgram};
