//! Expression, pattern and name types with source location tracking.

mod location;
mod literal;
mod name;
mod pattern;
mod expression;

pub use location::{Pos, Range, WithLoc};
pub use literal::Literal;
pub use name::{Name, QName};
pub use pattern::{Pattern, Pattern_};
pub use expression::{Alt, Expr, Expr_, Stmt, Stmt_};
