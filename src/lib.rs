//! Structural requirement checking for submitted programs.
//!
//! A [`Requirement`] groups declarative [`Rule`]s about how named
//! definitions are written ("`f` is defined directly using `g`", "`x` is never
//! used", ...). [`evaluate`] checks them against a program tree produced by an
//! external parser, without running the program, and returns a [`Verdict`]
//! with human-readable diagnostics.

pub mod checks;
pub mod config;
pub mod definitions;
pub mod engine;
pub mod error;
pub mod query;
pub mod rules;

pub use brrr_req_repr as repr;
pub use brrr_req_repr::{fingerprint, Module, ParsedProgram};
pub use checks::fingerprint_definition;
pub use config::{load_requirements, parse_requirements};
pub use definitions::{definitions_of, equations_of};
pub use engine::{check_rule, evaluate, evaluate_all};
pub use error::{ConfigError, Result};
pub use query::{collect_by_kind, fold_bool_by_kind, Combine, Node};
pub use rules::{
    Check, Diagnostic, Evaluation, Requirement, Rule, RuleKind, Verdict, UNPARSABLE_MESSAGE,
    UNRECOGNIZED_MESSAGE,
};
