//! Rule checkers.
//!
//! Each rule struct carries its parameters and implements [`Check`]; an
//! empty diagnostic list means the rule holds.
//!
//! [`Check`]: crate::rules::Check

mod defined_by;
mod expected;
mod names;
mod params;

pub use defined_by::{head_of, DefinedByFunctionRule};
pub use expected::{fingerprint_definition, MatchesExpectedRule};
pub use names::{NotDefinedRule, NotUsedRule};
pub use params::{is_simple_param, SimpleParamsRule, UsesAllParamsRule};

use crate::rules::Diagnostic;

fn not_defined(target: &str) -> Diagnostic {
    Diagnostic::new(format!("`{target}` is not defined."))
}
