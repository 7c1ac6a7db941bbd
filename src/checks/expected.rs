//! Fingerprint comparison against a reference definition.

use std::fmt;

use brrr_req_repr::{fingerprint, Module, ReprResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::not_defined;
use crate::definitions::definitions_of;
use crate::rules::{Check, Diagnostic, RuleKind};

/// The right-hand sides of `target` must fingerprint to `fingerprint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchesExpectedRule {
    pub target: String,
    pub fingerprint: u64,
}

impl Check for MatchesExpectedRule {
    fn kind(&self) -> RuleKind {
        RuleKind::MatchesExpected
    }

    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        match fingerprint_definition(module, &self.target) {
            Ok(None) => vec![not_defined(&self.target)],
            Ok(Some(actual)) if actual == self.fingerprint => Vec::new(),
            Ok(Some(actual)) => vec![self.mismatch(actual)],
            Err(err) => {
                warn!("Could not fingerprint `{}`: {}", self.target, err);
                vec![self.mismatch(err)]
            }
        }
    }
}

impl MatchesExpectedRule {
    fn mismatch(&self, computed: impl fmt::Display) -> Diagnostic {
        Diagnostic::new(format!(
            "`{}` does not have the expected definition. ({})",
            self.target, computed
        ))
    }
}

/// Fingerprint of all right-hand sides of `name`, in document order.
///
/// `Ok(None)` when `name` is not defined. Run this against a reference
/// solution to obtain the value for [`MatchesExpectedRule`].
pub fn fingerprint_definition(module: &Module, name: &str) -> ReprResult<Option<u64>> {
    let defs = definitions_of(module, name);
    if defs.is_empty() {
        return Ok(None);
    }
    fingerprint(&defs).map(Some)
}
