//! Requirement definition files.
//!
//! # Example
//!
//! ```toml
//! [[requirement]]
//! description = "square is defined via pow"
//! rules = [
//!   { kind = "defined_by_function", target = "square", via = "pow" },
//!   { kind = "not_used", target = "unsafePerformIO" },
//! ]
//!
//! [[requirement]]
//! description = "sumTo matches the reference solution"
//! rules = [{ kind = "matches_expected", target = "sumTo", fingerprint = 418_233 }]
//! ```
//!
//! Rules with an unknown `kind` load as [`Rule::Unrecognized`]. Any other
//! unknown key, on a requirement or on a known rule, is an error.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::rules::{Requirement, Rule};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequirementFile {
    #[serde(default, rename = "requirement")]
    requirements: Vec<Requirement>,
}

/// Parse requirement definitions from TOML text.
pub fn parse_requirements(content: &str) -> Result<Vec<Requirement>> {
    let file: RequirementFile = toml::from_str(content)?;
    validate(&file.requirements)?;
    Ok(file.requirements)
}

/// Load requirement definitions from a TOML file.
pub fn load_requirements(path: &Path) -> Result<Vec<Requirement>> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: RequirementFile =
        toml::from_str(&content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
    validate(&file.requirements)?;

    debug!(
        "Loaded {} requirement(s) from {}",
        file.requirements.len(),
        path.display()
    );
    Ok(file.requirements)
}

/// Names must be non-empty; nothing else is checked up front.
fn validate(requirements: &[Requirement]) -> Result<()> {
    for requirement in requirements {
        for rule in &requirement.rules {
            let mut names = rule.target().into_iter().collect::<Vec<_>>();
            if let Rule::DefinedByFunction(inner) = rule {
                names.push(&inner.via);
            }
            if names.iter().any(|name| name.trim().is_empty()) {
                return Err(ConfigError::Invalid {
                    requirement: requirement.description.clone(),
                    detail: format!(
                        "{} rule has an empty name",
                        rule.kind().map_or("unrecognized", |kind| kind.name())
                    ),
                });
            }
        }
    }
    Ok(())
}
