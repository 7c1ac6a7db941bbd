//! Error types for requirement loading.
//!
//! Evaluation itself never fails; every problem with a submission is a
//! verdict. Only reading requirement definitions can go wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading requirement definitions.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid requirement file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid requirement file {}: {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid requirement '{requirement}': {detail}")]
    Invalid { requirement: String, detail: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
