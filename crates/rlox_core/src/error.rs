//! Errors raised outside the scanning pass.
//!
//! Lexical problems are never surfaced through this type; they are reported
//! as diagnostics and scanning continues.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the driver before any source text is scanned.
#[derive(Debug, Error)]
pub enum RloxError {
    /// A script file could not be read.
    #[error("could not read script '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RloxError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RloxError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RloxError>;
