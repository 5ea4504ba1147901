//! Errors for the edges of the engine (files, JSON, configuration).
//!
//! The per-tick core never fails; only loading inputs can.

use std::path::PathBuf;

/// Failures while loading recordings or configuration
#[derive(Debug, thiserror::Error)]
pub enum GestureError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GestureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GestureError>;
