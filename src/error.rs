//! file: error.rs
//! author: Jacob Xie
//! date: 2025/12/17 21:12:30 Wednesday
//! brief: error types for the library

use std::path::PathBuf;

/// Failures while loading or validating [`crate::config::Settings`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("grid {cols}x{rows} cannot hold an initial body of {initial_length}")]
    GridTooSmall {
        cols: i32,
        rows: i32,
        initial_length: usize,
    },

    #[error("invalid pacing: {0}")]
    Pacing(&'static str),
}

/// Failures of the high-score file. Never fatal to a running session.
#[derive(Debug, thiserror::Error)]
pub enum ScoreStoreError {
    #[error("high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("high score file {path} holds {raw:?}, not an integer")]
    Parse { path: PathBuf, raw: String },
}
