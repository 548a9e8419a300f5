//! file: score.rs
//! author: Jacob Xie
//! date: 2025/12/17 21:48:02 Wednesday
//! brief: high score persistence

use std::{
    cell::Cell,
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::ScoreStoreError;

/// Where the best score lives between runs.
pub trait HighScoreStore {
    /// Stored best, or 0 when nothing usable is stored.
    fn load(&self) -> u32;

    fn save(&self, score: u32) -> Result<(), ScoreStoreError>;
}

/// A plain decimal integer in a text file, overwritten whole on save.
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<u32>, ScoreStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ScoreStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| ScoreStoreError::Parse {
                path: self.path.clone(),
                raw,
            })
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(score) => score.unwrap_or(0),
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable high score");
                0
            }
        }
    }

    fn save(&self, score: u32) -> Result<(), ScoreStoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| ScoreStoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Keeps the best score in process; nothing touches disk.
#[derive(Default)]
pub struct MemoryHighScoreStore {
    best: Cell<u32>,
    saves: Cell<usize>,
}

impl MemoryHighScoreStore {
    pub fn with_score(score: u32) -> Self {
        Self {
            best: Cell::new(score),
            saves: Cell::new(0),
        }
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        self.best.get()
    }

    fn save(&self, score: u32) -> Result<(), ScoreStoreError> {
        self.best.set(score);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
