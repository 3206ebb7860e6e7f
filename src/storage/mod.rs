//! Best score persistence
//!
//! `JsonFileStore` keeps the best score in a small JSON document. Storage is
//! optional: the controller treats every error from a store as "no saved
//! score" and keeps playing.

use crate::error::{Result, SimonError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Get/set for the best score
pub trait ScoreStore {
    fn load(&mut self) -> Result<u32>;
    fn save(&mut self, best_score: u32) -> Result<()>;
}

/// On-disk record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u32,
}

/// Best score in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    /// A missing file is a best score of 0, not an error
    fn load(&mut self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(SimonError::Storage(format!("{}: {}", self.path.display(), e))),
        };
        let record: BestScoreRecord = serde_json::from_str(&text)
            .map_err(|e| SimonError::Storage(format!("{}: {}", self.path.display(), e)))?;
        Ok(record.best_score)
    }

    fn save(&mut self, best_score: u32) -> Result<()> {
        let text = serde_json::to_string_pretty(&BestScoreRecord { best_score })
            .map_err(|e| SimonError::Storage(e.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|e| SimonError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

/// In-memory store, for headless play and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best_score: u32,
}

impl MemoryStore {
    pub fn new(best_score: u32) -> Self {
        Self { best_score }
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32> {
        Ok(self.best_score)
    }

    fn save(&mut self, best_score: u32) -> Result<()> {
        self.best_score = best_score;
        Ok(())
    }
}
