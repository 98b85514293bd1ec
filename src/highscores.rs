//! High score service boundary and local JSON-backed implementation
//!
//! The core only ever reads a snapshot of the table and submits new entries.
//! Persistence failures are non-fatal by design: the table keeps working in
//! memory and the degraded state is surfaced through a status message the
//! scenes can display.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed capacity of the leaderboard
pub const MAX_HIGH_SCORES: usize = 5;

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player initials, at most 3 uppercase letters
    pub name: String,
    pub score: u32,
}

/// Persistence faults of the local store. All recovered locally.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Score service consumed by the menu and the gameplay session
pub trait ScoreService {
    /// Refresh the in-memory table from the backing store
    fn load(&mut self);
    /// Snapshot of the table, ordered descending by score
    fn get_top_scores(&self) -> Vec<HighScoreEntry>;
    /// Whether a score would earn a spot on the table
    fn is_high_score(&self, score: u32) -> bool;
    /// Insert an entry (if it qualifies) and persist
    fn add_high_score(&mut self, name: &str, score: u32);
    /// Degraded-state message for display, if any
    fn get_status_message(&self) -> Option<String>;
}

/// JSON-file-backed leaderboard.
///
/// Keeps the table sorted descending and trimmed to [`MAX_HIGH_SCORES`].
/// Any I/O or parse failure drops to in-memory operation and sets the
/// status message; gameplay is never interrupted.
#[derive(Debug)]
pub struct LocalScoreStore {
    path: PathBuf,
    entries: Vec<HighScoreEntry>,
    status: Option<String>,
}

impl LocalScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            status: None,
        }
    }

    fn read_file(&self) -> Result<Vec<HighScoreEntry>, PersistenceError> {
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write_file(&self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }
}

impl ScoreService for LocalScoreStore {
    fn load(&mut self) {
        match self.read_file() {
            Ok(entries) => {
                self.entries = entries;
                self.normalize();
                self.status = None;
                log::info!("Loaded {} high scores", self.entries.len());
            }
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score file yet, starting fresh");
                self.status = None;
            }
            Err(e) => {
                log::warn!("High score load failed: {}", e);
                self.status = Some("High scores unavailable - playing offline".to_string());
            }
        }
    }

    fn get_top_scores(&self) -> Vec<HighScoreEntry> {
        self.entries.clone()
    }

    fn is_high_score(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    fn add_high_score(&mut self, name: &str, score: u32) {
        if !self.is_high_score(score) {
            return;
        }
        self.entries.push(HighScoreEntry {
            name: name.to_string(),
            score,
        });
        self.normalize();
        match self.write_file() {
            Ok(()) => {
                log::info!("High score saved: {} - {}", name, score);
                self.status = None;
            }
            Err(e) => {
                log::warn!("High score save failed: {}", e);
                self.status = Some("Could not save score - storage unavailable".to_string());
            }
        }
    }

    fn get_status_message(&self) -> Option<String> {
        self.status.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> LocalScoreStore {
        LocalScoreStore::new(dir.path().join("highscores.json"))
    }

    #[test]
    fn test_entries_sorted_descending_and_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        for (name, score) in [
            ("AAA", 100),
            ("BBB", 500),
            ("CCC", 300),
            ("DDD", 200),
            ("EEE", 400),
            ("FFF", 250),
        ] {
            store.add_high_score(name, score);
        }
        let top = store.get_top_scores();
        assert_eq!(top.len(), MAX_HIGH_SCORES);
        let scores: Vec<u32> = top.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![500, 400, 300, 250, 200]);
    }

    #[test]
    fn test_qualification_boundaries() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        assert!(!store.is_high_score(0));
        // Any nonzero score qualifies while the table has room
        assert!(store.is_high_score(1));

        for i in 1..=MAX_HIGH_SCORES as u32 {
            store.add_high_score("XXX", i * 100);
        }
        // Table full: must beat the lowest entry, ties do not count
        assert!(!store.is_high_score(100));
        assert!(store.is_high_score(101));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.json");

        let mut store = LocalScoreStore::new(&path);
        store.add_high_score("ABC", 520);
        store.add_high_score("DEF", 40);

        let mut reloaded = LocalScoreStore::new(&path);
        reloaded.load();
        assert_eq!(
            reloaded.get_top_scores(),
            vec![
                HighScoreEntry {
                    name: "ABC".to_string(),
                    score: 520
                },
                HighScoreEntry {
                    name: "DEF".to_string(),
                    score: 40
                },
            ]
        );
        assert!(reloaded.get_status_message().is_none());
    }

    #[test]
    fn test_missing_file_is_not_degraded() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load();
        assert!(store.get_top_scores().is_empty());
        assert!(store.get_status_message().is_none());
    }

    #[test]
    fn test_corrupt_file_degrades_with_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = LocalScoreStore::new(&path);
        store.load();
        assert!(store.get_top_scores().is_empty());
        assert!(store.get_status_message().is_some());
    }

    #[test]
    fn test_unwritable_path_keeps_table_in_memory() {
        let mut store = LocalScoreStore::new("/nonexistent-dir/highscores.json");
        store.add_high_score("AAA", 300);
        assert_eq!(store.get_top_scores().len(), 1);
        assert!(store.get_status_message().is_some());
    }
}
