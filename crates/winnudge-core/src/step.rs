//! Persisted move step.
//!
//! The step lives as a bare integer in `move_pixels.txt` inside the config
//! directory. The panel writes it; the listener reads it before every
//! action so a new value takes effect on the next key press.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::config;

/// Pixels per move when nothing valid is stored.
pub const DEFAULT_STEP: i32 = 40;

const STEP_FILE_NAME: &str = "move_pixels.txt";

/// Reads and writes the move step file.
#[derive(Debug, Clone)]
pub struct StepStore {
    path: PathBuf,
}

impl StepStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config dir>/move_pixels.txt`.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(config::config_dir()?.join(STEP_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored step, or [`DEFAULT_STEP`] when the file is
    /// missing, unreadable or does not hold an integer.
    pub fn load(&self) -> i32 {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_step(&content).unwrap_or_else(|| {
                tracing::debug!(path = %self.path.display(), "malformed move step, using default");
                DEFAULT_STEP
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => DEFAULT_STEP,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "could not read move step: {e}");
                DEFAULT_STEP
            }
        }
    }

    /// Writes `step`, creating the config directory if needed.
    pub fn save(&self, step: i32) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, step.to_string())?;
        tracing::info!(step, "move step saved");
        Ok(())
    }
}

/// Parses step text the way the store does: trimmed, base-10 integer.
pub fn parse_step(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Applies a panel nudge (+1, +5, -1, -5, ...) with a floor at zero.
pub fn nudge(current: i32, delta: i32) -> i32 {
    current.saturating_add(delta).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> StepStore {
        StepStore::new(dir.path().join(STEP_FILE_NAME))
    }

    #[test]
    fn missing_file_reads_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();

        // Act / Assert
        assert_eq!(store_in(&dir).load(), DEFAULT_STEP);
    }

    #[test]
    fn saved_value_reads_back() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).save(73).unwrap();

        // Act: a fresh store, like a fresh process
        let step = store_in(&dir).load();

        // Assert
        assert_eq!(step, 73);
    }

    #[test]
    fn non_numeric_content_reads_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "forty").unwrap();

        // Act / Assert
        assert_eq!(store.load(), DEFAULT_STEP);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "  25\r\n").unwrap();

        // Act / Assert
        assert_eq!(store.load(), 25);
    }

    #[test]
    fn save_creates_missing_directories() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = StepStore::new(dir.path().join("nested").join(STEP_FILE_NAME));

        // Act
        store.save(12).unwrap();

        // Assert
        assert_eq!(store.load(), 12);
    }

    #[test]
    fn nudge_floors_at_zero() {
        // Assert
        assert_eq!(nudge(40, 5), 45);
        assert_eq!(nudge(40, -1), 39);
        assert_eq!(nudge(3, -5), 0);
        assert_eq!(nudge(0, -1), 0);
    }
}
