//! Single-slot save file.
//!
//! The slot is a JSON document written atomically (temp file + rename). Every
//! public operation is infallible from the caller's point of view: failures
//! are logged and treated as "no save present".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;

use crate::content::Language;
use crate::error::{StorageError, StorageResult};
use crate::scene::{CardId, Character};

/// File name of the slot inside the data directory.
pub const SAVE_FILE_NAME: &str = "save.json";

/// Persisted snapshot of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    /// Player left edge.
    pub player_x: f64,
    /// Player top edge.
    pub player_y: f64,
    /// Character being played.
    pub current_character: Character,
    /// Cards opened at least once.
    pub visited_cards: BTreeSet<CardId>,
    /// Whether sound effects were on.
    pub audio_enabled: bool,
    /// UI language.
    pub language: Language,
    /// Milliseconds since the Unix epoch when the snapshot was taken.
    pub timestamp: u64,
}

/// Milliseconds since the Unix epoch, saturating on clock errors.
#[must_use]
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// The one save slot.
#[derive(Debug, Clone)]
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    /// Slot backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot in the per-user data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoProjectDir`] when the platform has no home
    /// directory to resolve.
    pub fn default_path() -> StorageResult<PathBuf> {
        let dirs = ProjectDirs::from("dev", "folioquest", "FolioQuest")
            .ok_or(StorageError::NoProjectDir)?;
        Ok(dirs.data_local_dir().join(SAVE_FILE_NAME))
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the slot with `record`. Returns whether it was written.
    #[must_use]
    pub fn save(&self, record: &SaveRecord) -> bool {
        match self.write_record(record) {
            Ok(()) => {
                log::info!("saved game to {}", self.path.display());
                true
            }
            Err(e) => {
                log::warn!("could not save game: {e}");
                false
            }
        }
    }

    /// Read the slot; a missing, unreadable or corrupt slot is `None`.
    #[must_use]
    pub fn load(&self) -> Option<SaveRecord> {
        if !self.path.exists() {
            return None;
        }
        match self.read_record() {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("ignoring save at {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Whether a slot file is present (it may still be corrupt).
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Delete the slot. Returns whether a file was removed.
    #[must_use]
    pub fn clear(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("cleared save at {}", self.path.display());
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                log::warn!("could not clear save: {e}");
                false
            }
        }
    }

    /// Read and decode the slot, reporting why it failed.
    ///
    /// # Errors
    ///
    /// [`StorageError::Io`] if the file cannot be read and
    /// [`StorageError::Corrupt`] if it is not a valid record.
    pub fn read_record(&self) -> StorageResult<SaveRecord> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_record(&self, record: &SaveRecord) -> StorageResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(record)?;
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
