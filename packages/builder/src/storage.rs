//! Durable storage for the persisted part of the builder state.
//!
//! One named entry holds `{ "state": { sections, theme }, "version": 0 }`.
//! Selection and preview mode never reach storage.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::section::Section;
use crate::store::Theme;

/// Name of the storage entry
pub const STORAGE_KEY: &str = "website-builder-store";

/// Layout version of the stored envelope
pub const STORAGE_VERSION: u32 = 0;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed stored state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported stored state version {0}")]
    UnsupportedVersion(u32),
}

/// Persisted subset of the builder state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

fn encode(state: &PersistedState) -> Result<String, StorageError> {
    let envelope = Envelope {
        state: state.clone(),
        version: STORAGE_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

fn decode(raw: &str) -> Result<PersistedState, StorageError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    if envelope.version != STORAGE_VERSION {
        return Err(StorageError::UnsupportedVersion(envelope.version));
    }
    Ok(envelope.state)
}

/// Storage backend for builder state
pub trait StateStorage {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<PersistedState>, StorageError>;

    fn save(&self, state: &PersistedState) -> Result<(), StorageError>;
}

/// JSON file in a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStorage for FileStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        decode(&raw).map(Some)
    }

    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, encode(state)?)?;
        Ok(())
    }
}

/// In-process storage for tests and hosts without a disk
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entry: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored entry
    pub fn raw(&self) -> Option<String> {
        self.entry.borrow().clone()
    }

    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.entry.borrow_mut() = Some(raw.into());
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        match self.entry.borrow().as_deref() {
            Some(raw) => decode(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        let raw = encode(state)?;
        *self.entry.borrow_mut() = Some(raw);
        Ok(())
    }
}
