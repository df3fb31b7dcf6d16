//! # Ledger File
//!
//! Single-writer JSON persistence for the channel registry and block height.
//!
//! A sibling `<ledger>.lock` file is held with an exclusive `fs2` lock for the
//! whole load → execute → save sequence. Saves write a temporary file and
//! rename it over the ledger, so a crash mid-write leaves the previous state.

use fs2::FileExt;
use sc_03_state_channels::ChannelRegistry;
use serde::{Deserialize, Serialize};
use shared_types::BlockHeight;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Persisted ledger contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Height of the last committed block.
    pub height: BlockHeight,
    /// Every channel ever opened.
    pub channels: ChannelRegistry,
}

/// Ledger persistence errors.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Filesystem failure.
    #[error("Ledger I/O error at {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The ledger file does not contain a valid snapshot.
    #[error("Ledger file {path} is corrupt: {source}")]
    Corrupt {
        /// File involved
        path: PathBuf,
        /// Parse error
        source: serde_json::Error,
    },
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> LedgerError + '_ {
    move |source| LedgerError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Handle to a ledger file on disk.
#[derive(Clone, Debug)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    /// Ledger at `path`. Nothing is touched until [`LedgerFile::lock`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ledger path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Take the exclusive writer lock, blocking until it is free.
    pub fn lock(&self) -> Result<LedgerLock, LedgerError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }

        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(io_err(&lock_path))?;
        file.lock_exclusive().map_err(io_err(&lock_path))?;

        debug!(ledger = %self.path.display(), "Ledger locked");

        Ok(LedgerLock {
            ledger: self.clone(),
            lock_file: file,
        })
    }

    /// Load under the lock and release it immediately.
    pub fn read(&self) -> Result<LedgerState, LedgerError> {
        self.lock()?.load()
    }
}

/// Exclusive access to a ledger; released on drop.
#[derive(Debug)]
pub struct LedgerLock {
    ledger: LedgerFile,
    lock_file: File,
}

impl LedgerLock {
    /// Read the current state. A missing or empty file is a fresh ledger.
    pub fn load(&self) -> Result<LedgerState, LedgerError> {
        let path = &self.ledger.path;
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(LedgerState::default()),
            Err(e) => return Err(io_err(path)(e)),
        };

        if contents.trim().is_empty() {
            return Ok(LedgerState::default());
        }

        serde_json::from_str(&contents).map_err(|source| LedgerError::Corrupt {
            path: path.clone(),
            source,
        })
    }

    /// Persist `state`, replacing the previous snapshot atomically.
    pub fn save(&self, state: &LedgerState) -> Result<(), LedgerError> {
        let path = &self.ledger.path;
        let tmp = self.ledger.tmp_path();

        let json = serde_json::to_vec_pretty(state).map_err(|source| LedgerError::Corrupt {
            path: path.clone(),
            source,
        })?;

        let mut file = File::create(&tmp).map_err(io_err(&tmp))?;
        file.write_all(&json).map_err(io_err(&tmp))?;
        file.sync_all().map_err(io_err(&tmp))?;
        fs::rename(&tmp, path).map_err(io_err(path))?;

        debug!(
            ledger = %path.display(),
            height = state.height,
            channels = state.channels.len(),
            "Ledger saved"
        );
        Ok(())
    }
}

impl Drop for LedgerLock {
    fn drop(&mut self) {
        if let Err(e) = self.lock_file.unlock() {
            warn!(
                ledger = %self.ledger.path.display(),
                error = %e,
                "Failed to release ledger lock"
            );
        }
    }
}
