//! JSON-document persistence for the lock state.
//!
//! The whole [`LockState`] lives in one pretty-printed JSON file. It is
//! loaded (or created with defaults) once at startup, kept in memory, and
//! rewritten wholesale after every mutation.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use shieldx_core::lock_state::LockState;
use tokio::sync::Mutex;

/// Errors raised while reading or writing the state document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to {action} state file {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("State file {path} is not a valid lock state document: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode lock state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Whether [`StateStore::open`] found an existing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Loaded,
    Created,
}

/// File-backed holder of the single [`LockState`] document.
///
/// All access is serialized through one mutex, held across the full
/// read-modify-write of [`StateStore::update`], so every write on disk is a
/// complete document and the last writer wins.
#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    state: Mutex<LockState>,
}

impl StateStore {
    /// Load the document at `path`, creating it with defaults if absent.
    pub async fn open(path: impl Into<PathBuf>) -> Result<(Self, OpenOutcome), StoreError> {
        let path = path.into();

        let (state, outcome) = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let state = serde_json::from_slice::<LockState>(&bytes).map_err(|source| {
                    StoreError::Corrupt {
                        path: path.clone(),
                        source,
                    }
                })?;
                (state, OpenOutcome::Loaded)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let state = LockState::default();
                write_document(&path, &state).await?;
                (state, OpenOutcome::Created)
            }
            Err(source) => {
                return Err(StoreError::Io {
                    action: "read",
                    path,
                    source,
                })
            }
        };

        tracing::debug!(path = %path.display(), ?outcome, "Lock state document opened");

        Ok((
            Self {
                path,
                state: Mutex::new(state),
            },
            outcome,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A copy of the current document.
    pub async fn snapshot(&self) -> LockState {
        self.state.lock().await.clone()
    }

    /// Apply `mutate` to a copy of the document and persist the result.
    ///
    /// If `mutate` returns `Err`, nothing is written and the in-memory
    /// document is untouched; the inner error is handed back as `Ok(Err(_))`.
    /// The new document only becomes visible once the write has succeeded.
    pub async fn update<T, E, F>(&self, mutate: F) -> Result<Result<T, E>, StoreError>
    where
        F: FnOnce(&mut LockState) -> Result<T, E>,
    {
        let mut guard = self.state.lock().await;
        let mut next = guard.clone();

        let value = match mutate(&mut next) {
            Ok(value) => value,
            Err(err) => return Ok(Err(err)),
        };

        write_document(&self.path, &next).await?;
        *guard = next;

        Ok(Ok(value))
    }

    /// [`StateStore::update`] for mutations that cannot be rejected.
    pub async fn modify<T, F>(&self, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut LockState) -> T,
    {
        match self.update(|state| Ok::<_, Infallible>(mutate(state))).await? {
            Ok(value) => Ok(value),
            Err(never) => match never {},
        }
    }
}

/// Rewrite the whole document via a sibling temp file and rename, so a
/// reader never observes a partially written file.
async fn write_document(path: &Path, state: &LockState) -> Result<(), StoreError> {
    let io_err = |action: &'static str| {
        let path = path.to_path_buf();
        move |source: std::io::Error| StoreError::Io {
            action,
            path,
            source,
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(io_err("create directory for"))?;
    }

    let payload = serde_json::to_vec_pretty(state).map_err(StoreError::Encode)?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    tokio::fs::write(&temp_path, payload)
        .await
        .map_err(io_err("write"))?;
    tokio::fs::rename(&temp_path, path)
        .await
        .map_err(io_err("replace"))?;

    Ok(())
}
