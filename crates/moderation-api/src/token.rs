//! Bearer token storage.
//!
//! [`TokenStore`] keeps the current token in memory and mirrors every change
//! into a [`KeyValueStore`] slot named [`TOKEN_KEY`], so a later process can
//! pick the session back up.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

/// Key of the persisted token slot.
pub const TOKEN_KEY: &str = "token";

/// A synchronous string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key was never set or has been removed.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> io::Result<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

/// Directory-backed store: one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for storage. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value.trim_end().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Holder of the current bearer token.
///
/// Cloning shares the same token; a login through one clone is visible to all.
#[derive(Clone)]
pub struct TokenStore {
    current: Arc<RwLock<Option<String>>>,
    storage: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    /// Open a store, loading any previously persisted token.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> io::Result<Self> {
        let current = storage.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        debug!(restored = current.is_some(), "Opened token store");
        Ok(Self {
            current: Arc::new(RwLock::new(current)),
            storage,
        })
    }

    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            storage: Arc::new(MemoryStore::new()),
        }
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a token is present.
    pub fn has_token(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replace the token. `None` clears both the memory and persisted copies.
    pub fn set_token(&self, token: Option<String>) -> io::Result<()> {
        match &token {
            Some(value) => self.storage.set(TOKEN_KEY, value)?,
            None => self.storage.remove(TOKEN_KEY)?,
        }
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = token;
        Ok(())
    }

    /// Forget the token.
    pub fn clear_token(&self) -> io::Result<()> {
        self.set_token(None)
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_token", &self.has_token())
            .finish()
    }
}
