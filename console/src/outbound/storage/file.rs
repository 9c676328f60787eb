//! Key-value storage persisted as one file per key.
//!
//! Each entry lives at `<dir>/<key>.json`. Writes go to a hidden temporary
//! file that is renamed over the entry, so a reader sees either the old or
//! the new value.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{KeyValueStorage, KeyValueStorageError, is_valid_storage_key};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Raised when the storage directory cannot be created or opened.
#[derive(Debug, Error)]
#[error("failed to open storage directory {path}: {source}")]
pub struct StorageDirError {
    /// Directory that could not be prepared.
    pub path: PathBuf,
    /// Underlying filesystem error.
    #[source]
    pub source: io::Error,
}

/// Entries stored as files inside one capability-scoped directory.
#[derive(Debug)]
pub struct FileKeyValueStorage {
    dir: Dir,
}

fn entry_name(key: &str) -> Result<String, KeyValueStorageError> {
    if is_valid_storage_key(key) {
        Ok(format!("{key}.json"))
    } else {
        Err(KeyValueStorageError::invalid_key(key))
    }
}

impl FileKeyValueStorage {
    /// Open `path`, creating it and any missing parents.
    pub fn open(path: &Path) -> Result<Self, StorageDirError> {
        let to_error = |source| StorageDirError {
            path: path.to_path_buf(),
            source,
        };
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(to_error)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(to_error)?;
        debug!(path = %path.display(), "opened file storage");
        Ok(Self { dir })
    }

    /// Wrap an already opened directory.
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    fn write_atomic(&self, name: &str, value: &str) -> io::Result<()> {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_name = format!(".{name}.tmp.{}.{counter}", std::process::id());

        let written = (|| {
            let mut options = OpenOptions::new();
            options.write(true).create_new(true);
            let mut file = self.dir.open_with(&tmp_name, &options)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            self.replace(&tmp_name, name)
        })();
        if written.is_err() {
            drop(self.dir.remove_file(&tmp_name));
        }
        written
    }

    #[cfg(windows)]
    fn replace(&self, tmp_name: &str, name: &str) -> io::Result<()> {
        match self.dir.remove_file(name) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
        self.dir.rename(tmp_name, &self.dir, name)
    }

    #[cfg(not(windows))]
    fn replace(&self, tmp_name: &str, name: &str) -> io::Result<()> {
        self.dir.rename(tmp_name, &self.dir, name)
    }
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError> {
        let name = entry_name(key)?;
        let mut file = match self.dir.open(&name) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(KeyValueStorageError::io(key, err.to_string())),
        };
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|err| KeyValueStorageError::io(key, err.to_string()))?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStorageError> {
        let name = entry_name(key)?;
        self.write_atomic(&name, value)
            .map_err(|err| KeyValueStorageError::io(key, err.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStorageError> {
        let name = entry_name(key)?;
        match self.dir.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueStorageError::io(key, err.to_string())),
        }
    }
}
