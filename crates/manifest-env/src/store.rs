//! The per-environment snapshot store
//!
//! Each named environment persists as `.env.<name>` inside one directory.
//! Reads of a missing file yield an empty snapshot (the first sync of a
//! fresh environment starts from nothing); writes merge over a fresh read
//! of the file so concurrent writers cannot be wholly clobbered, then
//! land atomically.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dotenv::DotenvDocument;
use crate::error::{Error, Result};
use crate::io;

const ENV_FILE_PREFIX: &str = ".env.";

/// Read/merge-write access to the environment files of one directory.
#[derive(Debug, Clone)]
pub struct EnvStore {
    dir: PathBuf,
}

impl EnvStore {
    /// Create a store rooted at the given directory. The directory need
    /// not exist yet; it is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the environment files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a named environment.
    pub fn env_file(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{ENV_FILE_PREFIX}{name}"))
    }

    /// Names of the environments present in the store, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir).map_err(|e| Error::io(&self.dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.dir, e))?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if let Some(name) = file_name.strip_prefix(ENV_FILE_PREFIX)
                && !name.is_empty()
                && !name.ends_with(".tmp")
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Read the current snapshot of a named environment.
    ///
    /// A missing file is an empty snapshot, not an error.
    pub fn read(&self, name: &str) -> Result<BTreeMap<String, String>> {
        let path = self.env_file(name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(DotenvDocument::parse(&content).values()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(?path, "env file missing, treating as empty snapshot");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Merge updates into a named environment and persist atomically.
    ///
    /// The file is re-read immediately before the write so keys written by
    /// others since our last read survive; only the updated keys change.
    pub fn write(&self, name: &str, updates: &BTreeMap<String, String>) -> Result<()> {
        let path = self.env_file(name);
        let mut document = match fs::read_to_string(&path) {
            Ok(content) => DotenvDocument::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DotenvDocument::default(),
            Err(e) => return Err(Error::io(path, e)),
        };
        document.merge(updates);
        tracing::debug!(?path, keys = updates.len(), "writing environment snapshot");
        io::write_atomic(&path, document.serialize().as_bytes())
    }
}
