use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{AtomicFileWriter, KeyValueStore, StoreError};

const VALUE_EXTENSION: &str = "json";

/// One file per key under a storage directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    writer: AtomicFileWriter,
    /// Per-value byte limit, mirroring browser storage quotas.
    quota: Option<usize>,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir.into()),
            quota: None,
        }
    }

    pub fn with_quota(mut self, limit: usize) -> Self {
        self.quota = Some(limit);
        self
    }

    pub fn dir(&self) -> &Path {
        self.writer.dir()
    }

    fn filename(key: &str) -> Result<String, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if valid {
            Ok(format!("{key}.{VALUE_EXTENSION}"))
        } else {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.dir().join(Self::filename(key)?);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let filename = Self::filename(key)?;
        if let Some(limit) = self.quota {
            if value.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed: value.len(),
                    limit,
                });
            }
        }
        self.writer.write(&filename, value)?;
        Ok(())
    }
}
