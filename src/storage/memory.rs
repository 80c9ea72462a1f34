//! In-process blob store

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{StorageError, StorageResult};

use super::BlobStore;

/// Blob store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let blobs = self.blobs.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> StorageResult<()> {
        let mut blobs = self.blobs.lock().map_err(|_| StorageError::Poisoned)?;
        blobs.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
