//! Durable storage
//!
//! Collections are persisted whole as JSON under a fixed key and read back
//! whole. There is no partial update and no schema migration of the blobs.

mod memory;
mod sqlite;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageResult;

pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;

/// Storage key for the ingredient catalog
pub const INGREDIENTS_KEY: &str = "ingredients";

/// Storage key for the result ledger
pub const RESULTS_KEY: &str = "results";

/// Read-all / write-all persistence port
pub trait BlobStore: Send + Sync {
    /// The blob stored under `key`, if any
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the blob stored under `key` in one atomic write
    fn write(&self, key: &str, payload: &str) -> StorageResult<()>;
}

/// Load a collection, empty when the key is absent or the blob is corrupt
///
/// A corrupt blob is logged and dropped. A failed read is returned as an
/// error so callers never mistake an unreachable store for an empty one.
pub fn load_collection<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> StorageResult<Vec<T>> {
    let Some(raw) = store.read(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored collection is corrupt, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Persist a whole collection under `key`
pub fn save_collection<T: Serialize>(store: &dyn BlobStore, key: &str, items: &[T]) -> StorageResult<()> {
    let payload = serde_json::to_string(items)?;
    store.write(key, &payload)?;
    tracing::debug!(key, count = items.len(), "persisted collection");
    Ok(())
}
