//! Calculator workspace
//!
//! The single owner of the ingredient catalog and the result ledger,
//! constructed once at startup over one storage backend.

use std::sync::Arc;

use crate::catalog::IngredientCatalog;
use crate::error::StorageResult;
use crate::ids::IdGenerator;
use crate::ledger::ResultLedger;
use crate::storage::BlobStore;

pub struct Workspace {
    pub catalog: IngredientCatalog,
    pub ledger: ResultLedger,
}

impl Workspace {
    /// Load both collections and seed the milk ingredients if needed
    ///
    /// Fails without seeding when the store cannot be read.
    pub fn open(store: Arc<dyn BlobStore>, ids: IdGenerator) -> StorageResult<Self> {
        let ids = Arc::new(ids);
        let mut catalog = IngredientCatalog::load(store.clone(), ids.clone())?;
        let ledger = ResultLedger::load(store, ids)?;

        catalog.ensure_milk_seed()?;
        tracing::info!(
            ingredients = catalog.len(),
            results = ledger.len(),
            "workspace loaded"
        );

        Ok(Self { catalog, ledger })
    }
}
