//! Result ledger
//!
//! Append-only history of saved drink calculations.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CalcResult, StorageResult, ValidationError};
use crate::ids::IdGenerator;
use crate::models::{NutrientProfile, ResultDraft, ResultRecord};
use crate::storage::{load_collection, save_collection, BlobStore, RESULTS_KEY};

/// Saved results in insertion order
pub struct ResultLedger {
    records: Vec<ResultRecord>,
    store: Arc<dyn BlobStore>,
    ids: Arc<IdGenerator>,
}

impl ResultLedger {
    /// Load the persisted ledger (empty if absent or corrupt)
    pub fn load(store: Arc<dyn BlobStore>, ids: Arc<IdGenerator>) -> StorageResult<Self> {
        let records = load_collection(store.as_ref(), RESULTS_KEY)?;
        Ok(Self { records, store, ids })
    }

    fn commit(&mut self, next: Vec<ResultRecord>) -> StorageResult<()> {
        save_collection(self.store.as_ref(), RESULTS_KEY, &next)?;
        self.records = next;
        Ok(())
    }

    /// Stamp a draft with a fresh id and creation time and append it
    pub fn save(&mut self, draft: ResultDraft) -> CalcResult<ResultRecord> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyDrinkName.into());
        }
        let finite = draft.volumes.values().all(NutrientProfile::is_finite)
            && draft
                .milk_variants
                .values()
                .flatten()
                .all(|row| row.totals.is_finite());
        if !finite {
            return Err(ValidationError::NonFiniteResult.into());
        }

        let record = ResultRecord {
            id: self.ids.next_id(),
            name: name.to_string(),
            created_at: Utc::now(),
            volumes: draft.volumes,
            milk_variants: draft.milk_variants,
        };

        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next)?;
        tracing::info!(id = %record.id, name = %record.name, "saved result");
        Ok(record)
    }

    /// Delete the record with `id`; returns whether one was removed
    pub fn delete_by_id(&mut self, id: &str) -> StorageResult<bool> {
        if self.find_by_id(id).is_none() {
            return Ok(false);
        }
        let next = self.records.iter().filter(|r| r.id != id).cloned().collect();
        self.commit(next)?;
        tracing::info!(id, "deleted result");
        Ok(true)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ResultRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records, oldest first
    pub fn list(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
