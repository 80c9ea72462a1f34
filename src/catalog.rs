//! Ingredient catalog
//!
//! Owns the ordered list of ingredients and writes it through to storage on
//! every change.

use std::sync::Arc;

use crate::error::{CalcResult, StorageResult, ValidationError};
use crate::ids::IdGenerator;
use crate::models::{Ingredient, IngredientLookup, NutrientProfile, MILK_VARIANTS};
use crate::storage::{load_collection, save_collection, BlobStore, INGREDIENTS_KEY};

/// The ingredient catalog
pub struct IngredientCatalog {
    ingredients: Vec<Ingredient>,
    store: Arc<dyn BlobStore>,
    ids: Arc<IdGenerator>,
}

impl IngredientCatalog {
    /// Load the persisted catalog (empty if absent or corrupt)
    pub fn load(store: Arc<dyn BlobStore>, ids: Arc<IdGenerator>) -> StorageResult<Self> {
        let ingredients = load_collection(store.as_ref(), INGREDIENTS_KEY)?;
        Ok(Self {
            ingredients,
            store,
            ids,
        })
    }

    /// Persist `next` and only then make it the current state
    fn commit(&mut self, next: Vec<Ingredient>) -> StorageResult<()> {
        save_collection(self.store.as_ref(), INGREDIENTS_KEY, &next)?;
        self.ingredients = next;
        Ok(())
    }

    /// Append an ingredient whose id the caller has already made unique
    pub fn add(&mut self, ingredient: Ingredient) -> StorageResult<()> {
        let mut next = self.ingredients.clone();
        next.push(ingredient);
        self.commit(next)
    }

    /// Create and append an ingredient with a fresh id
    pub fn create(&mut self, name: &str, per100: NutrientProfile) -> CalcResult<Ingredient> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyIngredientName.into());
        }
        // JSON has no representation for inf or NaN
        if !per100.is_finite() {
            return Err(ValidationError::NonFiniteResult.into());
        }

        let ingredient = Ingredient {
            id: self.ids.next_id(),
            name: name.to_string(),
            per100,
        };
        self.add(ingredient.clone())?;
        tracing::info!(id = %ingredient.id, name = %ingredient.name, "added ingredient");
        Ok(ingredient)
    }

    /// Remove the ingredient with `id`; returns whether one was removed
    pub fn remove(&mut self, id: &str) -> StorageResult<bool> {
        if self.find_by_id(id).is_none() {
            return Ok(false);
        }
        let next = self
            .ingredients
            .iter()
            .filter(|ing| ing.id != id)
            .cloned()
            .collect();
        self.commit(next)?;
        tracing::info!(id, "removed ingredient");
        Ok(true)
    }

    /// Seed the default milk ingredients if none of them is present
    ///
    /// Any single milk id counts as present, even if the other five are
    /// missing. Returns whether seeding happened.
    pub fn ensure_milk_seed(&mut self) -> StorageResult<bool> {
        let has_any_milk = self
            .ingredients
            .iter()
            .any(|ing| MILK_VARIANTS.iter().any(|m| m.id == ing.id));
        if has_any_milk {
            return Ok(false);
        }

        let mut next = self.ingredients.clone();
        next.extend(MILK_VARIANTS.iter().map(|m| m.default_ingredient()));
        self.commit(next)?;
        tracing::info!(count = MILK_VARIANTS.len(), "seeded default milk ingredients");
        Ok(true)
    }

    /// All ingredients in insertion order
    pub fn list(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl IngredientLookup for IngredientCatalog {
    fn find_by_id(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.find_by_id(id)
    }
}
