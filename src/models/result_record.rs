//! Result record model
//!
//! A saved snapshot of a drink's computed nutrition.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MilkVariantRow, NutrientProfile};

/// A saved drink calculation
///
/// Holds computed numbers only, never references to ingredients, so later
/// catalog edits do not change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Totals per volume (ml)
    pub volumes: BTreeMap<u32, NutrientProfile>,
    /// Milk variant rows per volume; volumes without milk are absent
    #[serde(default)]
    pub milk_variants: BTreeMap<u32, Vec<MilkVariantRow>>,
}

/// Data for saving a new result record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDraft {
    pub name: String,
    pub volumes: BTreeMap<u32, NutrientProfile>,
    #[serde(default)]
    pub milk_variants: BTreeMap<u32, Vec<MilkVariantRow>>,
}

impl ResultRecord {
    /// The record minus its assigned identity and timestamp
    pub fn to_draft(&self) -> ResultDraft {
        ResultDraft {
            name: self.name.clone(),
            volumes: self.volumes.clone(),
            milk_variants: self.milk_variants.clone(),
        }
    }
}
