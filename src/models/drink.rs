//! Drink models
//!
//! Per-volume input and computed results for a finished drink.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ComponentRow, NutrientProfile, ResultDraft};

/// Component rows for one serving volume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeInput {
    /// Serving size in millilitres, used as the volume key
    pub volume_ml: u32,
    #[serde(default)]
    pub components: Vec<ComponentRow>,
}

/// Totals for a drink with its milk swapped for one variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilkVariantRow {
    pub label: String,
    pub totals: NutrientProfile,
}

/// Computed nutrition for one serving volume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrinkVolumeResult {
    /// Absolute totals for the serving, not per 100 g
    pub totals: NutrientProfile,
    /// One row per milk variant, `None` when the volume has no milk
    pub milk_variants: Option<Vec<MilkVariantRow>>,
    /// Milk ingredient detected in the input (the last one if several)
    pub detected_milk_id: Option<String>,
}

/// Computed nutrition for every volume that had components
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrinkCalculation {
    pub volumes: BTreeMap<u32, DrinkVolumeResult>,
}

impl DrinkCalculation {
    /// Snapshot the computed values for saving under `name`
    pub fn to_draft(&self, name: &str) -> ResultDraft {
        let volumes = self
            .volumes
            .iter()
            .map(|(vol, res)| (*vol, res.totals))
            .collect();

        let milk_variants = self
            .volumes
            .iter()
            .filter_map(|(vol, res)| res.milk_variants.clone().map(|rows| (*vol, rows)))
            .collect();

        ResultDraft {
            name: name.to_string(),
            volumes,
            milk_variants,
        }
    }
}
