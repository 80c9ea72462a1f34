//! Milk variants
//!
//! The fixed set of milks a drink can be recomputed with. Each variant id is
//! also the id of a default catalog ingredient.

use serde::Serialize;

use super::{Ingredient, NutrientProfile};

/// One substitutable milk type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MilkVariant {
    pub id: &'static str,
    pub label: &'static str,
    /// Name of the seeded catalog ingredient
    pub default_name: &'static str,
    /// Per-100g values of the seeded catalog ingredient
    pub default_per100: NutrientProfile,
}

/// All milk variants, in output order
pub const MILK_VARIANTS: [MilkVariant; 6] = [
    MilkVariant {
        id: "milk_regular",
        label: "regular milk",
        default_name: "Milk 3.2%",
        default_per100: NutrientProfile::new(60.0, 3.0, 3.2, 4.7),
    },
    MilkVariant {
        id: "milk_soy",
        label: "soy milk",
        default_name: "Soy milk",
        default_per100: NutrientProfile::new(45.0, 3.0, 1.9, 4.0),
    },
    MilkVariant {
        id: "milk_oat",
        label: "oat milk",
        default_name: "Oat milk",
        default_per100: NutrientProfile::new(47.0, 0.8, 1.5, 8.0),
    },
    MilkVariant {
        id: "milk_coconut",
        label: "coconut milk",
        default_name: "Coconut milk",
        default_per100: NutrientProfile::new(75.0, 1.0, 7.5, 2.0),
    },
    MilkVariant {
        id: "milk_almond",
        label: "almond milk",
        default_name: "Almond milk",
        default_per100: NutrientProfile::new(50.0, 1.6, 3.6, 3.5),
    },
    MilkVariant {
        id: "milk_skim",
        label: "low-lactose 0% milk",
        default_name: "Low-lactose milk 0%",
        default_per100: NutrientProfile::new(32.0, 3.3, 0.1, 4.8),
    },
];

/// Whether `id` names one of the milk variants
pub fn is_milk_id(id: &str) -> bool {
    MILK_VARIANTS.iter().any(|m| m.id == id)
}

impl MilkVariant {
    /// The catalog ingredient seeded for this variant
    pub fn default_ingredient(&self) -> Ingredient {
        Ingredient {
            id: self.id.to_string(),
            name: self.default_name.to_string(),
            per100: self.default_per100,
        }
    }
}
