//! Ingredient model
//!
//! A named food with nutritional values per 100 g.

use serde::{Deserialize, Serialize};

use super::NutrientProfile;

/// A catalog ingredient
///
/// Identity is the id alone; two ingredients may share nutrient values.
/// Neither id nor `per100` change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub per100: NutrientProfile,
}

/// Data for creating a new ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl IngredientCreate {
    pub fn per100(&self) -> NutrientProfile {
        NutrientProfile::new(self.kcal, self.protein, self.fat, self.carbs)
    }
}

/// Read access to ingredients by id
///
/// A missing id is `None`, never an error: callers treat it as contributing
/// nothing so that deleting an ingredient cannot break a calculation.
pub trait IngredientLookup {
    fn find_by_id(&self, id: &str) -> Option<&Ingredient>;
}

impl IngredientLookup for [Ingredient] {
    fn find_by_id(&self, id: &str) -> Option<&Ingredient> {
        self.iter().find(|ing| ing.id == id)
    }
}

impl IngredientLookup for Vec<Ingredient> {
    fn find_by_id(&self, id: &str) -> Option<&Ingredient> {
        self.as_slice().find_by_id(id)
    }
}
