//! Ingredient Tools
//!
//! Tools for managing catalog ingredients and inspecting milk variants.

use serde::Serialize;

use crate::error::{CalcResult, ValidationError};
use crate::models::{is_milk_id, Ingredient, IngredientCreate, IngredientLookup, NutrientProfile, MILK_VARIANTS};
use crate::workspace::Workspace;

/// Response for add_ingredient
#[derive(Debug, Serialize)]
pub struct AddIngredientResponse {
    pub id: String,
    pub name: String,
    pub per100: NutrientProfile,
}

/// Summary of an ingredient for listings, values rounded to one decimal
#[derive(Debug, Serialize)]
pub struct IngredientSummary {
    pub id: String,
    pub name: String,
    pub per100: NutrientProfile,
    pub is_milk: bool,
}

impl From<&Ingredient> for IngredientSummary {
    fn from(ing: &Ingredient) -> Self {
        Self {
            id: ing.id.clone(),
            name: ing.name.clone(),
            per100: ing.per100.rounded(),
            is_milk: is_milk_id(&ing.id),
        }
    }
}

/// Response for list_ingredients
#[derive(Debug, Serialize)]
pub struct ListIngredientsResponse {
    pub items: Vec<IngredientSummary>,
    pub total: usize,
}

/// Response for delete_ingredient
#[derive(Debug, Serialize)]
pub struct DeleteIngredientResponse {
    pub success: bool,
    pub deleted_id: String,
}

/// One milk variant and whether its ingredient is still in the catalog
#[derive(Debug, Serialize)]
pub struct MilkVariantSummary {
    pub id: &'static str,
    pub label: &'static str,
    pub present_in_catalog: bool,
    pub per100: Option<NutrientProfile>,
}

/// Add a new ingredient
pub fn add_ingredient(ws: &mut Workspace, data: IngredientCreate) -> CalcResult<AddIngredientResponse> {
    let ingredient = ws.catalog.create(&data.name, data.per100())?;

    Ok(AddIngredientResponse {
        id: ingredient.id,
        name: ingredient.name,
        per100: ingredient.per100,
    })
}

/// List all ingredients in catalog order
pub fn list_ingredients(ws: &Workspace) -> ListIngredientsResponse {
    let items: Vec<IngredientSummary> = ws.catalog.list().iter().map(IngredientSummary::from).collect();
    let total = items.len();
    ListIngredientsResponse { items, total }
}

/// Get an ingredient by id
pub fn get_ingredient(ws: &Workspace, id: &str) -> Option<Ingredient> {
    ws.catalog.find_by_id(id).cloned()
}

/// Delete an ingredient
///
/// Saved results keep their numbers; drinks being composed simply stop
/// counting the deleted ingredient.
pub fn delete_ingredient(ws: &mut Workspace, id: &str) -> CalcResult<DeleteIngredientResponse> {
    if !ws.catalog.remove(id)? {
        return Err(ValidationError::UnknownIngredient(id.to_string()).into());
    }

    Ok(DeleteIngredientResponse {
        success: true,
        deleted_id: id.to_string(),
    })
}

/// List milk variants in output order
pub fn list_milk_variants(ws: &Workspace) -> Vec<MilkVariantSummary> {
    MILK_VARIANTS
        .iter()
        .map(|m| {
            let ing = ws.catalog.find_by_id(m.id);
            MilkVariantSummary {
                id: m.id,
                label: m.label,
                present_in_catalog: ing.is_some(),
                per100: ing.map(|i| i.per100),
            }
        })
        .collect()
}
