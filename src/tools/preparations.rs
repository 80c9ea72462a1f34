//! Preparation Tools
//!
//! Compute the per-100g profile of a sub-recipe and promote it to an
//! ingredient.

use serde::{Deserialize, Serialize};

use crate::error::{CalcResult, ValidationError};
use crate::models::{effective_components, ComponentRow, Ingredient, IngredientLookup, NutrientProfile};
use crate::nutrition::compose_mixture;
use crate::workspace::Workspace;

/// Preparation form data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreparationInput {
    #[serde(default)]
    pub name: Option<String>,
    /// Finished weight of the preparation in grams
    #[serde(default)]
    pub total_weight: Option<f64>,
    #[serde(default)]
    pub components: Vec<ComponentRow>,
}

/// Response for calculate_preparation
#[derive(Debug, Serialize)]
pub struct PreparationResponse {
    pub per100: NutrientProfile,
    pub total_weight: Option<f64>,
    pub components_used: usize,
    /// Ingredient ids that were selected but are no longer in the catalog
    pub missing_ingredient_ids: Vec<String>,
}

/// Response for save_preparation
#[derive(Debug, Serialize)]
pub struct SavePreparationResponse {
    pub ingredient: Ingredient,
}

/// Compute a preparation's per-100g profile without saving anything
pub fn calculate_preparation(ws: &Workspace, input: &PreparationInput) -> CalcResult<PreparationResponse> {
    let per100 = compose_mixture(&ws.catalog, &input.components, input.total_weight)?;

    let components = effective_components(&input.components);
    let missing_ingredient_ids = components
        .iter()
        .filter(|c| ws.catalog.find_by_id(&c.ingredient_id).is_none())
        .map(|c| c.ingredient_id.clone())
        .collect();

    Ok(PreparationResponse {
        per100,
        total_weight: input.total_weight,
        components_used: components.len(),
        missing_ingredient_ids,
    })
}

/// Compute a preparation and add it to the catalog as a new ingredient
///
/// The mixture is validated before the name.
pub fn save_preparation(ws: &mut Workspace, input: &PreparationInput) -> CalcResult<SavePreparationResponse> {
    let per100 = compose_mixture(&ws.catalog, &input.components, input.total_weight)?;

    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(ValidationError::EmptyPreparationName.into());
    }

    let ingredient = ws.catalog.create(name, per100)?;
    Ok(SavePreparationResponse { ingredient })
}
