//! Drink calculation across serving volumes

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::models::{effective_components, DrinkCalculation, DrinkVolumeResult, IngredientLookup, VolumeInput};

use super::compositor::absolute_totals;
use super::milk_expander::{expand_milk_variants, split_milk};

/// Compute every volume independently
///
/// Volumes with no usable rows are left out. Fails when no volume has any,
/// or when a total overflows. If the same volume appears twice the later
/// input wins.
pub fn calculate_drink<L>(lookup: &L, volumes: &[VolumeInput]) -> Result<DrinkCalculation, ValidationError>
where
    L: IngredientLookup + ?Sized,
{
    let mut results = BTreeMap::new();

    for input in volumes {
        let components = effective_components(&input.components);
        if components.is_empty() {
            continue;
        }

        let totals = absolute_totals(lookup, &components);
        let split = split_milk(&components);
        let milk_variants = expand_milk_variants(lookup, &split);

        let variants_finite = milk_variants
            .iter()
            .flatten()
            .all(|row| row.totals.is_finite());
        if !totals.is_finite() || !variants_finite {
            return Err(ValidationError::NonFiniteResult);
        }

        results.insert(
            input.volume_ml,
            DrinkVolumeResult {
                totals,
                milk_variants,
                detected_milk_id: split.milk_ingredient_id,
            },
        );
    }

    if results.is_empty() {
        return Err(ValidationError::NoVolumes);
    }

    Ok(DrinkCalculation { volumes: results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentRow, Ingredient, NutrientProfile, MILK_VARIANTS};

    fn catalog() -> Vec<Ingredient> {
        let mut ingredients: Vec<Ingredient> =
            MILK_VARIANTS.iter().map(|m| m.default_ingredient()).collect();
        ingredients.push(Ingredient {
            id: "espresso".to_string(),
            name: "Espresso".to_string(),
            per100: NutrientProfile::new(2.0, 0.1, 0.0, 0.3),
        });
        ingredients
    }

    fn volume(ml: u32, rows: Vec<ComponentRow>) -> VolumeInput {
        VolumeInput {
            volume_ml: ml,
            components: rows,
        }
    }

    #[test]
    fn test_each_volume_is_computed_independently() {
        let inputs = vec![
            volume(
                250,
                vec![ComponentRow::new("espresso", 18.0), ComponentRow::new("milk_regular", 200.0)],
            ),
            volume(350, vec![]),
            volume(450, vec![ComponentRow::new("espresso", 54.0)]),
        ];

        let calc = calculate_drink(&catalog(), &inputs).unwrap();
        assert_eq!(calc.volumes.keys().copied().collect::<Vec<_>>(), vec![250, 450]);

        let small = &calc.volumes[&250];
        assert!((small.totals.kcal - 120.36).abs() < 1e-9);
        assert_eq!(small.milk_variants.as_ref().map(Vec::len), Some(6));
        assert_eq!(small.detected_milk_id.as_deref(), Some("milk_regular"));

        let large = &calc.volumes[&450];
        assert!((large.totals.kcal - 1.08).abs() < 1e-9);
        assert_eq!(large.milk_variants, None);
    }

    #[test]
    fn test_regular_milk_row_matches_volume_totals() {
        let inputs = vec![volume(
            250,
            vec![ComponentRow::new("espresso", 18.0), ComponentRow::new("milk_regular", 200.0)],
        )];
        let calc = calculate_drink(&catalog(), &inputs).unwrap();
        let res = &calc.volumes[&250];
        let rows = res.milk_variants.as_ref().unwrap();
        assert!((rows[0].totals.kcal - res.totals.kcal).abs() < 1e-9);
    }

    #[test]
    fn test_no_volume_with_components_fails() {
        let inputs = vec![volume(250, vec![ComponentRow::new("espresso", 0.0)]), volume(350, vec![])];
        assert_eq!(calculate_drink(&catalog(), &inputs), Err(ValidationError::NoVolumes));
        assert_eq!(calculate_drink(&catalog(), &[]), Err(ValidationError::NoVolumes));
    }

    #[test]
    fn test_overflowing_volume_fails() {
        let mut lookup = catalog();
        lookup.push(Ingredient {
            id: "syrup".to_string(),
            name: "Syrup".to_string(),
            per100: NutrientProfile::new(400.0, 0.0, 0.0, 100.0),
        });
        let inputs = vec![
            volume(250, vec![ComponentRow::new("espresso", 18.0)]),
            volume(350, vec![ComponentRow::new("syrup", 1e308), ComponentRow::new("milk_oat", 200.0)]),
        ];
        assert_eq!(calculate_drink(&lookup, &inputs), Err(ValidationError::NonFiniteResult));
    }

    #[test]
    fn test_draft_keeps_only_volumes_with_milk_variants() {
        let inputs = vec![
            volume(250, vec![ComponentRow::new("milk_oat", 220.0)]),
            volume(350, vec![ComponentRow::new("espresso", 36.0)]),
        ];
        let draft = calculate_drink(&catalog(), &inputs).unwrap().to_draft("Flat white");

        assert_eq!(draft.name, "Flat white");
        assert_eq!(draft.volumes.len(), 2);
        assert_eq!(draft.milk_variants.keys().copied().collect::<Vec<_>>(), vec![250]);
    }
}
