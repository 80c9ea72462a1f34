//! Mixture composition
//!
//! Blends per-100g profiles by weight into absolute totals or a new per-100g
//! profile.

use crate::error::ValidationError;
use crate::models::{effective_components, Component, ComponentRow, IngredientLookup, NutrientProfile};

/// Absolute nutrition of the given components
///
/// Components whose ingredient is not in the catalog contribute nothing.
pub fn absolute_totals<L>(lookup: &L, components: &[Component]) -> NutrientProfile
where
    L: IngredientLookup + ?Sized,
{
    components
        .iter()
        .filter_map(|c| match lookup.find_by_id(&c.ingredient_id) {
            Some(ing) => Some(ing.per100.scale(c.weight)),
            None => {
                tracing::warn!(
                    ingredient_id = %c.ingredient_id,
                    "component references a missing ingredient, skipping"
                );
                None
            }
        })
        .sum()
}

/// Per-100g profile of validated components yielding `total_weight` grams
///
/// `total_weight` is the finished weight, which may differ from the sum of
/// component weights (water lost while brewing, for example).
pub fn compose_components<L>(
    lookup: &L,
    components: &[Component],
    total_weight: f64,
) -> Result<NutrientProfile, ValidationError>
where
    L: IngredientLookup + ?Sized,
{
    if !total_weight.is_finite() || total_weight <= 0.0 {
        return Err(ValidationError::NonPositiveTotalWeight);
    }
    if components.is_empty() {
        return Err(ValidationError::NoComponents);
    }
    let per100 = absolute_totals(lookup, components).normalize_to_100(total_weight)?;
    if !per100.is_finite() {
        return Err(ValidationError::NonFiniteResult);
    }
    Ok(per100)
}

/// Per-100g profile of a preparation from raw form rows
///
/// The total weight is checked before the rows; incomplete rows are dropped.
pub fn compose_mixture<L>(
    lookup: &L,
    rows: &[ComponentRow],
    total_weight: Option<f64>,
) -> Result<NutrientProfile, ValidationError>
where
    L: IngredientLookup + ?Sized,
{
    let total_weight = match total_weight {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => return Err(ValidationError::NonPositiveTotalWeight),
    };
    let components = effective_components(rows);
    compose_components(lookup, &components, total_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    const EPS: f64 = 1e-9;

    fn ing(id: &str, kcal: f64, protein: f64, fat: f64, carbs: f64) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.to_string(),
            per100: NutrientProfile::new(kcal, protein, fat, carbs),
        }
    }

    fn catalog() -> Vec<Ingredient> {
        vec![
            ing("milk", 60.0, 3.0, 3.2, 4.7),
            ing("sugar", 400.0, 0.0, 0.0, 100.0),
            ing("cocoa", 289.0, 24.0, 11.5, 10.0),
        ]
    }

    fn assert_close(a: &NutrientProfile, b: &NutrientProfile) {
        assert!((a.kcal - b.kcal).abs() < EPS, "kcal {} != {}", a.kcal, b.kcal);
        assert!((a.protein - b.protein).abs() < EPS);
        assert!((a.fat - b.fat).abs() < EPS);
        assert!((a.carbs - b.carbs).abs() < EPS);
    }

    #[test]
    fn test_single_ingredient_at_full_weight_is_unchanged() {
        let lookup = vec![ing("milk_regular", 60.0, 3.0, 3.2, 4.7)];
        let rows = vec![ComponentRow::new("milk_regular", 200.0)];

        let result = compose_mixture(&lookup, &rows, Some(200.0)).unwrap();
        assert_close(&result, &NutrientProfile::new(60.0, 3.0, 3.2, 4.7));
    }

    #[test]
    fn test_declared_weight_not_component_sum() {
        // 500 g milk + 100 g sugar reduced to 400 g
        let rows = vec![ComponentRow::new("milk", 500.0), ComponentRow::new("sugar", 100.0)];

        let result = compose_mixture(&catalog(), &rows, Some(400.0)).unwrap();
        // totals: kcal 300 + 400 = 700, protein 15, fat 16, carbs 23.5 + 100
        assert_close(&result, &NutrientProfile::new(175.0, 3.75, 4.0, 30.875));
    }

    #[test]
    fn test_normalization_is_scale_invariant() {
        let rows = vec![
            ComponentRow::new("milk", 300.0),
            ComponentRow::new("cocoa", 25.0),
            ComponentRow::new("sugar", 15.0),
        ];
        let base = compose_mixture(&catalog(), &rows, Some(330.0)).unwrap();

        for factor in [0.1, 2.0, 7.5] {
            let scaled: Vec<ComponentRow> = rows
                .iter()
                .map(|r| ComponentRow {
                    ingredient_id: r.ingredient_id.clone(),
                    weight: r.weight.map(|w| w * factor),
                })
                .collect();
            let result = compose_mixture(&catalog(), &scaled, Some(330.0 * factor)).unwrap();
            assert_close(&result, &base);
        }
    }

    #[test]
    fn test_missing_ingredient_contributes_nothing() {
        let rows = vec![ComponentRow::new("milk", 100.0), ComponentRow::new("deleted", 100.0)];

        let result = compose_mixture(&catalog(), &rows, Some(200.0)).unwrap();
        assert_close(&result, &NutrientProfile::new(30.0, 1.5, 1.6, 2.35));
    }

    #[test]
    fn test_rejects_bad_total_weight() {
        let rows = vec![ComponentRow::new("milk", 100.0)];
        for total in [None, Some(0.0), Some(-1.0), Some(f64::NAN), Some(f64::INFINITY)] {
            assert_eq!(
                compose_mixture(&catalog(), &rows, total),
                Err(ValidationError::NonPositiveTotalWeight)
            );
        }
    }

    #[test]
    fn test_weight_checked_before_components() {
        assert_eq!(
            compose_mixture(&catalog(), &[], Some(0.0)),
            Err(ValidationError::NonPositiveTotalWeight)
        );
    }

    #[test]
    fn test_rejects_empty_effective_components() {
        let rows = vec![
            ComponentRow::new("milk", 0.0),
            ComponentRow {
                ingredient_id: None,
                weight: Some(50.0),
            },
        ];
        assert_eq!(
            compose_mixture(&catalog(), &rows, Some(100.0)),
            Err(ValidationError::NoComponents)
        );
    }

    #[test]
    fn test_absolute_totals_are_not_normalized() {
        let components = vec![Component {
            ingredient_id: "sugar".to_string(),
            weight: 10.0,
        }];
        assert_close(
            &absolute_totals(&catalog(), &components),
            &NutrientProfile::new(40.0, 0.0, 0.0, 10.0),
        );
    }

    #[test]
    fn test_overflowing_weights_are_rejected() {
        let lookup = vec![ing("syrup", 400.0, 0.0, 0.0, 100.0)];
        let rows = vec![ComponentRow::new("syrup", 1e308)];
        assert_eq!(
            compose_mixture(&lookup, &rows, Some(1.0)),
            Err(ValidationError::NonFiniteResult)
        );
    }
}
