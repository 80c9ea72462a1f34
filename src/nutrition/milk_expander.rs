//! Milk substitution
//!
//! Recomputes one serving volume with its milk swapped for every milk
//! variant, keeping the rest of the drink as entered.

use crate::models::{is_milk_id, Component, IngredientLookup, MilkVariantRow, NutrientProfile, MILK_VARIANTS};

use super::compositor::absolute_totals;

/// A volume's components split into milk and everything else
#[derive(Debug, Clone, PartialEq)]
pub struct MilkSplit {
    pub base_components: Vec<Component>,
    /// Summed weight of all milk components
    pub milk_weight: f64,
    /// Last milk ingredient seen in input order
    ///
    /// With two different milks in one volume the weight is still right but
    /// only this id is reported as "the" milk.
    pub milk_ingredient_id: Option<String>,
}

/// Separate milk components from base components
pub fn split_milk(components: &[Component]) -> MilkSplit {
    let mut base_components = Vec::new();
    let mut milk_weight = 0.0;
    let mut milk_ingredient_id = None;

    for c in components {
        if is_milk_id(&c.ingredient_id) {
            milk_weight += c.weight;
            milk_ingredient_id = Some(c.ingredient_id.clone());
        } else {
            base_components.push(c.clone());
        }
    }

    MilkSplit {
        base_components,
        milk_weight,
        milk_ingredient_id,
    }
}

/// Milk contribution of `weight` grams of the variant's catalog ingredient
///
/// A variant missing from the catalog contributes zero.
fn milk_part<L>(lookup: &L, milk_id: &str, weight: f64) -> NutrientProfile
where
    L: IngredientLookup + ?Sized,
{
    match lookup.find_by_id(milk_id) {
        Some(ing) if weight > 0.0 => ing.per100.scale(weight),
        _ => NutrientProfile::zero(),
    }
}

/// One totals row per milk variant, in declaration order
///
/// `None` when the volume contains no milk: substitution does not apply.
pub fn expand_milk_variants<L>(lookup: &L, split: &MilkSplit) -> Option<Vec<MilkVariantRow>>
where
    L: IngredientLookup + ?Sized,
{
    if split.milk_ingredient_id.is_none() || !(split.milk_weight > 0.0) {
        return None;
    }

    let base_totals = absolute_totals(lookup, &split.base_components);

    let rows = MILK_VARIANTS
        .iter()
        .map(|variant| MilkVariantRow {
            label: variant.label.to_string(),
            totals: base_totals + milk_part(lookup, variant.id, split.milk_weight),
        })
        .collect();

    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    const EPS: f64 = 1e-9;

    fn component(id: &str, weight: f64) -> Component {
        Component {
            ingredient_id: id.to_string(),
            weight,
        }
    }

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

    fn assert_close(a: &NutrientProfile, b: &NutrientProfile) {
        assert!((a.kcal - b.kcal).abs() < EPS, "kcal {} != {}", a.kcal, b.kcal);
        assert!((a.protein - b.protein).abs() < EPS);
        assert!((a.fat - b.fat).abs() < EPS);
        assert!((a.carbs - b.carbs).abs() < EPS);
    }

    #[test]
    fn test_split_sums_milk_and_keeps_last_id() {
        let split = split_milk(&[
            component("milk_oat", 100.0),
            component("espresso", 18.0),
            component("milk_soy", 50.0),
        ]);

        assert_eq!(split.milk_weight, 150.0);
        assert_eq!(split.milk_ingredient_id.as_deref(), Some("milk_soy"));
        assert_eq!(split.base_components, vec![component("espresso", 18.0)]);
    }

    #[test]
    fn test_espresso_with_regular_milk() {
        let lookup = catalog();
        let split = split_milk(&[component("espresso", 18.0), component("milk_regular", 200.0)]);
        let rows = expand_milk_variants(&lookup, &split).unwrap();

        let base = NutrientProfile::new(2.0, 0.1, 0.0, 0.3).scale(18.0);
        assert_eq!(rows.len(), 6);
        for (row, variant) in rows.iter().zip(MILK_VARIANTS.iter()) {
            assert_eq!(row.label, variant.label);
            assert_close(&row.totals, &(base + variant.default_per100.scale(200.0)));
        }

        // regular milk row: 0.36 + 120 kcal, 0.018 + 6 protein, 6.4 fat, 0.054 + 9.4 carbs
        assert_close(&rows[0].totals, &NutrientProfile::new(120.36, 6.018, 6.4, 9.454));
    }

    #[test]
    fn test_order_is_independent_of_input_milk() {
        let lookup = catalog();
        let from_oat = expand_milk_variants(&lookup, &split_milk(&[component("milk_oat", 150.0)])).unwrap();
        let from_skim = expand_milk_variants(&lookup, &split_milk(&[component("milk_skim", 150.0)])).unwrap();
        assert_eq!(from_oat, from_skim);

        let labels: Vec<&str> = from_oat.iter().map(|r| r.label.as_str()).collect();
        let expected: Vec<&str> = MILK_VARIANTS.iter().map(|m| m.label).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_base_portion_is_shared() {
        let lookup = catalog();
        let split = split_milk(&[component("espresso", 36.0), component("milk_almond", 180.0)]);
        let rows = expand_milk_variants(&lookup, &split).unwrap();

        for (row, variant) in rows.iter().zip(MILK_VARIANTS.iter()) {
            let milk = variant.default_per100.scale(180.0);
            let base = NutrientProfile::new(
                row.totals.kcal - milk.kcal,
                row.totals.protein - milk.protein,
                row.totals.fat - milk.fat,
                row.totals.carbs - milk.carbs,
            );
            assert_close(&base, &NutrientProfile::new(0.72, 0.036, 0.0, 0.108));
        }
    }

    #[test]
    fn test_no_milk_means_no_variants() {
        let lookup = catalog();
        let split = split_milk(&[component("espresso", 18.0)]);
        assert_eq!(split.milk_weight, 0.0);
        assert_eq!(expand_milk_variants(&lookup, &split), None);
    }

    #[test]
    fn test_variant_missing_from_catalog_adds_no_milk() {
        let lookup: Vec<Ingredient> = catalog()
            .into_iter()
            .filter(|i| i.id != "milk_coconut")
            .collect();
        let split = split_milk(&[component("espresso", 18.0), component("milk_regular", 200.0)]);
        let rows = expand_milk_variants(&lookup, &split).unwrap();

        assert_eq!(rows.len(), 6);
        assert_close(&rows[3].totals, &NutrientProfile::new(2.0, 0.1, 0.0, 0.3).scale(18.0));
    }
}
