//! Mixture components
//!
//! Input lines pairing an ingredient with a weight in grams.

use serde::{Deserialize, Serialize};

/// One raw input line as submitted by a form
///
/// Either field may be missing; such rows are dropped by [`effective_components`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentRow {
    #[serde(default)]
    pub ingredient_id: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl ComponentRow {
    pub fn new(ingredient_id: impl Into<String>, weight: f64) -> Self {
        Self {
            ingredient_id: Some(ingredient_id.into()),
            weight: Some(weight),
        }
    }
}

/// A validated component: non-empty ingredient id, weight > 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub ingredient_id: String,
    pub weight: f64,
}

/// Keep only rows with an ingredient selected and a positive weight
pub fn effective_components(rows: &[ComponentRow]) -> Vec<Component> {
    rows.iter()
        .filter_map(|row| {
            let id = row.ingredient_id.as_deref().map(str::trim)?;
            let weight = row.weight?;
            // NaN fails this comparison too
            if id.is_empty() || !(weight > 0.0) {
                return None;
            }
            Some(Component {
                ingredient_id: id.to_string(),
                weight,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_components_filters_incomplete_rows() {
        let rows = vec![
            ComponentRow::new("espresso", 18.0),
            ComponentRow {
                ingredient_id: None,
                weight: Some(10.0),
            },
            ComponentRow {
                ingredient_id: Some("syrup".to_string()),
                weight: None,
            },
            ComponentRow::new("", 5.0),
            ComponentRow::new("milk_regular", 0.0),
            ComponentRow::new("milk_oat", -3.0),
            ComponentRow::new("sugar", f64::NAN),
            ComponentRow::new("milk_regular", 200.0),
        ];

        let components = effective_components(&rows);
        assert_eq!(
            components,
            vec![
                Component {
                    ingredient_id: "espresso".to_string(),
                    weight: 18.0
                },
                Component {
                    ingredient_id: "milk_regular".to_string(),
                    weight: 200.0
                },
            ]
        );
    }

    #[test]
    fn test_row_deserializes_with_missing_fields() {
        let row: ComponentRow = serde_json::from_str(r#"{"ingredient_id": "tea"}"#).unwrap();
        assert_eq!(row.ingredient_id.as_deref(), Some("tea"));
        assert_eq!(row.weight, None);
    }
}
