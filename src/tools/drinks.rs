//! Drink Tools
//!
//! Per-volume drink totals with milk substitution, and saving them to the
//! result history.

use serde::{Deserialize, Serialize};

use crate::error::{CalcResult, ValidationError};
use crate::models::{DrinkCalculation, ResultRecord, VolumeInput};
use crate::nutrition::calculate_drink;
use crate::workspace::Workspace;

/// Volume keys offered by default, in ml
pub const DEFAULT_VOLUMES: [u32; 3] = [250, 350, 450];

/// Drink form data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrinkInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub volumes: Vec<VolumeInput>,
}

/// Compute all volumes without saving
pub fn calculate_drink_volumes(ws: &Workspace, input: &DrinkInput) -> CalcResult<DrinkCalculation> {
    Ok(calculate_drink(&ws.catalog, &input.volumes)?)
}

/// Compute all volumes and append the result to the ledger
///
/// The name is checked before anything is computed.
pub fn save_drink_result(ws: &mut Workspace, input: &DrinkInput) -> CalcResult<ResultRecord> {
    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(ValidationError::EmptyDrinkName.into());
    }

    let calculation = calculate_drink(&ws.catalog, &input.volumes)?;
    ws.ledger.save(calculation.to_draft(name))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::CalcError;
    use crate::ids::IdGenerator;
    use crate::models::{ComponentRow, IngredientCreate};
    use crate::storage::MemoryBlobStore;
    use crate::tools::ingredients::{add_ingredient, delete_ingredient};

    fn workspace_with_espresso() -> (Workspace, String) {
        let mut ws = Workspace::open(Arc::new(MemoryBlobStore::new()), IdGenerator::default()).unwrap();
        let espresso = add_ingredient(
            &mut ws,
            IngredientCreate {
                name: "Espresso".to_string(),
                kcal: 2.0,
                protein: 0.1,
                fat: 0.0,
                carbs: 0.3,
            },
        )
        .unwrap();
        (ws, espresso.id)
    }

    fn latte(espresso_id: &str) -> DrinkInput {
        DrinkInput {
            name: Some("Latte".to_string()),
            volumes: DEFAULT_VOLUMES
                .iter()
                .map(|&ml| VolumeInput {
                    volume_ml: ml,
                    components: vec![
                        ComponentRow::new(espresso_id, 18.0),
                        ComponentRow::new("milk_regular", f64::from(ml) - 50.0),
                    ],
                })
                .collect(),
        }
    }

    #[test]
    fn test_calculate_does_not_save() {
        let (ws, espresso) = workspace_with_espresso();
        let calc = calculate_drink_volumes(&ws, &latte(&espresso)).unwrap();
        assert_eq!(calc.volumes.len(), 3);
        assert!(ws.ledger.is_empty());
    }

    #[test]
    fn test_save_records_every_volume() {
        let (mut ws, espresso) = workspace_with_espresso();
        let record = save_drink_result(&mut ws, &latte(&espresso)).unwrap();

        assert_eq!(record.name, "Latte");
        assert_eq!(record.volumes.keys().copied().collect::<Vec<_>>(), vec![250, 350, 450]);
        assert!(record.milk_variants.values().all(|rows| rows.len() == 6));
        assert_eq!(ws.ledger.list(), &[record]);
    }

    #[test]
    fn test_empty_name_checked_before_volumes() {
        let (mut ws, _) = workspace_with_espresso();
        let input = DrinkInput {
            name: None,
            volumes: vec![],
        };
        let err = save_drink_result(&mut ws, &input).unwrap_err();
        assert!(matches!(err, CalcError::Validation(ValidationError::EmptyDrinkName)));

        let input = DrinkInput {
            name: Some("Nothing".to_string()),
            volumes: vec![],
        };
        let err = save_drink_result(&mut ws, &input).unwrap_err();
        assert!(matches!(err, CalcError::Validation(ValidationError::NoVolumes)));
        assert!(ws.ledger.is_empty());
    }

    #[test]
    fn test_deleting_ingredient_leaves_saved_record_alone() {
        let (mut ws, espresso) = workspace_with_espresso();
        let record = save_drink_result(&mut ws, &latte(&espresso)).unwrap();

        delete_ingredient(&mut ws, &espresso).unwrap();
        delete_ingredient(&mut ws, "milk_regular").unwrap();

        assert_eq!(ws.ledger.find_by_id(&record.id), Some(&record));

        // A fresh calculation now skips the deleted espresso and milk
        let calc = calculate_drink_volumes(&ws, &latte(&espresso)).unwrap();
        assert_eq!(calc.volumes[&250].totals.kcal, 0.0);
    }
}
