//! Result Tools
//!
//! Listing, deleting and exporting saved drink calculations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CalcResult, ValidationError};
use crate::models::ResultRecord;
use crate::workspace::Workspace;

/// Summary of a saved result for listings
#[derive(Debug, Serialize)]
pub struct ResultSummary {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub volumes: Vec<u32>,
    /// Milk variant rows per volume, 0 for volumes without milk
    pub milk_variant_counts: BTreeMap<u32, usize>,
}

impl From<&ResultRecord> for ResultSummary {
    fn from(rec: &ResultRecord) -> Self {
        Self {
            id: rec.id.clone(),
            name: rec.name.clone(),
            created_at: rec.created_at,
            volumes: rec.volumes.keys().copied().collect(),
            milk_variant_counts: rec
                .volumes
                .keys()
                .map(|vol| (*vol, rec.milk_variants.get(vol).map_or(0, Vec::len)))
                .collect(),
        }
    }
}

/// Response for list_results
#[derive(Debug, Serialize)]
pub struct ListResultsResponse {
    pub items: Vec<ResultSummary>,
    pub total: usize,
}

/// Response for delete_result
#[derive(Debug, Serialize)]
pub struct DeleteResultResponse {
    pub success: bool,
    pub deleted_id: String,
}

/// Response for export_result
#[derive(Debug, Serialize)]
pub struct ExportResultResponse {
    pub text: String,
    pub line_count: usize,
}

/// List saved results, oldest first
pub fn list_results(ws: &Workspace) -> ListResultsResponse {
    let items: Vec<ResultSummary> = ws.ledger.list().iter().map(ResultSummary::from).collect();
    let total = items.len();
    ListResultsResponse { items, total }
}

/// Get a saved result by id
pub fn get_result(ws: &Workspace, id: &str) -> Option<ResultRecord> {
    ws.ledger.find_by_id(id).cloned()
}

/// Delete a saved result
pub fn delete_result(ws: &mut Workspace, id: &str) -> CalcResult<DeleteResultResponse> {
    if !ws.ledger.delete_by_id(id)? {
        return Err(ValidationError::UnknownResult(id.to_string()).into());
    }

    Ok(DeleteResultResponse {
        success: true,
        deleted_id: id.to_string(),
    })
}

/// Export text for a saved result, ready for the clipboard
pub fn export_result(ws: &Workspace, id: &str) -> CalcResult<ExportResultResponse> {
    let record = ws
        .ledger
        .find_by_id(id)
        .ok_or_else(|| ValidationError::UnknownResult(id.to_string()))?;

    let text = format_result_export(record);
    let line_count = text.lines().count();
    Ok(ExportResultResponse { text, line_count })
}

/// Plain-text summary of one record across volumes and milk variants
///
/// ```text
/// Drink: Latte
/// 250 ml:
///   regular milk: 120.4 kcal, P 6.0, F 6.4, C 9.5
/// ```
///
/// Volumes without milk variants are left out.
pub fn format_result_export(record: &ResultRecord) -> String {
    let mut lines = vec![format!("Drink: {}", record.name)];

    for (vol, rows) in &record.milk_variants {
        if rows.is_empty() {
            continue;
        }
        lines.push(format!("{} ml:", vol));
        lines.extend(rows.iter().map(|row| {
            let t = &row.totals;
            format!(
                "  {}: {:.1} kcal, P {:.1}, F {:.1}, C {:.1}",
                row.label, t.kcal, t.protein, t.fat, t.carbs
            )
        }));
    }

    lines.join("\n")
}
