//! Status Tool
//!
//! Runtime status information and usage instructions for the calculator.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::workspace::Workspace;

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# bevcalc Usage Instructions

This guide explains how to compute drink nutrition with the bevcalc tools.

## Overview

1. **Ingredients** - base foods with kcal, protein, fat and carbs per 100 g
2. **Preparations** (optional) - sub-recipes (syrups, bases) saved as new ingredients
3. **Drinks** - components per serving volume, recomputed for every milk type
4. **Results** - saved drink calculations you can list, export or delete

All weights are grams. There is no unit conversion.

---

## Ingredients

- `add_ingredient` with name and per-100g values
- `list_ingredients` to find ingredient ids
- `delete_ingredient` removes an ingredient; saved results are not affected

Six milk ingredients are created on first start:
`milk_regular`, `milk_soy`, `milk_oat`, `milk_coconut`, `milk_almond`, `milk_skim`.
Use `list_milk_variants` to see which of them are still in the catalog.

---

## Preparations

`calculate_preparation` takes components (ingredient id + grams) and the
FINISHED weight of the preparation. The finished weight may differ from the
sum of component weights (evaporation while cooking a syrup, for example).

`save_preparation` does the same and stores the result as a new ingredient
under the given name, so it can be used in drinks.

---

## Drinks

`calculate_drink` takes a list of volumes (ml), each with its own components.
For every volume you get:
- `totals` - absolute nutrition for that serving
- `milk_variants` - the same drink with the milk swapped for each of the six
  milks (only when the volume contains a milk ingredient)

Use ONE milk per volume. If several milks are listed their weights are added
together and the last one is reported as the detected milk.

`save_drink_result` stores the calculation under a drink name.

---

## Results

- `list_results`, `get_result`
- `export_result` returns text with one line per milk variant per volume
- `delete_result`

## Notes

- Components without an ingredient or with weight <= 0 are ignored
- Components referencing deleted ingredients count as zero
- Numbers in exports are rounded to one decimal
"#;

/// Runtime status of the calculator service
#[derive(Debug, Clone, Serialize)]
pub struct CalcStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Database information
    pub database_path: String,
    pub database_size_bytes: Option<u64>,

    /// Catalog information
    pub ingredient_count: usize,
    pub result_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    /// Get the current status
    pub fn get_status(&self, ws: &Workspace) -> CalcStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            ingredient_count: ws.catalog.len(),
            result_count: ws.ledger.len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ids::IdGenerator;
    use crate::storage::MemoryBlobStore;

    #[test]
    fn test_status_reports_counts() {
        let ws = Workspace::open(Arc::new(MemoryBlobStore::new()), IdGenerator::default()).unwrap();
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/bevcalc.db"));

        let status = tracker.get_status(&ws);
        assert_eq!(status.ingredient_count, 6);
        assert_eq!(status.result_count, 0);
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.process_id, std::process::id());
    }
}
