//! Print saved drink results as export text
//! Usage: cargo run --bin export_results -- [result_id]

use std::sync::Arc;

use bevcalc::config;
use bevcalc::db;
use bevcalc::ids::IdGenerator;
use bevcalc::ledger::ResultLedger;
use bevcalc::storage::SqliteBlobStore;
use bevcalc::tools::results::format_result_export;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let wanted = args.get(1).map(|s| s.as_str());

    let db_path = config::database_path();
    eprintln!("Database: {}", db_path.display());

    let database = db::open_and_migrate(&db_path)?;
    let ledger = ResultLedger::load(Arc::new(SqliteBlobStore::new(database)), Arc::new(IdGenerator::default()))?;

    let records: Vec<_> = match wanted {
        Some(id) => ledger.find_by_id(id).into_iter().collect(),
        None => ledger.list().iter().collect(),
    };

    if records.is_empty() {
        match wanted {
            Some(id) => eprintln!("No result found with id: {}", id),
            None => eprintln!("No saved results"),
        }
        return Ok(());
    }

    for (i, rec) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format_result_export(rec));
    }

    Ok(())
}
