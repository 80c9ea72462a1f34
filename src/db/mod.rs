//! Database module
//!
//! Handles SQLite connection and migrations.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};

use std::path::Path;

/// Open (creating if needed) the database at `path` and bring its schema up to date
pub fn open_and_migrate<P: AsRef<Path>>(path: P) -> DbResult<Database> {
    let database = Database::new(path)?;
    database.with_conn(migrations::run_migrations)?;
    Ok(database)
}
