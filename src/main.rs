//! Beverage Nutrition Calculator (bevcalc)
//!
//! An MCP server for ingredient, preparation and drink nutrition.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use bevcalc::build_info;
use bevcalc::config;
use bevcalc::db;
use bevcalc::ids::IdGenerator;
use bevcalc::mcp::CalcService;
use bevcalc::storage::SqliteBlobStore;
use bevcalc::Workspace;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; stdout carries the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bevcalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let db_path = config::database_path();
    eprintln!("Database path: {}", db_path.display());

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    eprintln!("Initializing database...");
    let database = db::open_and_migrate(&db_path)?;
    let version = database.with_conn(db::migrations::get_schema_version)?;
    eprintln!("Database schema version: {}", version);
    if !database.with_conn(db::migrations::is_current)? {
        tracing::warn!(version, "database schema is not the version this build expects");
    }

    let store = Arc::new(SqliteBlobStore::new(database));
    let workspace = Workspace::open(store, IdGenerator::default())?;

    let service = CalcService::new(db_path, workspace);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
