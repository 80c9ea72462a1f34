//! Beverage Nutrition Calculator (bevcalc) Library
//!
//! Ingredient catalog, preparation and drink nutrition math with milk
//! substitution, and a durable history of computed drinks.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod ids;
pub mod ledger;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod storage;
pub mod tools;
pub mod workspace;

pub use error::{CalcError, CalcResult, StorageError, ValidationError};
pub use workspace::Workspace;
