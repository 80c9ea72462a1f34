//! Error types
//!
//! Validation failures are expected and recoverable: the action is abandoned
//! and nothing is mutated. Storage failures come from the persistence port.

use thiserror::Error;

use crate::db::DbError;

/// User-input validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Ingredient name cannot be empty")]
    EmptyIngredientName,

    #[error("Preparation name cannot be empty")]
    EmptyPreparationName,

    #[error("Drink name cannot be empty")]
    EmptyDrinkName,

    #[error("Total weight must be greater than 0")]
    NonPositiveTotalWeight,

    #[error("Add at least one ingredient with a positive weight")]
    NoComponents,

    #[error("Add ingredients for at least one volume")]
    NoVolumes,

    #[error("Nutrition values are out of range, check the weights")]
    NonFiniteResult,

    #[error("Ingredient not found with id: {0}")]
    UnknownIngredient(String),

    #[error("Result not found with id: {0}")]
    UnknownResult(String),
}

/// Persistence port failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Result type for persistence operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Any failure surfaced by the calculator core
#[derive(Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CalcError {
    /// Whether this is a user-input problem rather than an internal failure
    pub fn is_validation(&self) -> bool {
        matches!(self, CalcError::Validation(_))
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
