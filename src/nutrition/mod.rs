//! Nutrition calculation module
//!
//! Mixture composition, milk substitution and per-volume drink totals.

pub mod compositor;
pub mod drink;
pub mod milk_expander;

pub use compositor::{absolute_totals, compose_components, compose_mixture};
pub use drink::calculate_drink;
pub use milk_expander::{expand_milk_variants, split_milk, MilkSplit};
