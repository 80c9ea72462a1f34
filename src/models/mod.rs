//! Data models
//!
//! Plain data carried between the calculator core, storage and tools.

mod component;
mod drink;
mod ingredient;
mod milk;
mod nutrition;
mod result_record;

pub use component::{effective_components, Component, ComponentRow};
pub use drink::{DrinkCalculation, DrinkVolumeResult, MilkVariantRow, VolumeInput};
pub use ingredient::{Ingredient, IngredientCreate, IngredientLookup};
pub use milk::{is_milk_id, MilkVariant, MILK_VARIANTS};
pub use nutrition::NutrientProfile;
pub use result_record::{ResultDraft, ResultRecord};
