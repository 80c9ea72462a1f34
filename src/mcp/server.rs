//! bevcalc MCP Server Implementation
//!
//! Implements the MCP server with all calculator tools.

use std::path::PathBuf;
use std::sync::{Arc, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::CalcError;
use crate::models::{ComponentRow, IngredientCreate, VolumeInput};
use crate::tools::drinks::{self, DrinkInput};
use crate::tools::ingredients;
use crate::tools::preparations::{self, PreparationInput};
use crate::tools::results;
use crate::tools::status::StatusTracker;
use crate::workspace::Workspace;

/// bevcalc MCP Service
///
/// Every tool call holds the workspace lock for its whole duration, so
/// calculations and writes never interleave.
#[derive(Clone)]
pub struct CalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    workspace: Arc<std::sync::Mutex<Workspace>>,
    tool_router: ToolRouter<CalcService>,
}

impl CalcService {
    pub fn new(database_path: PathBuf, workspace: Workspace) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            workspace: Arc::new(std::sync::Mutex::new(workspace)),
            tool_router: Self::tool_router(),
        }
    }

    fn workspace(&self) -> Result<MutexGuard<'_, Workspace>, McpError> {
        self.workspace
            .lock()
            .map_err(|_| McpError::internal_error("Workspace lock poisoned", None))
    }
}

/// Validation problems are the caller's to fix; anything else is ours
fn calc_error(e: CalcError) -> McpError {
    if e.is_validation() {
        McpError::invalid_params(e.to_string(), None)
    } else {
        McpError::internal_error(e.to_string(), None)
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Ingredient Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddIngredientParams {
    /// Ingredient name
    pub name: String,
    /// Energy per 100 g (kcal)
    pub kcal: f64,
    /// Protein per 100 g (grams)
    pub protein: f64,
    /// Fat per 100 g (grams)
    pub fat: f64,
    /// Carbohydrates per 100 g (grams)
    pub carbs: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientIdParams {
    /// Ingredient ID
    pub id: String,
}

// ============================================================================
// Composition Parameter Structs
// ============================================================================

/// One component line: ingredient and grams
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComponentParam {
    /// Ingredient ID (lines without one are ignored)
    pub ingredient_id: Option<String>,
    /// Weight in grams (lines with weight <= 0 are ignored)
    pub weight: Option<f64>,
}

impl From<ComponentParam> for ComponentRow {
    fn from(p: ComponentParam) -> Self {
        ComponentRow {
            ingredient_id: p.ingredient_id,
            weight: p.weight,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PreparationParams {
    /// Name to save the preparation under (required by save_preparation)
    pub name: Option<String>,
    /// Finished weight of the preparation in grams
    pub total_weight: Option<f64>,
    /// Ingredients and their weights
    #[serde(default)]
    pub components: Vec<ComponentParam>,
}

impl From<PreparationParams> for PreparationInput {
    fn from(p: PreparationParams) -> Self {
        PreparationInput {
            name: p.name,
            total_weight: p.total_weight,
            components: p.components.into_iter().map(ComponentRow::from).collect(),
        }
    }
}

/// Components for one serving volume
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct VolumeParam {
    /// Serving size in ml (e.g. 250, 350, 450)
    pub volume_ml: u32,
    /// Ingredients and their weights for this volume
    #[serde(default)]
    pub components: Vec<ComponentParam>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DrinkParams {
    /// Drink name (required by save_drink_result)
    pub name: Option<String>,
    /// Serving volumes, each computed independently
    #[serde(default)]
    pub volumes: Vec<VolumeParam>,
}

impl From<DrinkParams> for DrinkInput {
    fn from(p: DrinkParams) -> Self {
        DrinkInput {
            name: p.name,
            volumes: p
                .volumes
                .into_iter()
                .map(|v| VolumeInput {
                    volume_ml: v.volume_ml,
                    components: v.components.into_iter().map(ComponentRow::from).collect(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Result Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ResultIdParams {
    /// Saved result ID
    pub id: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the calculator including build info, database status, catalog counts and process information")]
    async fn bevcalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = {
            let ws = self.workspace()?;
            tracker.get_status(&ws)
        };
        json_result(&status)
    }

    #[tool(description = "Get step-by-step instructions for computing ingredient, preparation and drink nutrition. Call this when starting a session or when unsure how to use the tools.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Ingredients ---

    #[tool(description = "Add an ingredient with kcal, protein, fat and carbs per 100 g")]
    fn add_ingredient(&self, Parameters(p): Parameters<AddIngredientParams>) -> Result<CallToolResult, McpError> {
        let data = IngredientCreate {
            name: p.name,
            kcal: p.kcal,
            protein: p.protein,
            fat: p.fat,
            carbs: p.carbs,
        };
        let mut ws = self.workspace()?;
        let result = ingredients::add_ingredient(&mut ws, data).map_err(calc_error)?;
        json_result(&result)
    }

    #[tool(description = "List all ingredients with per-100g values rounded to one decimal")]
    fn list_ingredients(&self) -> Result<CallToolResult, McpError> {
        let ws = self.workspace()?;
        json_result(&ingredients::list_ingredients(&ws))
    }

    #[tool(description = "Get an ingredient by ID")]
    fn get_ingredient(&self, Parameters(p): Parameters<IngredientIdParams>) -> Result<CallToolResult, McpError> {
        let ws = self.workspace()?;
        match ingredients::get_ingredient(&ws, &p.id) {
            Some(ing) => json_result(&ing),
            None => json_result(&serde_json::json!({"error": "Ingredient not found", "id": p.id})),
        }
    }

    #[tool(description = "Delete an ingredient. Saved results are not changed.")]
    fn delete_ingredient(&self, Parameters(p): Parameters<IngredientIdParams>) -> Result<CallToolResult, McpError> {
        let mut ws = self.workspace()?;
        let result = ingredients::delete_ingredient(&mut ws, &p.id).map_err(calc_error)?;
        json_result(&result)
    }

    #[tool(description = "List the six milk variants used for milk substitution and whether each is in the catalog")]
    fn list_milk_variants(&self) -> Result<CallToolResult, McpError> {
        let ws = self.workspace()?;
        json_result(&ingredients::list_milk_variants(&ws))
    }

    // --- Preparations ---

    #[tool(description = "Compute the per-100g nutrition of a preparation from its components and finished weight, without saving")]
    fn calculate_preparation(&self, Parameters(p): Parameters<PreparationParams>) -> Result<CallToolResult, McpError> {
        let input = PreparationInput::from(p);
        let ws = self.workspace()?;
        let result = preparations::calculate_preparation(&ws, &input).map_err(calc_error)?;
        json_result(&result)
    }

    #[tool(description = "Compute a preparation and save it as a new ingredient under the given name")]
    fn save_preparation(&self, Parameters(p): Parameters<PreparationParams>) -> Result<CallToolResult, McpError> {
        let input = PreparationInput::from(p);
        let mut ws = self.workspace()?;
        let result = preparations::save_preparation(&mut ws, &input).map_err(calc_error)?;
        json_result(&result)
    }

    // --- Drinks ---

    #[tool(description = "Compute drink totals for each serving volume, plus one row per milk variant for volumes containing milk. Nothing is saved.")]
    fn calculate_drink(&self, Parameters(p): Parameters<DrinkParams>) -> Result<CallToolResult, McpError> {
        let input = DrinkInput::from(p);
        let ws = self.workspace()?;
        let result = drinks::calculate_drink_volumes(&ws, &input).map_err(calc_error)?;
        json_result(&result)
    }

    #[tool(description = "Compute a drink for all volumes and save it to the result history under its name")]
    fn save_drink_result(&self, Parameters(p): Parameters<DrinkParams>) -> Result<CallToolResult, McpError> {
        let input = DrinkInput::from(p);
        let mut ws = self.workspace()?;
        let result = drinks::save_drink_result(&mut ws, &input).map_err(calc_error)?;
        json_result(&result)
    }

    // --- Results ---

    #[tool(description = "List saved drink results, oldest first")]
    fn list_results(&self) -> Result<CallToolResult, McpError> {
        let ws = self.workspace()?;
        json_result(&results::list_results(&ws))
    }

    #[tool(description = "Get a saved drink result with all volumes and milk variants")]
    fn get_result(&self, Parameters(p): Parameters<ResultIdParams>) -> Result<CallToolResult, McpError> {
        let ws = self.workspace()?;
        match results::get_result(&ws, &p.id) {
            Some(rec) => json_result(&rec),
            None => json_result(&serde_json::json!({"error": "Result not found", "id": p.id})),
        }
    }

    #[tool(description = "Delete a saved drink result")]
    fn delete_result(&self, Parameters(p): Parameters<ResultIdParams>) -> Result<CallToolResult, McpError> {
        let mut ws = self.workspace()?;
        let result = results::delete_result(&mut ws, &p.id).map_err(calc_error)?;
        json_result(&result)
    }

    #[tool(description = "Export a saved drink result as plain text: one header per volume, one line per milk variant")]
    fn export_result(&self, Parameters(p): Parameters<ResultIdParams>) -> Result<CallToolResult, McpError> {
        let ws = self.workspace()?;
        let result = results::export_result(&ws, &p.id).map_err(calc_error)?;
        Ok(CallToolResult::success(vec![Content::text(result.text)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for CalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bevcalc".into(),
                version: crate::build_info::BuildInfo::current().full_version(),
                title: Some("Beverage Nutrition Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "bevcalc - nutrition (kcal, protein, fat, carbs) for ingredients, preparations and drinks. \
                 IMPORTANT: Call calculator_instructions first. \
                 Ingredients: add/get/list/delete_ingredient, list_milk_variants. \
                 Preparations: calculate_preparation, save_preparation (saves as ingredient). \
                 Drinks: calculate_drink, save_drink_result (per volume, with milk substitution). \
                 Results: list/get/delete_result, export_result."
                    .into(),
            ),
        }
    }
}
