//! bevcalc Tools module
//!
//! Operations behind the MCP tools, one module per screen of the calculator.

pub mod drinks;
pub mod ingredients;
pub mod preparations;
pub mod results;
pub mod status;
