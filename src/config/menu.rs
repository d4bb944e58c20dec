//! Menu configuration loading from menu.toml
//!
//! The menu file lists the ingredients and boards the shop starts with. Pizzas refer to
//! ingredients by name, and boards cannot be created over the API, so both are seeded
//! from this file when the service starts.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire menu.toml file
#[derive(Debug, Default, Deserialize)]
pub struct MenuConfig {
    /// Ingredients to make available
    #[serde(default)]
    pub ingredients: Vec<IngredientConfig>,
    /// Kanban boards to create
    #[serde(default)]
    pub boards: Vec<BoardConfig>,
}

/// Configuration for a single ingredient
#[derive(Debug, Deserialize, Clone)]
pub struct IngredientConfig {
    /// Unique ingredient name
    pub name: String,
    /// Pricing tier (e.g., "cheese", "premium")
    pub tier: String,
    /// Surcharge in dollars
    pub price: f64,
    /// Whether the ingredient starts out in stock
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Configuration for a single board
#[derive(Debug, Deserialize, Clone)]
pub struct BoardConfig {
    /// Board title
    pub title: String,
    /// CSS color for the board background
    pub background_color: String,
}

const fn default_available() -> bool {
    true
}

/// Loads the menu from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MenuConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read menu file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse menu file: {e}"),
    })
}

/// Loads the menu if the file exists; a missing file yields `None`.
pub fn load_optional_config<P: AsRef<Path>>(path: P) -> Result<Option<MenuConfig>> {
    if path.as_ref().exists() {
        load_config(path).map(Some)
    } else {
        Ok(None)
    }
}
