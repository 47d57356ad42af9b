//! Catalog loading - ability and item data from TOML
//!
//! Catalogs are constructed explicitly and passed in wherever they are
//! needed; there is no global static data. Built-in defaults are embedded
//! TOML files.

mod abilities;
mod items;

pub use abilities::{default_abilities, AbilityCatalog, ClassAbilities};
pub use items::{default_items, ItemCatalog};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading error. Malformed catalogs are a startup-time failure,
/// never something the battle engine handles.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Catalog validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, CatalogError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
