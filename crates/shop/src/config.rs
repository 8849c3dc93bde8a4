//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use inventory::{CatalogEntry, Product, Store};

use crate::error::ShopError;

/// Shop configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"warn"`)
/// - `SHOP_LOG_JSON`: emit JSON log lines when truthy (default: `false`)
/// - `SHOP_CATALOG`: path to a JSON catalog file (default: built-in catalog)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
            log_json: std::env::var("SHOP_LOG_JSON")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            catalog_path: std::env::var_os("SHOP_CATALOG")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Builds the initial store from the configured catalog.
    pub fn load_catalog(&self) -> Result<Store, ShopError> {
        let entries = match &self.catalog_path {
            Some(path) => {
                let json =
                    std::fs::read_to_string(path).map_err(|source| ShopError::CatalogRead {
                        path: path.clone(),
                        source,
                    })?;
                parse_catalog(&json)?
            }
            None => default_catalog(),
        };

        build_store(&entries)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_json: false,
            catalog_path: None,
        }
    }
}

/// The catalog the shop opens with when no file is configured.
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("MacBook Air M2", 1450.0, 100),
        CatalogEntry::new("Bose QuietComfort Earbuds", 250.0, 500),
        CatalogEntry::new("Google Pixel 7", 500.0, 250),
    ]
}

/// Parses a JSON array of catalog entries.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, ShopError> {
    Ok(serde_json::from_str(json)?)
}

/// Validates every entry and builds a store in catalog order.
pub fn build_store(entries: &[CatalogEntry]) -> Result<Store, ShopError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Product::from_entry(entry).map_err(|source| ShopError::InvalidCatalogEntry {
                index,
                name: entry.name.clone(),
                source,
            })
        })
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
