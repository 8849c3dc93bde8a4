//! Shop error types with user-facing message mapping.

use std::path::PathBuf;

use inventory::InventoryError;
use thiserror::Error;

/// Errors that can occur while running the shop.
#[derive(Debug, Error)]
pub enum ShopError {
    /// An inventory operation was rejected.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid JSON array of entries.
    #[error("Invalid catalog format: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// A catalog entry failed product validation.
    #[error("Invalid catalog entry #{index} ({name}): {source}")]
    InvalidCatalogEntry {
        index: usize,
        name: String,
        #[source]
        source: InventoryError,
    },
}

impl ShopError {
    /// Returns the text shown to the shopper for this error.
    pub fn user_message(&self) -> String {
        match self {
            ShopError::Inventory(err) => inventory_message(err),
            _ => self.to_string(),
        }
    }
}

fn inventory_message(err: &InventoryError) -> String {
    match err {
        InventoryError::InsufficientStock { available, .. } => {
            format!("Only {available} left in stock.")
        }
        InventoryError::ProductUnavailable { name } => {
            format!("{name} is not available at the moment.")
        }
        InventoryError::InvalidQuantity { .. } => {
            "Quantity needs to be a positive number.".to_string()
        }
        InventoryError::NotFound { .. } => "That product is no longer in the store.".to_string(),
        InventoryError::AmountOverflow => "That order is too large to process.".to_string(),
        InventoryError::InvalidArgument { .. } => err.to_string(),
    }
}
