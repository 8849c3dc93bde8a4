//! Inventory error types.

use common::ProductId;
use thiserror::Error;

/// Errors that can occur during catalog and order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// A product could not be constructed from the given values.
    #[error("Invalid {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },

    /// Purchase quantity must be positive.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Requested more units than are in stock.
    #[error("Insufficient stock: requested {requested}, only {available} available")]
    InsufficientStock { requested: u32, available: u32 },

    /// The product is inactive and cannot be bought directly.
    #[error("Product unavailable: {name}")]
    ProductUnavailable { name: String },

    /// No product with this identity is held by the store.
    #[error("Product not found: {product_id}")]
    NotFound { product_id: ProductId },

    /// A purchase cost or order total does not fit in [`Money`](crate::Money).
    #[error("Amount overflow: the total is too large to represent")]
    AmountOverflow,
}

impl InventoryError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { field, reason }
    }
}
