//! Inventory and ordering core for the shop.
//!
//! This crate provides:
//! - `Money` for exact cent-based prices and totals
//! - `Product` with its stock, activation state, and single-item purchase rule
//! - `Sellable`, the capability a store needs from the items it holds
//! - `Store` for catalog management and multi-line orders
//!
//! Everything here is synchronous and performs no I/O.

pub mod error;
pub mod money;
pub mod product;
pub mod sellable;
pub mod store;

pub use common::ProductId;
pub use error::InventoryError;
pub use money::Money;
pub use product::{CatalogEntry, Product};
pub use sellable::Sellable;
pub use store::{OrderLine, Store};

/// Convenience type alias for inventory results.
pub type Result<T> = std::result::Result<T, InventoryError>;
