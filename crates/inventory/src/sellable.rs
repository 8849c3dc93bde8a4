//! The capability a store needs from the items it holds.

use common::ProductId;

use crate::{Money, Product, Result};

/// An item that can be stocked and sold by a [`Store`](crate::Store).
pub trait Sellable {
    /// Identity used for removal and order lookup.
    fn id(&self) -> ProductId;

    /// Units currently in stock.
    fn quantity(&self) -> u32;

    /// Whether the item is listed and orderable.
    fn is_active(&self) -> bool;

    /// Sells `quantity` units and returns their cost.
    fn buy(&mut self, quantity: u32) -> Result<Money>;
}

impl Sellable for Product {
    fn id(&self) -> ProductId {
        Product::id(self)
    }

    fn quantity(&self) -> u32 {
        Product::quantity(self)
    }

    fn is_active(&self) -> bool {
        Product::is_active(self)
    }

    fn buy(&mut self, quantity: u32) -> Result<Money> {
        Product::buy(self, quantity)
    }
}
