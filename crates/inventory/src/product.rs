//! Product entity and the single-item purchase rule.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::{InventoryError, Money, Result};

/// A product in the store catalog.
///
/// Stock can never go negative, and reaching zero stock through
/// [`Product::set_quantity`] (which includes every sale) deactivates the
/// product. The reverse is not automatic: a product stays inactive after a
/// restock until [`Product::activate`] is called, and `activate` is allowed
/// even while stock is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: u32,
    active: bool,
}

impl Product {
    /// Creates a new active product.
    ///
    /// Fails with [`InventoryError::InvalidArgument`] when the name is blank,
    /// the price is not strictly positive, or the quantity is zero.
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(InventoryError::invalid("name", "must not be empty"));
        }

        if !price.is_positive() {
            return Err(InventoryError::invalid("price", "must be a positive amount"));
        }

        if quantity == 0 {
            return Err(InventoryError::invalid("quantity", "must be a positive number"));
        }

        Ok(Self {
            id: ProductId::new(),
            name,
            price,
            quantity,
            active: true,
        })
    }

    /// Builds a product from a catalog entry with a decimal price.
    pub fn from_entry(entry: &CatalogEntry) -> Result<Self> {
        let price = Money::from_decimal(entry.price)
            .ok_or_else(|| InventoryError::invalid("price", "must be a finite number"))?;
        Self::new(entry.name.clone(), price, entry.quantity)
    }

    /// Returns the identity shared by this product and its clones.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the current stock.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Sets the stock level, deactivating the product when it reaches zero.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        if quantity == 0 {
            self.deactivate();
        }
    }

    /// Returns true if the product can be bought.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the product as buyable, whatever its stock.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Withdraws the product from sale.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Renders the product for display.
    pub fn show(&self) -> String {
        format!(
            "{}, Price: {}, Quantity: {}",
            self.name, self.price, self.quantity
        )
    }

    /// Buys `quantity` units and returns what they cost.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// zero quantity, then stock, then activation, then the cost itself, which
    /// fails with [`InventoryError::AmountOverflow`] when it does not fit in
    /// [`Money`]. A failed call leaves the product untouched.
    pub fn buy(&mut self, quantity: u32) -> Result<Money> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity { quantity });
        }

        if quantity > self.quantity {
            return Err(InventoryError::InsufficientStock {
                requested: quantity,
                available: self.quantity,
            });
        }

        if !self.active {
            return Err(InventoryError::ProductUnavailable {
                name: self.name.clone(),
            });
        }

        let total = self
            .price
            .checked_mul(quantity)
            .ok_or(InventoryError::AmountOverflow)?;
        self.set_quantity(self.quantity - quantity);

        metrics::counter!("inventory_units_sold_total").increment(u64::from(quantity));
        if !self.active {
            metrics::counter!("inventory_products_depleted_total").increment(1);
        }
        tracing::debug!(
            product_id = %self.id,
            product = %self.name,
            quantity,
            %total,
            remaining = self.quantity,
            "product purchased"
        );

        Ok(total)
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.show())
    }
}

/// Name, decimal price, and stock for seeding a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new("Widget", Money::from_units(10), 5).unwrap()
    }

    #[test]
    fn test_new_product_is_active() {
        let product = widget();
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.price(), Money::from_cents(1000));
        assert_eq!(product.quantity(), 5);
        assert!(product.is_active());
    }

    #[test]
    fn test_new_rejects_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let result = Product::new(name, Money::from_units(1), 1);
            assert!(matches!(
                result,
                Err(InventoryError::InvalidArgument { field: "name", .. })
            ));
        }
    }

    #[test]
    fn test_new_rejects_non_positive_price() {
        for cents in [0, -1, -1000] {
            let result = Product::new("Widget", Money::from_cents(cents), 1);
            assert!(matches!(
                result,
                Err(InventoryError::InvalidArgument { field: "price", .. })
            ));
        }
    }

    #[test]
    fn test_new_rejects_zero_quantity() {
        let result = Product::new("Widget", Money::from_units(1), 0);
        assert!(matches!(
            result,
            Err(InventoryError::InvalidArgument {
                field: "quantity",
                ..
            })
        ));
    }

    #[test]
    fn test_products_with_same_values_have_distinct_ids() {
        let a = widget();
        let b = widget();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn test_from_entry() {
        let product = Product::from_entry(&CatalogEntry::new("Pixel", 499.99, 3)).unwrap();
        assert_eq!(product.price(), Money::from_cents(49_999));
        assert_eq!(product.quantity(), 3);

        let result = Product::from_entry(&CatalogEntry::new("Pixel", f64::NAN, 3));
        assert!(matches!(
            result,
            Err(InventoryError::InvalidArgument { field: "price", .. })
        ));

        let result = Product::from_entry(&CatalogEntry::new("Pixel", 0.001, 3));
        assert!(matches!(
            result,
            Err(InventoryError::InvalidArgument { field: "price", .. })
        ));
    }

    #[test]
    fn test_set_quantity_to_zero_deactivates() {
        let mut product = widget();
        product.set_quantity(0);
        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());

        // Restocking does not reactivate.
        product.set_quantity(10);
        assert!(!product.is_active());
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut product = widget();
        product.deactivate();
        assert!(!product.is_active());
        product.activate();
        assert!(product.is_active());
    }

    #[test]
    fn test_show() {
        let product = widget();
        assert_eq!(product.show(), "Widget, Price: 10.00, Quantity: 5");
        assert_eq!(product.to_string(), product.show());
    }

    #[test]
    fn test_buy_returns_total_and_reduces_stock() {
        let mut product = Product::new("Cable", Money::from_cents(1999), 10).unwrap();
        let total = product.buy(3).unwrap();
        assert_eq!(total, Money::from_cents(5997));
        assert_eq!(product.quantity(), 7);
        assert!(product.is_active());
    }

    #[test]
    fn test_buy_entire_stock_deactivates() {
        let mut product = widget();
        let total = product.buy(5).unwrap();
        assert_eq!(total.to_decimal(), 50.0);
        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());
    }

    #[test]
    fn test_buy_zero_fails() {
        let mut product = widget();
        let result = product.buy(0);
        assert_eq!(result, Err(InventoryError::InvalidQuantity { quantity: 0 }));
        assert_eq!(product.quantity(), 5);
    }

    #[test]
    fn test_buy_more_than_stock_fails() {
        let mut product = widget();
        let result = product.buy(6);
        assert_eq!(
            result,
            Err(InventoryError::InsufficientStock {
                requested: 6,
                available: 5
            })
        );
        assert_eq!(product.quantity(), 5);
        assert!(product.is_active());
    }

    #[test]
    fn test_buy_inactive_fails() {
        let mut product = widget();
        product.deactivate();
        let result = product.buy(1);
        assert!(matches!(
            result,
            Err(InventoryError::ProductUnavailable { ref name }) if name == "Widget"
        ));
        assert_eq!(product.quantity(), 5);
    }

    #[test]
    fn test_buy_checks_stock_before_activation() {
        let mut product = widget();
        product.deactivate();
        let result = product.buy(6);
        assert!(matches!(
            result,
            Err(InventoryError::InsufficientStock { .. })
        ));
    }

    #[test]
    fn test_reactivated_empty_product_reports_insufficient_stock() {
        let mut product = widget();
        product.buy(5).unwrap();
        product.activate();

        assert!(product.is_active());
        assert_eq!(product.quantity(), 0);
        assert_eq!(
            product.buy(1),
            Err(InventoryError::InsufficientStock {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_buy_whole_stock_at_quantity_limit() {
        let mut product = Product::new("Screw", Money::from_cents(1), u32::MAX).unwrap();

        let total = product.buy(u32::MAX).unwrap();

        assert_eq!(total.cents(), i64::from(u32::MAX));
        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());
    }

    #[test]
    fn test_buy_with_overflowing_cost_fails_cleanly() {
        let mut yacht = Product::from_entry(&CatalogEntry::new("Yacht", 1e15, 100_000)).unwrap();

        let result = yacht.buy(100_000);

        assert_eq!(result, Err(InventoryError::AmountOverflow));
        assert_eq!(yacht.quantity(), 100_000);
        assert!(yacht.is_active());

        // Smaller purchases of the same product still go through.
        assert_eq!(yacht.buy(1).unwrap().cents(), 100_000_000_000_000_000);
    }

    #[test]
    fn test_serialization() {
        let product = widget();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"]["cents"], 1000);
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["active"], true);
    }

    #[test]
    fn test_catalog_entry_deserialization() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"name":"Widget","price":10.5,"quantity":2}"#).unwrap();
        assert_eq!(entry, CatalogEntry::new("Widget", 10.5, 2));
    }
}
