//! Product collection management and multi-line orders.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::{InventoryError, Money, Product, Result, Sellable};

/// One line of an order: which product, and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

impl From<(ProductId, u32)> for OrderLine {
    fn from((product_id, quantity): (ProductId, u32)) -> Self {
        Self::new(product_id, quantity)
    }
}

/// An ordered catalog of products.
///
/// The store owns its products exclusively. Products are identified by
/// [`ProductId`]; duplicate names and even duplicate ids (a product added
/// twice) are allowed. Lookups and removal resolve to the first match, while
/// orders buy from the first *active* match.
#[derive(Debug, Clone)]
pub struct Store<P: Sellable = Product> {
    products: Vec<P>,
}

impl<P: Sellable> Store<P> {
    /// Creates a store holding `products` in the given order.
    pub fn new(products: Vec<P>) -> Self {
        Self { products }
    }

    /// Appends a product to the end of the catalog.
    pub fn add_product(&mut self, product: P) {
        tracing::debug!(product_id = %product.id(), "product added");
        self.products.push(product);
    }

    /// Removes the first product with the given id and returns it.
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<P> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == product_id)
            .ok_or(InventoryError::NotFound { product_id })?;

        tracing::debug!(%product_id, "product removed");
        Ok(self.products.remove(index))
    }

    /// Returns the stock summed over every product, active or not.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity())).sum()
    }

    /// Returns the active products, in catalog order.
    ///
    /// This is the orderable catalog. Depleted products are hidden here even
    /// though [`Store::total_quantity`] still counts them.
    pub fn get_all_products(&self) -> Vec<&P> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    /// Returns every product, including inactive ones.
    pub fn products(&self) -> &[P] {
        &self.products
    }

    /// Returns the first product with the given id.
    pub fn get_product(&self, product_id: ProductId) -> Option<&P> {
        self.products.iter().find(|p| p.id() == product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Buys every line in sequence and returns the combined cost.
    ///
    /// Lines for inactive products are skipped and contribute nothing.
    /// The first failing line aborts the order with its error; stock already
    /// taken by earlier lines is not restored. A running total that no longer
    /// fits in [`Money`] fails with [`InventoryError::AmountOverflow`] after
    /// the offending line has been bought.
    #[tracing::instrument(skip(self, lines), fields(lines = lines.len()))]
    pub fn order(&mut self, lines: &[OrderLine]) -> Result<Money> {
        metrics::counter!("inventory_orders_total").increment(1);

        let mut total = Money::zero();
        for (index, line) in lines.iter().enumerate() {
            let cost = self.order_line(line).inspect_err(|error| {
                metrics::counter!("inventory_orders_failed_total").increment(1);
                tracing::warn!(
                    line = index,
                    product_id = %line.product_id,
                    %error,
                    "order aborted"
                );
            })?;
            total = total.checked_add(cost).ok_or_else(|| {
                metrics::counter!("inventory_orders_failed_total").increment(1);
                tracing::warn!(line = index, "order total overflowed");
                InventoryError::AmountOverflow
            })?;
        }

        tracing::info!(%total, "order completed");
        Ok(total)
    }

    /// Buys one line from the first active entry with the line's id.
    ///
    /// Copies of a product added twice carry their own stock, so a depleted
    /// first copy must not shadow a later one that can still be sold.
    fn order_line(&mut self, line: &OrderLine) -> Result<Money> {
        let mut matches = self
            .products
            .iter_mut()
            .filter(|p| p.id() == line.product_id)
            .peekable();

        if matches.peek().is_none() {
            return Err(InventoryError::NotFound {
                product_id: line.product_id,
            });
        }

        match matches.find(|p| p.is_active()) {
            Some(product) => product.buy(line.quantity),
            None => {
                tracing::debug!(product_id = %line.product_id, "skipping inactive product");
                Ok(Money::zero())
            }
        }
    }
}

impl<P: Sellable> Default for Store<P> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P: Sellable> FromIterator<P> for Store<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
