//! Shopping cart: reservations against a catalog it owns.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use shopcart_catalog::{Catalog, StockError};
use shopcart_core::{Money, ProductId, ReceiptId};

use crate::error::CartError;
use crate::line::{CartLine, CartLineView};
use crate::receipt::{Receipt, ReceiptLine};

/// Cart lines plus the catalog they reserve stock from.
///
/// Invariant: until checkout, for every product
/// `catalog stock + reserved quantity == stock before the first add`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    catalog: Catalog,
    lines: HashMap<ProductId, CartLine>,
}

impl Cart {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            lines: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Reserve `qty` units of `id`, creating or growing its line.
    ///
    /// Fails without side effects for an unknown id, a non-positive quantity,
    /// or a quantity above the available stock.
    pub fn add(&mut self, id: &ProductId, qty: i64) -> Result<(), CartError> {
        let before = self
            .catalog
            .lookup(id)
            .map(|p| p.quantity())
            .ok_or_else(|| StockError::UnknownProduct(id.clone()))?;

        let remaining = self.catalog.decrease_stock(id, qty)?;
        let reserved = before - remaining;

        self.lines
            .entry(id.clone())
            .and_modify(|line| line.quantity = line.quantity.saturating_add(reserved))
            .or_insert_with(|| CartLine {
                product_id: id.clone(),
                quantity: reserved,
            });
        Ok(())
    }

    /// Drop the line for `id` and return its quantity to stock.
    ///
    /// Returns the released quantity; `None` (and no change) if there was no line.
    pub fn remove(&mut self, id: &ProductId) -> Result<Option<u32>, CartError> {
        let Some(line) = self.lines.get(id) else {
            return Ok(None);
        };
        let quantity = line.quantity;
        self.catalog.increase_stock(id, quantity)?;
        self.lines.remove(id);
        Ok(Some(quantity))
    }

    /// Sum of `unit_price x quantity` over all lines.
    pub fn total(&self) -> Money {
        self.lines().iter().map(CartLineView::subtotal).sum()
    }

    /// Drop every line without returning stock.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.get(id)
    }

    /// Lines joined with their products, ordered by product id.
    pub fn lines(&self) -> Vec<CartLineView<'_>> {
        let mut views: Vec<CartLineView<'_>> = self
            .lines
            .values()
            .filter_map(|line| {
                self.catalog.lookup(&line.product_id).map(|product| CartLineView {
                    product,
                    quantity: line.quantity,
                })
            })
            .collect();
        views.sort_by(|a, b| a.product.id().cmp(b.product.id()));
        views
    }

    /// Finalize every reservation.
    ///
    /// An empty cart is rejected and left untouched. Otherwise the lines are
    /// snapshotted into a receipt and the cart is cleared; stock stays consumed.
    pub fn checkout(&mut self, completed_at: DateTime<Utc>) -> Result<Receipt, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let views = self.lines();
        let receipt = Receipt {
            receipt_id: ReceiptId::new(),
            completed_at,
            lines: views.iter().map(ReceiptLine::from).collect(),
            total: views.iter().map(CartLineView::subtotal).sum(),
        };

        self.clear();
        Ok(receipt)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}
