use serde::{Deserialize, Serialize};

use shopcart_catalog::Product;
use shopcart_core::{Money, ProductId};

/// Reserved quantity of one product.
///
/// The line only names the product; the catalog owns the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A cart line joined with its catalog product, for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartLineView<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl CartLineView<'_> {
    pub fn subtotal(&self) -> Money {
        self.product.unit_price().times(self.quantity)
    }

    /// `T-Shirt | Qty: 5 | Subtotal: ₹2495`
    pub fn display_line(&self) -> String {
        format!(
            "{} | Qty: {} | Subtotal: {}",
            self.product.name(),
            self.quantity,
            self.subtotal()
        )
    }
}
