use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopcart_core::{Money, ProductId, ReceiptId};

use crate::line::CartLineView;

/// Snapshot of one purchased line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

impl From<&CartLineView<'_>> for ReceiptLine {
    fn from(view: &CartLineView<'_>) -> Self {
        Self {
            product_id: view.product.id().clone(),
            name: view.product.name().to_string(),
            unit_price: view.product.unit_price(),
            quantity: view.quantity,
            subtotal: view.subtotal(),
        }
    }
}

/// Result of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: ReceiptId,
    pub completed_at: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
}

impl Receipt {
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}
