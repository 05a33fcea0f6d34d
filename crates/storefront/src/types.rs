//! View models handed to the renderer.
//!
//! These are plain serializable snapshots; they never borrow from the cart.

use serde::{Deserialize, Serialize};

use shopcart_cart::{CartLineView, Receipt};
use shopcart_catalog::{Product, ProductKind};
use shopcart_core::{Money, ProductId};

/// One row of the product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub stock: u32,
    #[serde(flatten)]
    pub kind: ProductKind,
    pub display: String,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().clone(),
            name: p.name().to_string(),
            unit_price: p.unit_price(),
            stock: p.quantity(),
            kind: p.kind().clone(),
            display: p.display_line(),
        }
    }
}

/// One row of the cart view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineSummary {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub subtotal: Money,
    pub display: String,
}

impl From<&CartLineView<'_>> for CartLineSummary {
    fn from(view: &CartLineView<'_>) -> Self {
        Self {
            product_id: view.product.id().clone(),
            name: view.product.name().to_string(),
            quantity: view.quantity,
            subtotal: view.subtotal(),
            display: view.display_line(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub lines: Vec<CartLineSummary>,
    pub total: Money,
}

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A short message box: title plus body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Everything the console can print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Response {
    Notice(Notice),
    Products(Vec<ProductView>),
    Cart(CartSummary),
    Receipt(Receipt),
    Help(Vec<String>),
}
