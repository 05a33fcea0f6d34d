use serde::{Deserialize, Serialize};

use shopcart_core::{Money, ProductId};

/// Variant-specific product attributes.
///
/// Neither attribute affects pricing or stock handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductKind {
    Physical { weight_kg: f64 },
    Digital { link: String },
}

/// A purchasable product and its available stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: Money,
    quantity: u32,
    kind: ProductKind,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
        kind: ProductKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
            kind,
        }
    }

    pub fn physical(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
        weight_kg: f64,
    ) -> Self {
        Self::new(id, name, unit_price, quantity, ProductKind::Physical { weight_kg })
    }

    pub fn digital(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
        link: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            unit_price,
            quantity,
            ProductKind::Digital { link: link.into() },
        )
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Units currently available (not reserved by a cart).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// One-line listing: `p001 | T-Shirt | ₹499 | Stock: 50`.
    pub fn display_line(&self) -> String {
        format!(
            "{} | {} | {} | Stock: {}",
            self.id, self.name, self.unit_price, self.quantity
        )
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_matches_listing_format() {
        let p = Product::physical(ProductId::new("p001"), "T-Shirt", Money::new(499), 50, 0.2);
        assert_eq!(p.display_line(), "p001 | T-Shirt | ₹499 | Stock: 50");
    }

    #[test]
    fn variants_share_the_same_record() {
        let book = Product::digital(ProductId::new("d001"), "E-Book", Money::new(1299), 1000, "link");
        assert_eq!(book.kind(), &ProductKind::Digital { link: "link".to_string() });
        assert_eq!(book.unit_price(), Money::new(1299));
        assert_eq!(book.id(), &ProductId::new("d001"));
    }
}
