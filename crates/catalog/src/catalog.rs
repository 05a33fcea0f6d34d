//! The product catalog and its stock bookkeeping.

use std::collections::HashMap;

use thiserror::Error;

use shopcart_core::{DomainError, DomainResult, Money, ProductId};

use crate::product::Product;

/// Why a stock change was refused.
///
/// A refused change never mutates the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("invalid quantity: {0} (must be positive)")]
    InvalidQuantity(i64),

    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: u32 },
}

/// Authoritative set of products, keyed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// Ids must be unique.
    pub fn new(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let mut map = HashMap::new();
        for product in products {
            let id = product.id().clone();
            if map.insert(id.clone(), product).is_some() {
                return Err(DomainError::validation(format!("duplicate product id: {id}")));
            }
        }
        Ok(Self { products: map })
    }

    /// The fixed storefront catalog.
    pub fn seeded() -> Self {
        let products = [
            Product::physical(ProductId::new("p001"), "T-Shirt", Money::new(499), 50, 0.2),
            Product::physical(ProductId::new("p002"), "Coffee Mug", Money::new(249), 30, 0.4),
            Product::digital(ProductId::new("d001"), "E-Book", Money::new(1299), 1000, "link"),
        ];
        Self {
            products: products
                .into_iter()
                .map(|p| (p.id().clone(), p))
                .collect(),
        }
    }

    pub fn lookup(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Every product, ordered by id.
    pub fn all(&self) -> Vec<&Product> {
        let mut all: Vec<&Product> = self.products.values().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Reserve `qty` units. Returns the remaining stock.
    pub fn decrease_stock(&mut self, id: &ProductId, qty: i64) -> Result<u32, StockError> {
        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| StockError::UnknownProduct(id.clone()))?;

        if qty <= 0 {
            return Err(StockError::InvalidQuantity(qty));
        }

        let available = product.quantity();
        let requested = u32::try_from(qty)
            .ok()
            .filter(|q| *q <= available)
            .ok_or(StockError::InsufficientStock { requested: qty, available })?;

        let remaining = available - requested;
        product.set_quantity(remaining);
        Ok(remaining)
    }

    /// Return `qty` units to stock. Returns the new stock level.
    pub fn increase_stock(&mut self, id: &ProductId, qty: u32) -> Result<u32, StockError> {
        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| StockError::UnknownProduct(id.clone()))?;

        let restored = product.quantity().saturating_add(qty);
        product.set_quantity(restored);
        Ok(restored)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(code: &str) -> ProductId {
        ProductId::new(code)
    }

    fn stock(catalog: &Catalog, code: &str) -> u32 {
        catalog.lookup(&pid(code)).unwrap().quantity()
    }

    #[test]
    fn seeded_catalog_has_three_products() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 3);

        let shirt = catalog.lookup(&pid("p001")).unwrap();
        assert_eq!(shirt.name(), "T-Shirt");
        assert_eq!(shirt.unit_price(), Money::new(499));
        assert_eq!(shirt.quantity(), 50);

        assert_eq!(stock(&catalog, "p002"), 30);
        assert_eq!(stock(&catalog, "d001"), 1000);
    }

    #[test]
    fn all_is_ordered_by_id() {
        let catalog = Catalog::seeded();
        let ids: Vec<&str> = catalog.all().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["d001", "p001", "p002"]);
    }

    #[test]
    fn lookup_unknown_is_none() {
        assert!(Catalog::seeded().lookup(&pid("x999")).is_none());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new([
            Product::physical(pid("p001"), "A", Money::new(1), 1, 0.1),
            Product::physical(pid("p001"), "B", Money::new(2), 2, 0.1),
        ])
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for duplicate id"),
        }
    }

    #[test]
    fn decrease_stock_reserves_units() {
        let mut catalog = Catalog::seeded();
        assert_eq!(catalog.decrease_stock(&pid("p001"), 5), Ok(45));
        assert_eq!(stock(&catalog, "p001"), 45);
    }

    #[test]
    fn decrease_stock_allows_taking_everything() {
        let mut catalog = Catalog::seeded();
        assert_eq!(catalog.decrease_stock(&pid("p002"), 30), Ok(0));
        assert_eq!(stock(&catalog, "p002"), 0);
    }

    #[test]
    fn decrease_stock_rejects_non_positive_quantity() {
        let mut catalog = Catalog::seeded();
        assert_eq!(
            catalog.decrease_stock(&pid("p001"), 0),
            Err(StockError::InvalidQuantity(0))
        );
        assert_eq!(
            catalog.decrease_stock(&pid("p001"), -3),
            Err(StockError::InvalidQuantity(-3))
        );
        assert_eq!(stock(&catalog, "p001"), 50);
    }

    #[test]
    fn decrease_stock_rejects_more_than_available() {
        let mut catalog = Catalog::seeded();
        assert_eq!(
            catalog.decrease_stock(&pid("p002"), 31),
            Err(StockError::InsufficientStock { requested: 31, available: 30 })
        );
        assert_eq!(stock(&catalog, "p002"), 30);
    }

    #[test]
    fn decrease_stock_rejects_quantities_beyond_u32() {
        let mut catalog = Catalog::seeded();
        let huge = i64::from(u32::MAX) + 1;
        assert_eq!(
            catalog.decrease_stock(&pid("d001"), huge),
            Err(StockError::InsufficientStock { requested: huge, available: 1000 })
        );
    }

    #[test]
    fn decrease_stock_rejects_unknown_product() {
        let mut catalog = Catalog::seeded();
        assert_eq!(
            catalog.decrease_stock(&pid("nope"), 1),
            Err(StockError::UnknownProduct(pid("nope")))
        );
    }

    #[test]
    fn increase_stock_is_unconditional() {
        let mut catalog = Catalog::seeded();
        assert_eq!(catalog.increase_stock(&pid("p001"), 7), Ok(57));
        assert_eq!(catalog.increase_stock(&pid("p001"), 0), Ok(57));
        assert!(catalog.increase_stock(&pid("nope"), 1).is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: decrease succeeds iff 0 < qty <= stock, and only then mutates.
            #[test]
            fn decrease_succeeds_iff_positive_and_in_stock(
                initial in 0u32..200,
                qty in -50i64..300
            ) {
                let mut catalog = Catalog::new([
                    Product::physical(pid("p"), "P", Money::new(10), initial, 1.0),
                ]).unwrap();

                let result = catalog.decrease_stock(&pid("p"), qty);
                let after = stock(&catalog, "p");

                if qty > 0 && qty <= i64::from(initial) {
                    prop_assert_eq!(result, Ok(after));
                    prop_assert_eq!(i64::from(after), i64::from(initial) - qty);
                } else {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(after, initial);
                }
            }

            /// Property: increase undoes a successful decrease.
            #[test]
            fn increase_undoes_decrease(initial in 1u32..500, qty in 1u32..500) {
                let mut catalog = Catalog::new([
                    Product::digital(pid("d"), "D", Money::new(5), initial, "link"),
                ]).unwrap();

                if catalog.decrease_stock(&pid("d"), i64::from(qty)).is_ok() {
                    catalog.increase_stock(&pid("d"), qty).unwrap();
                }
                prop_assert_eq!(stock(&catalog, "d"), initial);
            }
        }
    }
}
