//! Catalog domain module.
//!
//! This crate owns the product records and their stock levels, implemented
//! purely as deterministic domain logic (no IO, no logging).

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, StockError};
pub use product::{Product, ProductKind};
