//! `shopcart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and the
//! cart (no IO, no logging).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, ReceiptId};
pub use money::Money;
