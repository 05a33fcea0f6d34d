//! Cart domain module.
//!
//! Reservations against the catalog, line items, totals and checkout. Pure
//! domain logic: no IO, no logging.

pub mod cart;
pub mod error;
pub mod line;
pub mod receipt;

pub use cart::Cart;
pub use error::CartError;
pub use line::{CartLine, CartLineView};
pub use receipt::{Receipt, ReceiptLine};
