use thiserror::Error;

use shopcart_catalog::StockError;

/// Cart-level failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The reservation against catalog stock was refused.
    #[error(transparent)]
    Stock(#[from] StockError),

    #[error("cart is empty")]
    EmptyCart,
}
