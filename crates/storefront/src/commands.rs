//! Storefront commands: the thin layer between console input and the cart.
//!
//! Each command turns raw user input into a cart operation and returns the
//! responses to show. Domain failures are collapsed into the short messages
//! the shopper sees; the precise reason goes to the log.

use std::num::IntErrorKind;

use chrono::Utc;

use shopcart_cart::Cart;
use shopcart_catalog::Catalog;
use shopcart_core::ProductId;

use crate::types::{CartLineSummary, CartSummary, Notice, ProductView, Response};

/// Application state owned by the console loop.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub cart: Cart,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            cart: Cart::new(catalog),
        }
    }
}

/// Current catalog listing.
pub fn list_products(state: &AppState) -> Vec<ProductView> {
    state
        .cart
        .catalog()
        .all()
        .into_iter()
        .map(ProductView::from)
        .collect()
}

/// Add `quantity` of `product_id` to the cart.
///
/// Both arguments are raw text as typed. On success the refreshed listing
/// follows the notice. Text that is not an integer is an invalid quantity; an
/// integer outside the `i64` range can never be in stock, so it fails like any
/// other refused add.
pub fn add_to_cart(state: &mut AppState, product_id: &str, quantity: &str) -> Vec<Response> {
    let qty: i64 = match quantity.trim().parse::<i64>() {
        Ok(qty) => qty,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            tracing::warn!(
                product_id = %product_id,
                quantity = %quantity,
                error = %e,
                "rejected add: quantity out of range"
            );
            return vec![Response::Notice(Notice::error("Failed to add item"))];
        }
        Err(e) => {
            tracing::warn!(quantity = %quantity, error = %e, "rejected add: unparsable quantity");
            return vec![Response::Notice(Notice::error("Invalid quantity"))];
        }
    };

    let result = product_id
        .parse::<ProductId>()
        .map_err(|e| e.to_string())
        .and_then(|id| {
            state
                .cart
                .add(&id, qty)
                .map(|()| id)
                .map_err(|e| e.to_string())
        });

    match result {
        Ok(id) => {
            tracing::info!(product_id = %id, quantity = qty, total = %state.cart.total(), "item added to cart");
            vec![
                Response::Notice(Notice::info("Success", "Item added to cart")),
                Response::Products(list_products(state)),
            ]
        }
        Err(reason) => {
            tracing::warn!(product_id = %product_id, quantity = qty, error = %reason, "rejected add");
            vec![Response::Notice(Notice::error("Failed to add item"))]
        }
    }
}

/// Remove a product's line from the cart, returning its stock.
///
/// Removing something that is not in the cart is not an error.
pub fn remove_from_cart(state: &mut AppState, product_id: &str) -> Vec<Response> {
    let id = match product_id.parse::<ProductId>() {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(product_id = %product_id, error = %e, "rejected remove");
            return vec![Response::Notice(Notice::error("Invalid product id"))];
        }
    };

    match state.cart.remove(&id) {
        Ok(released) => {
            match released {
                Some(quantity) => {
                    tracing::info!(product_id = %id, quantity, "item removed from cart");
                }
                None => {
                    tracing::debug!(product_id = %id, "remove of absent item ignored");
                }
            }
            vec![
                Response::Notice(Notice::info("Success", "Item removed from cart")),
                Response::Products(list_products(state)),
            ]
        }
        Err(e) => {
            tracing::error!(product_id = %id, error = %e, "failed to restore stock");
            vec![Response::Notice(Notice::error("Failed to remove item"))]
        }
    }
}

/// Cart contents and grand total.
pub fn view_cart(state: &AppState) -> CartSummary {
    let lines = state.cart.lines();
    CartSummary {
        lines: lines.iter().map(CartLineSummary::from).collect(),
        total: state.cart.total(),
    }
}

/// Finalize the cart.
///
/// An empty cart only produces a warning.
pub fn checkout(state: &mut AppState) -> Vec<Response> {
    match state.cart.checkout(Utc::now()) {
        Ok(receipt) => {
            tracing::info!(
                receipt_id = %receipt.receipt_id,
                total = %receipt.total,
                items = receipt.item_count(),
                "checkout completed"
            );
            vec![
                Response::Notice(Notice::info(
                    "Checkout",
                    format!("Total Amount: {}\nThank you!", receipt.total),
                )),
                Response::Receipt(receipt),
            ]
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejected checkout");
            vec![Response::Notice(Notice::warning("Warning", "Cart is empty"))]
        }
    }
}
