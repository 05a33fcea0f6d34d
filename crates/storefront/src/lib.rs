//! `shopcart-storefront`
//!
//! **Responsibility:** the shopper-facing front end.
//!
//! This crate provides:
//! - configuration from the environment
//! - commands that translate raw input into cart operations
//! - serializable view models
//! - the line-oriented console loop behind the `shopcart` binary
//!
//! The storefront is a **thin shell** around the cart; it keeps no state of its own.

pub mod commands;
pub mod config;
pub mod console;
pub mod types;

pub use commands::AppState;
pub use config::{ConfigError, OutputMode, StorefrontConfig};
pub use console::{Command, CommandError};
