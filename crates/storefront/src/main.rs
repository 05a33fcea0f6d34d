//! `shopcart` console entry point.

use anyhow::Context;

use shopcart_storefront::{AppState, StorefrontConfig, console};

fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env().context("invalid configuration")?;
    shopcart_observability::init(config.log_format);

    tracing::info!(output = ?config.output, log_format = ?config.log_format, "starting storefront");

    let mut state = AppState::default();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    console::run(&mut state, config.output, stdin.lock(), stdout.lock())
}
