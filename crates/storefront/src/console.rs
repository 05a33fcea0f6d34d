//! Line-oriented console front end.

use std::io::{BufRead, Write};

use anyhow::Context;
use thiserror::Error;

use crate::commands::{self, AppState};
use crate::config::OutputMode;
use crate::types::Response;

pub const TITLE: &str = "Online Shopping Cart";

const HELP: &[&str] = &[
    "list                      show products and stock",
    "add <product-id> <qty>    reserve items in the cart",
    "remove <product-id>       drop a product from the cart",
    "cart                      show cart contents and grand total",
    "checkout                  pay for the cart",
    "help                      show this help",
    "quit                      leave the shop",
];

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { product_id: String, quantity: String },
    Remove { product_id: String },
    Cart,
    Checkout,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line. Blank lines yield `None`.
///
/// `add` keeps its arguments as raw text; a missing quantity is reported by
/// the command itself, the same way an unparsable one is.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("list", []) => Command::List,
        ("add", [product_id]) => Command::Add {
            product_id: product_id.to_string(),
            quantity: String::new(),
        },
        ("add", [product_id, quantity]) => Command::Add {
            product_id: product_id.to_string(),
            quantity: quantity.to_string(),
        },
        ("add", _) => return Err(CommandError::Usage("add <product-id> <qty>")),
        ("remove", [product_id]) => Command::Remove {
            product_id: product_id.to_string(),
        },
        ("remove", _) => return Err(CommandError::Usage("remove <product-id>")),
        ("cart", []) => Command::Cart,
        ("checkout", []) => Command::Checkout,
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        (other, _) => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Run one command against the state.
pub fn dispatch(state: &mut AppState, command: Command) -> Vec<Response> {
    match command {
        Command::List => vec![Response::Products(commands::list_products(state))],
        Command::Add {
            product_id,
            quantity,
        } => commands::add_to_cart(state, &product_id, &quantity),
        Command::Remove { product_id } => commands::remove_from_cart(state, &product_id),
        Command::Cart => vec![Response::Cart(commands::view_cart(state))],
        Command::Checkout => commands::checkout(state),
        Command::Help => vec![Response::Help(HELP.iter().map(|s| s.to_string()).collect())],
        Command::Quit => Vec::new(),
    }
}

/// Write a response in the configured output mode.
pub fn render(out: &mut impl Write, mode: OutputMode, response: &Response) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        let json = serde_json::to_string(response).context("failed to serialize response")?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    match response {
        Response::Notice(notice) => writeln!(out, "{}: {}", notice.title, notice.message)?,
        Response::Products(products) => {
            for product in products {
                writeln!(out, "{}", product.display)?;
            }
        }
        Response::Cart(cart) => {
            for line in &cart.lines {
                writeln!(out, "{}", line.display)?;
            }
            writeln!(out, "Grand Total: {}", cart.total)?;
        }
        Response::Receipt(receipt) => writeln!(out, "Receipt: {}", receipt.receipt_id)?,
        Response::Help(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}

/// Read commands from `input` until EOF or `quit`, writing responses to `output`.
pub fn run(
    state: &mut AppState,
    mode: OutputMode,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    if mode == OutputMode::Text {
        writeln!(output, "{TITLE}")?;
    }
    render(
        &mut output,
        mode,
        &Response::Products(commands::list_products(state)),
    )?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!(input = %line, error = %e, "unparsable command");
                let notice = crate::types::Notice::error(e.to_string());
                render(&mut output, mode, &Response::Notice(notice))?;
                output.flush()?;
                continue;
            }
        };

        tracing::debug!(?command, "dispatching command");
        if command == Command::Quit {
            break;
        }

        for response in dispatch(state, command) {
            render(&mut output, mode, &response)?;
        }
        output.flush()?;
    }

    tracing::info!("console session ended");
    Ok(())
}
