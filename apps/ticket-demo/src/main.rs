//! # Shop Ticket Demo
//!
//! Rings up a cart and prints its receipt.
//!
//! ## Usage
//! ```bash
//! # Print the built-in four-item sample ticket
//! cargo run -p ticket-demo
//!
//! # Ring up items from a JSON file
//! cargo run -p ticket-demo -- ./cart.json
//!
//! # Show debug events on stderr
//! TICKET_LOG=debug cargo run -p ticket-demo
//! ```

mod config;
mod items;

use std::env;
use std::io;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

fn main() -> Result<()> {
    let config = DemoConfig::load(env::args().skip(1))?;

    // Logs on stderr; stdout is reserved for the ticket
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    debug!(?config, "Configuration loaded");

    let cart = match &config.items_file {
        Some(path) => items::load_cart(path)?,
        None => items::sample_cart()?,
    };

    info!(items = cart.item_count(), total = %cart.total(), "Cart ready");
    println!("{}", cart.format_ticket());

    Ok(())
}
