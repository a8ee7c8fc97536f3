//! Where the demo's items come from: the built-in sample or a JSON file.
//!
//! ## Items File Format
//! ```json
//! [
//!   { "title": "Apple", "price": "0.99", "quantity": 5, "type": "NEW" },
//!   { "title": "Nails", "price": "2.00", "quantity": 500, "type": "REGULAR" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ticket_core::{Cart, ItemType, Money, NewItem, ValidationResult};
use tracing::info;

/// Sample items: (title, price in cents, quantity, type).
const SAMPLE_ITEMS: [(&str, i64, i64, ItemType); 4] = [
    ("Apple", 99, 5, ItemType::New),
    ("Banana", 2000, 4, ItemType::SecondFree),
    ("A long piece of toilet paper", 1720, 1, ItemType::Sale),
    ("Nails", 200, 500, ItemType::Regular),
];

/// Builds the fixed four-item sample cart.
pub fn sample_cart() -> ValidationResult<Cart> {
    let mut cart = Cart::new();
    for (title, cents, quantity, item_type) in SAMPLE_ITEMS {
        cart.add_item(title, Money::from_cents(cents), quantity, item_type)?;
    }
    Ok(cart)
}

/// Reads an items file and rings every record up in order.
pub fn load_cart(path: &Path) -> Result<Cart> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read items file {}", path.display()))?;
    let cart = cart_from_json(&json)
        .with_context(|| format!("Invalid items file {}", path.display()))?;

    info!(path = %path.display(), items = cart.item_count(), "Items loaded");
    Ok(cart)
}

/// Parses a JSON array of items. Stops at the first invalid record.
pub fn cart_from_json(json: &str) -> Result<Cart> {
    let records: Vec<NewItem> = serde_json::from_str(json).context("Malformed items JSON")?;

    let mut cart = Cart::new();
    for (index, record) in records.into_iter().enumerate() {
        cart.add_new_item(record)
            .with_context(|| format!("Item #{} rejected", index + 1))?;
    }
    Ok(cart)
}
