//! # ticket-core: Pure Pricing & Receipt Logic for Shop Ticket
//!
//! This crate is the **heart** of Shop Ticket. It validates items, applies
//! the quantity-tiered discount rule and renders the fixed-width receipt,
//! all as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop Ticket Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/ticket-demo (binary)                      │   │
//! │  │    env config ──► load items ──► print ticket to stdout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ticket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  types   │ │ discount │ │   cart   │ │  table   │          │   │
//! │  │   │  Item    │ │  rule    │ │  Cart    │ │  Table   │          │   │
//! │  │   │ ItemType │ │  0..=80% │ │  ticket  │ │  Column  │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENVIRONMENT • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, ItemType, NewItem)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`error`] - Validation error type
//! - [`validation`] - Item field rules
//! - [`discount`] - The discount rule
//! - [`table`] - Generic fixed-width text table
//! - [`cart`] - Cart and totals
//! - [`ticket`] - Receipt rendering
//!
//! ## Example Usage
//!
//! ```rust
//! use ticket_core::{Cart, ItemType, Money};
//!
//! let mut cart = Cart::new();
//! cart.add_item("Nails", Money::from_cents(200), 500, ItemType::Regular).unwrap();
//!
//! // 500 regular items earn a 50% volume discount
//! assert_eq!(cart.items()[0].discount(), 50);
//! assert_eq!(cart.total().to_string(), "$500.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod table;
pub mod ticket;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use discount::calculate_discount;
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use ticket::format_ticket;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item title, in characters.
pub const MAX_TITLE_CHARS: usize = 32;

/// Upper bound of any discount, in percent.
pub const MAX_DISCOUNT_PERCENT: u32 = 80;

/// Every full step of this many units adds one percent of volume discount.
pub const VOLUME_BONUS_STEP: i64 = 10;
