//! # Cart
//!
//! Ordered collection of validated items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item(title, price, qty, type)                                     │
//! │       │                                                                 │
//! │       ├── Item::new fails? → Err(ValidationError), cart unchanged      │
//! │       ├── total + item total overflows? → Err(TooLarge), unchanged     │
//! │       │                                                                 │
//! │       └── OK → items.push(item)   (insertion order = ticket order)     │
//! │                                                                         │
//! │  total()          → Σ exact item totals, kept as items are added       │
//! │  format_ticket()  → rendered receipt (see `ticket`)                    │
//! │                                                                         │
//! │  NOTE: Items cannot be removed or edited once in the cart.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! A cart is plain owned data. Hosts that share one between threads wrap
//! it in a `Mutex` and serialize `add_item`/`format_ticket` calls.

use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::ticket;
use crate::types::{Item, ItemType, NewItem};

/// The shopping cart.
///
/// ## Invariants
/// - Every item passed validation when it was added
/// - Items keep the order they were added in
/// - `total` is the exact sum of the item totals and fits in a `Decimal`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<Item>,
    total: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Validates and appends a new item.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(ValidationError)` naming the bad field; nothing is added
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::{Cart, ItemType, Money};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item("Apple", Money::from_cents(99), 5, ItemType::New).unwrap();
    /// assert!(cart.add_item("Apple", Money::from_cents(99), 0, ItemType::New).is_err());
    /// assert_eq!(cart.item_count(), 1);
    /// ```
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        price: Money,
        quantity: i64,
        item_type: ItemType,
    ) -> ValidationResult<()> {
        let item = Item::new(title, price, quantity, item_type)?;
        self.push(item)
    }

    /// Validates and appends an item given as an input record.
    pub fn add_new_item(&mut self, input: NewItem) -> ValidationResult<()> {
        let item = Item::try_from(input)?;
        self.push(item)
    }

    fn push(&mut self, item: Item) -> ValidationResult<()> {
        self.total = self
            .total
            .checked_add(item.total())
            .ok_or_else(|| ValidationError::TooLarge {
                field: "total".to_string(),
            })?;
        debug!(
            title = item.title(),
            quantity = item.quantity(),
            discount = item.discount(),
            "item added to cart"
        );
        self.items.push(item);
        Ok(())
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Grand total: exact sum of the unrounded item totals.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the receipt. See [`ticket::format_ticket`].
    pub fn format_ticket(&self) -> String {
        ticket::format_ticket(self)
    }
}
