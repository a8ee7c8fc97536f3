//! # Domain Types
//!
//! Core domain types used throughout Shop Ticket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    NewItem      │   │      Item       │   │    ItemType     │       │
//! │  │  ─────────────  │──►│  ─────────────  │   │  ─────────────  │       │
//! │  │  unvalidated    │   │  title          │   │  New            │       │
//! │  │  input record   │   │  price (Money)  │   │  Regular        │       │
//! │  │  (serde)        │   │  quantity       │   │  SecondFree     │       │
//! │  └─────────────────┘   │  item_type      │   │  Sale           │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An [`Item`] can only exist in a valid state: its fields are private and
//! every way of building or changing one runs the rules in
//! [`crate::validation`].

use serde::{Deserialize, Serialize};

use crate::discount::calculate_discount;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::validation::{validate_line_amount, validate_price, validate_quantity, validate_title};

// =============================================================================
// Item Type
// =============================================================================

/// Pricing category of an item. Drives the discount rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    /// Newly listed; never discounted.
    New,
    /// Ordinary item; only the volume bonus applies.
    Regular,
    /// Buy one, get the second free (50% when buying more than one).
    SecondFree,
    /// On sale at 70% off.
    Sale,
}

// =============================================================================
// Item
// =============================================================================

/// A validated line item.
///
/// ## Invariants
/// - Title, price and quantity pass their field rules
/// - `price × quantity` is small enough that [`Item::total`] cannot overflow
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    title: String,
    price: Money,
    quantity: i64,
    item_type: ItemType,
}

impl Item {
    /// Creates an item, checking title, price and quantity in that order,
    /// then that the undiscounted line amount is representable.
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::{Item, ItemType, Money};
    ///
    /// let apple = Item::new("Apple", Money::from_cents(99), 5, ItemType::New).unwrap();
    /// assert_eq!(apple.title(), "Apple");
    ///
    /// assert!(Item::new("", Money::from_cents(99), 5, ItemType::New).is_err());
    /// ```
    pub fn new(
        title: impl Into<String>,
        price: Money,
        quantity: i64,
        item_type: ItemType,
    ) -> ValidationResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        validate_price(price)?;
        validate_quantity(quantity)?;
        validate_line_amount(price, quantity)?;

        Ok(Item {
            title,
            price,
            quantity,
            item_type,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    /// Replaces the title. On error the item keeps its old title.
    pub fn set_title(&mut self, title: impl Into<String>) -> ValidationResult<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Replaces the unit price. On error the item keeps its old price.
    pub fn set_price(&mut self, price: Money) -> ValidationResult<()> {
        validate_price(price)?;
        validate_line_amount(price, self.quantity)?;
        self.price = price;
        Ok(())
    }

    /// Replaces the quantity. On error the item keeps its old quantity.
    pub fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
        validate_quantity(quantity)?;
        validate_line_amount(self.price, quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_item_type(&mut self, item_type: ItemType) {
        self.item_type = item_type;
    }

    /// Discount percent for this item's type and quantity.
    #[inline]
    pub fn discount(&self) -> u32 {
        calculate_discount(self.item_type, self.quantity)
    }

    /// Price before discount: unit price × quantity.
    #[inline]
    pub fn extended_price(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Line total after discount, exact (not rounded to cents).
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::{Item, ItemType, Money};
    ///
    /// let nails = Item::new("Nails", Money::from_cents(200), 500, ItemType::Regular).unwrap();
    /// assert_eq!(nails.discount(), 50);
    /// assert_eq!(nails.total(), Money::from_cents(50000));
    /// ```
    pub fn total(&self) -> Money {
        self.extended_price().apply_percentage_discount(self.discount())
    }
}

// =============================================================================
// New Item (input record)
// =============================================================================

/// Unvalidated item as it arrives from outside (e.g. a JSON file).
///
/// A missing or `null` title is reported as "title is required".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub title: Option<String>,
    pub price: Money,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

impl TryFrom<NewItem> for Item {
    type Error = ValidationError;

    fn try_from(input: NewItem) -> ValidationResult<Self> {
        let title = input.title.ok_or_else(|| ValidationError::Required {
            field: "title".to_string(),
        })?;
        Item::new(title, input.price, input.quantity, input.item_type)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
