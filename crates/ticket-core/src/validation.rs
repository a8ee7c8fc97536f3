//! # Validation Module
//!
//! Field rules for cart items. Every rule is checked when an [`Item`] is
//! constructed or one of its setters runs, never as a separate pass.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field      Rule                              Error                     │
//! │  ────────   ───────────────────────────────   ─────────────────────     │
//! │  title      1..=32 characters (not bytes)     Required / TooLong        │
//! │  price      >= $0.01, exact decimal compare   BelowMinimum              │
//! │  quantity   >= 1                              MustBePositive            │
//! │  price×qty  fits a Decimal before discount    TooLarge (quantity)       │
//! │  type       any ItemType variant              (enforced by the type)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ticket_core::validation::{validate_title, validate_quantity};
//!
//! assert!(validate_title("Apple").is_ok());
//! assert!(validate_title("").is_err());
//! assert!(validate_quantity(0).is_err());
//! ```
//!
//! [`Item`]: crate::types::Item

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::MAX_TITLE_CHARS;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item title.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_TITLE_CHARS`] characters, counted as Unicode scalar values
///
/// The title is taken as-is; surrounding whitespace is not trimmed because
/// it is printed on the ticket exactly as given.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_CHARS,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be at least one cent
///
/// ## Example
/// ```rust
/// use ticket_core::money::Money;
/// use ticket_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1)).is_ok());
/// assert!(validate_price("0.001".parse().unwrap()).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    let floor = Money::penny();
    if price < floor {
        return Err(ValidationError::BelowMinimum {
            field: "price".to_string(),
            min: floor.amount().to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates that a line's undiscounted amount can be represented.
///
/// `price × quantity × 100%` is the largest intermediate value an item
/// total goes through, so an item passing this rule can always be priced
/// and printed. Reported against `quantity`, the factor that scales it.
pub fn validate_line_amount(price: Money, qty: i64) -> ValidationResult<()> {
    price
        .checked_multiply_quantity(qty)
        .and_then(|extended| extended.checked_apply_percentage_discount(0))
        .map(|_| ())
        .ok_or_else(|| ValidationError::TooLarge {
            field: "quantity".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Apple").is_ok());
        assert!(validate_title("A").is_ok());
        assert!(validate_title(&"a".repeat(32)).is_ok());

        assert_eq!(validate_title("").unwrap_err().field(), "title");
        assert!(matches!(
            validate_title(&"a".repeat(33)),
            Err(ValidationError::TooLong { max: 32, .. })
        ));
    }

    #[test]
    fn test_validate_title_counts_characters_not_bytes() {
        // 32 two-byte characters is 64 bytes but still a valid title
        let title = "é".repeat(32);
        assert_eq!(title.len(), 64);
        assert!(validate_title(&title).is_ok());
        assert!(validate_title(&"é".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::from_cents(1720)).is_ok());

        let err = validate_price("0.001".parse().unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "price must be at least 0.01");
        assert!(validate_price("0.0099".parse().unwrap()).is_err());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_line_amount() {
        assert!(validate_line_amount(Money::from_cents(99), 5).is_ok());
        assert!(validate_line_amount(Money::from_cents(1), i64::MAX).is_ok());

        let big_price = Money::from_cents(10_000_000_000_000);
        let err = validate_line_amount(big_price, i64::MAX).unwrap_err();
        assert_eq!(err.to_string(), "quantity is too large");

        // Fits as price × quantity but not once scaled by 100%
        let near_max: Money = "1000000000000000000000000000".parse().unwrap();
        assert!(near_max.checked_multiply_quantity(1).is_some());
        assert!(validate_line_amount(near_max, 1).is_err());
    }
}
