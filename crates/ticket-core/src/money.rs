//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    17.20 × 0.30 = 5.159999999999999  ❌ WRONG!                          │
//! │                                                                         │
//! │  Item totals are not whole cents either:                                │
//! │    $0.99 × 5 × 50% = $2.475  → rounding each line drifts the total     │
//! │                                                                         │
//! │  OUR SOLUTION: Exact base-10 decimal                                    │
//! │    Every line total is kept exact, summed exact,                        │
//! │    and rounded ONCE when it is displayed                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ticket_core::money::Money;
//!
//! let price: Money = "17.20".parse().unwrap();
//! let line = price.multiply_quantity(1).apply_percentage_discount(70);
//! assert_eq!(line.to_string(), "$5.16");
//!
//! // Integer part of zero is dropped on display
//! assert_eq!(Money::from_cents(99).to_string(), "$.99");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of decimal digits shown on a ticket.
const DISPLAY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in dollars as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal, not f64**: comparisons such as the one-cent price floor are
///   exact, and sums never accumulate binary rounding error
/// - **No rounding in arithmetic**: only [`fmt::Display`] rounds
/// - **Derives**: transparent serde, so JSON carries the plain amount
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Item.price ──► × quantity ──► − discount% ──► Item total              │
/// │                                                     │                   │
/// │                                                     ▼                   │
/// │                                   Σ item totals ──► Cart total          │
/// │                                                                         │
/// │  Price, item totals and cart total are displayed as "$#.00"            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price, "10.99".parse::<Money>().unwrap());
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, DISPLAY_SCALE))
    }

    /// Smallest price an item may carry: one cent.
    #[inline]
    pub fn penny() -> Self {
        Money::from_cents(1)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_cents(897));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Like [`Money::multiply_quantity`], but `None` when the product does
    /// not fit in a `Decimal`.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Applies a whole-percent discount and returns the discounted amount.
    ///
    /// The result is exact: `amount × (100 − percent) / 100`. Percentages
    /// above 100 are treated as 100.
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::money::Money;
    ///
    /// let extended = Money::from_cents(495);
    /// // $4.95 at 50% off is $2.475, kept exact
    /// assert_eq!(extended.apply_percentage_discount(50), "2.475".parse::<Money>().unwrap());
    /// ```
    pub fn apply_percentage_discount(&self, percent: u32) -> Money {
        Money(self.0 * kept_percent(percent) / Decimal::ONE_HUNDRED)
    }

    /// Like [`Money::apply_percentage_discount`], but `None` when the
    /// intermediate `amount × (100 − percent)` does not fit in a `Decimal`.
    pub fn checked_apply_percentage_discount(&self, percent: u32) -> Option<Money> {
        self.0
            .checked_mul(kept_percent(percent))
            .and_then(|kept| kept.checked_div(Decimal::ONE_HUNDRED))
            .map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::money::Money;
    ///
    /// let sum = Money::from_cents(150).checked_add(Money::from_cents(99));
    /// assert_eq!(sum, Some(Money::from_cents(249)));
    /// ```
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Rounds to whole cents using Bankers Rounding (round half to even).
    ///
    /// ```text
    /// $2.475 → $2.48   (7 is odd, round up to even 8)
    /// $2.465 → $2.46   (6 is already even)
    /// ```
    pub fn round_to_cents(&self) -> Money {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(DISPLAY_SCALE);
        Money(rounded)
    }
}

/// Share of the amount left after a whole-percent discount, capped at 100%.
fn kept_percent(percent: u32) -> Decimal {
    Decimal::from(100 - percent.min(100))
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the ticket money format: `$` followed by the amount
/// rounded half-to-even to two decimals.
///
/// ## Zero Suppression
/// The integer part is written without a leading zero, so amounts below
/// one dollar print as `$.99` and zero prints as `$.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = rounded.abs().to_string();
        let digits = digits.strip_prefix('0').unwrap_or(&digits);
        write!(f, "{}${}", sign, digits)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(1099), money("10.99"));
        assert_eq!(Money::penny(), money("0.01"));
        assert!(Money::from_cents(0).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(money("20").to_string(), "$20.00");
        assert_eq!(money("550.11").to_string(), "$550.11");
    }

    #[test]
    fn test_display_drops_zero_integer_part() {
        assert_eq!(money("0.99").to_string(), "$.99");
        assert_eq!(Money::zero().to_string(), "$.00");
        assert_eq!(money("0.004").to_string(), "$.00");
    }

    #[test]
    fn test_display_rounds_half_to_even() {
        assert_eq!(money("2.475").to_string(), "$2.48");
        assert_eq!(money("2.465").to_string(), "$2.46");
        assert_eq!(money("0.125").to_string(), "$.12");
        assert_eq!(money("9.999").to_string(), "$10.00");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(money("-5.50").to_string(), "-$5.50");
        assert_eq!(money("-0.50").to_string(), "-$.50");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3), Money::from_cents(897));
    }

    #[test]
    fn test_percentage_discount_is_exact() {
        let extended = money("17.20");
        assert_eq!(extended.apply_percentage_discount(70), money("5.16"));
        assert_eq!(extended.apply_percentage_discount(0), extended);
        assert!(extended.apply_percentage_discount(100).is_zero());
        assert!(extended.apply_percentage_discount(250).is_zero());
    }

    #[test]
    fn test_add_does_not_round_before_adding() {
        // Two lines of $0.005 each display as $.00 alone but sum to $.01
        let total = money("0.005").checked_add(money("0.005")).unwrap();
        assert_eq!(total, money("0.01"));
        assert_eq!(total.to_string(), "$.01");
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        let max = Money(Decimal::MAX);
        assert_eq!(max.checked_add(Money(Decimal::ONE)), None);
        assert_eq!(max.checked_multiply_quantity(2), None);
        assert_eq!(max.checked_apply_percentage_discount(0), None);
        assert_eq!(max.checked_apply_percentage_discount(100), Some(Money::zero()));

        let yacht = money("100000000000000000000");
        assert_eq!(yacht.checked_multiply_quantity(1_000_000_000), None);
        assert_eq!(
            Money::from_cents(299).checked_multiply_quantity(3),
            Some(Money::from_cents(897))
        );
        assert_eq!(
            money("17.20").checked_apply_percentage_discount(70),
            Some(money("5.16"))
        );
    }

    #[test]
    fn test_serde_transparent() {
        let price: Money = serde_json::from_str("\"0.99\"").unwrap();
        assert_eq!(price, Money::from_cents(99));
    }
}
