//! # Discount Rule
//!
//! The single place where an item's discount percent is decided.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ItemType      Base                    Volume bonus (+1% per full 10)   │
//! │  ──────────    ─────────────────────   ───────────────────────────────  │
//! │  New           0%, stop here           never                            │
//! │  Regular       0%                      yes                              │
//! │  SecondFree    50% if qty > 1, else 0% yes                              │
//! │  Sale          70%                     yes                              │
//! │                                                                         │
//! │  Result is clamped to 0..=80                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::ItemType;
use crate::{MAX_DISCOUNT_PERCENT, VOLUME_BONUS_STEP};

/// Calculates an item's discount as a whole percent in `0..=80`.
///
/// ## Example
/// ```rust
/// use ticket_core::{calculate_discount, ItemType};
///
/// assert_eq!(calculate_discount(ItemType::New, 1000), 0);
/// assert_eq!(calculate_discount(ItemType::SecondFree, 4), 50);
/// assert_eq!(calculate_discount(ItemType::Regular, 600), 60);
/// assert_eq!(calculate_discount(ItemType::Sale, 150), 80);
/// ```
pub fn calculate_discount(item_type: ItemType, quantity: i64) -> u32 {
    let max = i64::from(MAX_DISCOUNT_PERCENT);

    let base: i64 = match item_type {
        ItemType::New => return 0,
        ItemType::Regular => 0,
        ItemType::SecondFree if quantity > 1 => 50,
        ItemType::SecondFree => 0,
        ItemType::Sale => 70,
    };

    let discount = if base < max {
        (base + quantity / VOLUME_BONUS_STEP).min(max)
    } else {
        base
    };

    // Clamped into 0..=80, so the cast cannot truncate
    discount.clamp(0, max) as u32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_never_discounted() {
        for qty in [1, 9, 10, 100, 1000, 100_000] {
            assert_eq!(calculate_discount(ItemType::New, qty), 0);
        }
    }

    #[test]
    fn test_second_free_needs_more_than_one() {
        assert_eq!(calculate_discount(ItemType::SecondFree, 0), 0);
        assert_eq!(calculate_discount(ItemType::SecondFree, 1), 0);
        assert_eq!(calculate_discount(ItemType::SecondFree, 2), 50);
        assert_eq!(calculate_discount(ItemType::SecondFree, 4), 50);
    }

    #[test]
    fn test_second_free_volume_bonus() {
        for qty in 2..=400 {
            let expected = (50 + qty / 10).min(80) as u32;
            assert_eq!(calculate_discount(ItemType::SecondFree, qty), expected);
        }
    }

    #[test]
    fn test_sale_volume_bonus() {
        assert_eq!(calculate_discount(ItemType::Sale, 1), 70);
        assert_eq!(calculate_discount(ItemType::Sale, 10), 71);
        assert_eq!(calculate_discount(ItemType::Sale, 99), 79);
        assert_eq!(calculate_discount(ItemType::Sale, 100), 80);
        assert_eq!(calculate_discount(ItemType::Sale, 5000), 80);
    }

    #[test]
    fn test_regular_volume_bonus() {
        assert_eq!(calculate_discount(ItemType::Regular, 1), 0);
        assert_eq!(calculate_discount(ItemType::Regular, 9), 0);
        assert_eq!(calculate_discount(ItemType::Regular, 10), 1);
        assert_eq!(calculate_discount(ItemType::Regular, 500), 50);
        assert_eq!(calculate_discount(ItemType::Regular, 600), 60);
        assert_eq!(calculate_discount(ItemType::Regular, 800), 80);
        assert_eq!(calculate_discount(ItemType::Regular, 1000), 80);
    }

    #[test]
    fn test_zero_quantity_is_base_only() {
        assert_eq!(calculate_discount(ItemType::Regular, 0), 0);
        assert_eq!(calculate_discount(ItemType::Sale, 0), 70);
    }

    #[test]
    fn test_never_negative() {
        assert_eq!(calculate_discount(ItemType::Regular, -25), 0);
        assert_eq!(calculate_discount(ItemType::Sale, -25), 68);
    }
}
