//! # Ticket Renderer
//!
//! Turns a [`Cart`] into the fixed-width receipt text.
//!
//! ```text
//! # Item    Price Quan. Discount  Total
//! -------------------------------------
//! 1 Apple    $.99     5        -  $4.95
//! 2 Banana $20.00     4      50% $40.00
//! -------------------------------------
//! 2                              $44.95
//! ```
//!
//! Every cell is followed by one space, so each header, row and footer
//! line ends in a trailing space (not shown above).

use tracing::debug;

use crate::cart::Cart;
use crate::table::{Column, Table};
use crate::types::Item;

/// Text returned for a cart with no items.
pub const EMPTY_TICKET: &str = "No items.";

/// Number of ticket columns.
pub const TICKET_COLUMNS: usize = 6;

/// Ticket columns in display order: `#`, `Item`, `Price`, `Quan.`,
/// `Discount`, `Total`. Only `Item` is left-aligned.
pub fn ticket_columns() -> [Column; TICKET_COLUMNS] {
    [
        Column::right("#"),
        Column::left("Item"),
        Column::right("Price"),
        Column::right("Quan."),
        Column::right("Discount"),
        Column::right("Total"),
    ]
}

/// Renders the receipt for `cart`.
///
/// Returns exactly [`EMPTY_TICKET`] for an empty cart. Otherwise the
/// header, a dash separator, one line per item in insertion order, a
/// second separator and the footer with the item count and grand total.
/// The footer line has no trailing newline.
///
/// ## Example
/// ```rust
/// use ticket_core::{Cart, ItemType, Money};
///
/// let mut cart = Cart::new();
/// assert_eq!(cart.format_ticket(), "No items.");
///
/// cart.add_item("Tea", Money::from_cents(250), 2, ItemType::Regular).unwrap();
/// let ticket = cart.format_ticket();
/// assert!(ticket.ends_with("1                           $5.00 "));
/// ```
pub fn format_ticket(cart: &Cart) -> String {
    if cart.is_empty() {
        return EMPTY_TICKET.to_string();
    }

    let mut table = Table::new(ticket_columns());
    for (index, item) in cart.items().iter().enumerate() {
        table.push_row(item_row(index + 1, item));
    }

    let total = cart.total();
    table.set_footer([
        cart.item_count().to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        total.to_string(),
    ]);

    debug!(items = cart.item_count(), total = %total, "ticket rendered");
    table.render()
}

fn item_row(number: usize, item: &Item) -> [String; TICKET_COLUMNS] {
    [
        number.to_string(),
        item.title().to_string(),
        item.price().to_string(),
        item.quantity().to_string(),
        discount_cell(item.discount()),
        item.total().to_string(),
    ]
}

/// `-` for no discount, otherwise the percent with a `%` sign.
fn discount_cell(percent: u32) -> String {
    if percent == 0 {
        "-".to_string()
    } else {
        format!("{}%", percent)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ItemType;

    const FOUR_ITEM_TICKET: &str = concat!(
        "# Item                          Price Quan. Discount   Total \n",
        "------------------------------------------------------------\n",
        "1 Apple                          $.99     5        -   $4.95 \n",
        "2 Banana                       $20.00     4      50%  $40.00 \n",
        "3 A long piece of toilet paper $17.20     1      70%   $5.16 \n",
        "4 Nails                         $2.00   500      50% $500.00 \n",
        "------------------------------------------------------------\n",
        "4                                                    $550.11 ",
    );

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item("Apple", "0.99".parse().unwrap(), 5, ItemType::New)
            .unwrap();
        cart.add_item("Banana", "20.00".parse().unwrap(), 4, ItemType::SecondFree)
            .unwrap();
        cart.add_item(
            "A long piece of toilet paper",
            "17.20".parse().unwrap(),
            1,
            ItemType::Sale,
        )
        .unwrap();
        cart.add_item("Nails", "2.00".parse().unwrap(), 500, ItemType::Regular)
            .unwrap();
        cart
    }

    #[test]
    fn test_format_ticket_four_items() {
        assert_eq!(sample_cart().format_ticket(), FOUR_ITEM_TICKET);
    }

    #[test]
    fn test_format_ticket_empty_cart() {
        assert_eq!(Cart::new().format_ticket(), "No items.");
    }

    #[test]
    fn test_format_ticket_is_idempotent() {
        let cart = sample_cart();
        assert_eq!(cart.format_ticket(), cart.format_ticket());
    }

    #[test]
    fn test_format_ticket_single_item() {
        let mut cart = Cart::new();
        cart.add_item("Tea", Money::from_cents(250), 2, ItemType::Regular)
            .unwrap();

        let expected = concat!(
            "# Item Price Quan. Discount Total \n",
            "---------------------------------\n",
            "1 Tea  $2.50     2        - $5.00 \n",
            "---------------------------------\n",
            "1                           $5.00 ",
        );
        assert_eq!(cart.format_ticket(), expected);
    }

    #[test]
    fn test_index_column_widens_past_nine_items() {
        let mut cart = Cart::new();
        for _ in 0..10 {
            cart.add_item("Gum", Money::from_cents(100), 1, ItemType::New)
                .unwrap();
        }

        let ticket = cart.format_ticket();
        let lines: Vec<&str> = ticket.lines().collect();
        assert_eq!(lines.len(), 14);
        assert!(lines[0].starts_with(" # Item"));
        assert!(lines[2].starts_with(" 1 Gum"));
        assert!(lines[11].starts_with("10 Gum"));
        assert!(lines[13].starts_with("10 "));
        assert!(lines[13].ends_with(" $10.00 "));
    }

    #[test]
    fn test_discount_cell() {
        assert_eq!(discount_cell(0), "-");
        assert_eq!(discount_cell(50), "50%");
        assert_eq!(discount_cell(80), "80%");
    }
}
