//! Shopping Cart Helpers
//!
//! Small formatting functions used when logging cart activity.

use super::models::CartLine;

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Veggie Pizza (Large), 1x Salted Fries (Small)"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {} ({})", l.quantity, l.name, l.variant))
        .collect::<Vec<_>>()
        .join(", ")
}
