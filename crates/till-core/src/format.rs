//! # Receipt Formatter
//!
//! Renders a [`Receipt`] into the fixed text layout:
//!
//! ```text
//! <quantity> <product name>: <total price>
//! ...
//! Sales Taxes: <sum of taxes>
//! Total: <grand total>
//! ```
//!
//! Every amount shows exactly two fraction digits. Lines are joined with
//! single newlines, no trailing newline. An empty receipt still renders
//! the two summary lines.

use crate::types::{LineItem, Receipt};

/// Renders the receipt in the fixed layout.
pub fn format_receipt(receipt: &Receipt) -> String {
    let mut lines: Vec<String> = receipt.line_items().iter().map(format_line_item).collect();

    lines.push(format!("Sales Taxes: {}", receipt.total_taxes()));
    lines.push(format!("Total: {}", receipt.total()));

    lines.join("\n")
}

fn format_line_item(item: &LineItem) -> String {
    format!("{} {}: {}", item.quantity, item.product.name, item.total_price)
}

// =============================================================================
// Unit Tests
// =============================================================================
