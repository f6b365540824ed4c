//! # Receipt Assembler
//!
//! Orchestrates parser and tax calculator into a [`Receipt`]:
//!
//! ```text
//! raw lines ──► parse_line ──► Product ──► line_tax ──► LineItem ──► Receipt
//!                   │
//!                   └── Err? skip the line, keep going
//! ```
//!
//! Skipping is silent. A receipt built from all-invalid input is
//! identical to one built from no input at all; there is no error path
//! out of the assembler.

use crate::format;
use crate::parser::{self, ParsedPurchase};
use crate::tax;
use crate::types::{LineItem, Product, Receipt};

/// Builds a receipt from raw input lines, in input order.
///
/// ## Example
/// ```rust
/// use till_core::receipt::build_receipt;
///
/// let receipt = build_receipt(["2 book at 12.49", "not a purchase line"]);
/// assert_eq!(receipt.len(), 1);
/// ```
pub fn build_receipt<I, S>(lines: I) -> Receipt
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let line_items = lines
        .into_iter()
        .filter_map(|line| build_line_item(line.as_ref()))
        .collect();

    Receipt::new(line_items)
}

/// Builds a receipt and renders it in one step. The library entry point.
///
/// ## Example
/// ```rust
/// use till_core::receipt::process;
///
/// let out = process(["1 chocolate bar at 0.85"]);
/// assert_eq!(out, "1 chocolate bar: 0.85\nSales Taxes: 0.00\nTotal: 0.85");
/// ```
pub fn process<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format::format_receipt(&build_receipt(lines))
}

/// Parses one line and prices it. `None` means the line was unparseable.
fn build_line_item(line: &str) -> Option<LineItem> {
    let ParsedPurchase {
        quantity,
        name,
        price,
        imported,
        category,
    } = parser::parse_line(line).ok()?;

    let product = Product::new(name, price, imported, category);
    let tax_amount = tax::line_tax(&product, quantity);
    let total_price = product.base_price * quantity + tax_amount;

    Some(LineItem {
        product,
        quantity,
        tax_amount,
        total_price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
