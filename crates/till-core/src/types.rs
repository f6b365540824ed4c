//! # Domain Types
//!
//! Core domain values for receipt building.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Values                            │
//! │                                                                 │
//! │   ┌──────────────┐    ┌──────────────┐    ┌──────────────┐      │
//! │   │   Product    │    │   LineItem   │    │   Receipt    │      │
//! │   │ ──────────── │    │ ──────────── │    │ ──────────── │      │
//! │   │ name         │◄───│ product      │◄───│ line_items   │      │
//! │   │ base_price   │    │ quantity     │    │              │      │
//! │   │ imported     │    │ tax_amount   │    │ total_taxes()│      │
//! │   │ category     │    │ total_price  │    │ total()      │      │
//! │   └──────────────┘    └──────────────┘    └──────────────┘      │
//! │                                                                 │
//! │   Ownership is strictly nested: a Product belongs to exactly    │
//! │   one LineItem, a LineItem to exactly one Receipt. No shared    │
//! │   or back references; everything is a plain value.              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three are constructed once and never mutated afterwards. Receipt
//! totals are derived on demand rather than stored, so they can never go
//! stale or disagree with the line items.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product classification for basic sales tax purposes.
///
/// `Book`, `Food` and `Medical` are exempt from basic tax; `Other` is not.
/// Import duty applies regardless of category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Book,
    Food,
    Medical,
    /// Anything that is not a book, food, or a medical product.
    Other,
}

impl Category {
    /// Whether products of this category skip the 10% basic tax.
    #[inline]
    pub const fn is_exempt(&self) -> bool {
        !matches!(self, Category::Other)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable product as parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, verbatim from the input line.
    pub name: String,

    /// Unit price before any tax.
    pub base_price: Money,

    /// Whether import duty applies.
    pub imported: bool,

    /// Classification for basic-tax exemption.
    pub category: Category,
}

impl Product {
    pub fn new(name: impl Into<String>, base_price: Money, imported: bool, category: Category) -> Self {
        Product {
            name: name.into(),
            base_price,
            imported,
            category,
        }
    }

    /// Whether this product skips the basic sales tax.
    #[inline]
    pub fn is_exempt(&self) -> bool {
        self.category.is_exempt()
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced, taxed entry on a receipt.
///
/// `tax_amount` and `total_price` are frozen at construction by the
/// receipt builder; nothing recomputes them later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,

    /// Units purchased.
    pub quantity: u32,

    /// Tax for the whole line (per-unit tax × quantity).
    pub tax_amount: Money,

    /// `base_price × quantity + tax_amount`.
    pub total_price: Money,
}

// =============================================================================
// Receipt
// =============================================================================

/// An ordered collection of line items.
///
/// Order is input order; unparseable input lines never make it in. The
/// two aggregate values are computed on demand and are both zero for an
/// empty receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    line_items: Vec<LineItem>,
}

impl Receipt {
    pub fn new(line_items: Vec<LineItem>) -> Self {
        Receipt { line_items }
    }

    /// The line items in input order.
    #[inline]
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Number of line items.
    #[inline]
    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Sum of all line tax amounts.
    pub fn total_taxes(&self) -> Money {
        self.line_items.iter().map(|item| item.tax_amount).sum()
    }

    /// Grand total: sum of all line totals (tax included).
    pub fn total(&self) -> Money {
        self.line_items.iter().map(|item| item.total_price).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
