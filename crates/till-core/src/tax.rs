//! # Tax Calculator
//!
//! Pure, stateless tax math. Two taxes exist:
//!
//! | Tax         | Rate | Applies to                          |
//! |-------------|------|-------------------------------------|
//! | Basic tax   | 10%  | everything except book/food/medical |
//! | Import duty | 5%   | imported products, no exemptions    |
//!
//! Each tax component is rounded up to the nearest nickel INDEPENDENTLY,
//! then the rounded components are summed. Round-then-add is the
//! contract: for an imported non-exempt product at 10.01, the components
//! 1.001 and 0.5005 round to 1.05 + 0.55 = 1.60, while rounding the raw
//! sum 1.5015 would give 1.55. Never add before rounding.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::money::Money;
use crate::types::Product;

/// Basic sales tax rate: 10%.
pub const BASIC_RATE: Decimal = dec!(0.10);

/// Import duty rate: 5%.
pub const IMPORT_RATE: Decimal = dec!(0.05);

/// Basic sales tax on one unit: zero for exempt categories, otherwise
/// 10% of the base price, nickel-rounded up.
pub fn basic_tax(product: &Product) -> Money {
    if product.is_exempt() {
        return Money::ZERO;
    }
    (product.base_price * BASIC_RATE).round_up_to_nearest_nickel()
}

/// Import duty on one unit: zero unless imported, otherwise 5% of the
/// base price, nickel-rounded up.
pub fn import_duty(product: &Product) -> Money {
    if !product.imported {
        return Money::ZERO;
    }
    (product.base_price * IMPORT_RATE).round_up_to_nearest_nickel()
}

/// Total tax on one unit. Components are rounded before summing.
pub fn total_tax(product: &Product) -> Money {
    basic_tax(product) + import_duty(product)
}

/// Tax for a whole receipt line: per-unit total tax × quantity.
pub fn line_tax(product: &Product, quantity: u32) -> Money {
    total_tax(product) * quantity
}

// =============================================================================
// Unit Tests
// =============================================================================
