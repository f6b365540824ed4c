//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                     │
//! │                                                                 │
//! │  In binary floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                   │
//! │                                                                 │
//! │  Tax math makes it worse: intermediates carry sub-cent          │
//! │  precision before rounding quantizes them:                      │
//! │    11.25 × 0.10 = 1.125   (not representable in cents)          │
//! │    nickel-round(1.125) = 1.15                                   │
//! │                                                                 │
//! │  OUR SOLUTION: rust_decimal end-to-end                          │
//! │    Prices parse digit-for-digit from the input text and every   │
//! │    multiplication, rounding step and sum stays exact.           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! // Parse straight from input text (never through f64)
//! let price: Money = "14.99".parse().unwrap();
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! assert_eq!(doubled.to_string(), "29.98");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The rounding unit for tax amounts: five cents.
pub const NICKEL: Decimal = dec!(0.05);

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount backed by an exact decimal.
///
/// ## Design Decisions
/// - **`rust_decimal::Decimal`**: 96-bit fixed-point, no binary float error
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
/// - **Parse, don't convert**: amounts enter the system from text via
///   [`FromStr`] and keep their full precision
///
/// Equality is numeric (`1.5 == 1.50`), which is what receipt totals need.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(Decimal);

impl Money {
    /// Zero money value.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounds up to the nearest multiple of 0.05.
    ///
    /// Returns the smallest non-negative multiple of 0.05 that is greater
    /// than or equal to `self`. Amounts already on a nickel boundary are
    /// unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let raw: Money = "0.5625".parse().unwrap();
    /// assert_eq!(raw.round_up_to_nearest_nickel().to_string(), "0.60");
    ///
    /// let exact: Money = "0.05".parse().unwrap();
    /// assert_eq!(exact.round_up_to_nearest_nickel().to_string(), "0.05");
    /// ```
    pub fn round_up_to_nearest_nickel(&self) -> Money {
        // Exact decimal division: amount / 0.05 is amount × 20, so the
        // quotient is always representable and ceil() is precise.
        Money((self.0 / NICKEL).ceil() * NICKEL)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders exactly two fraction digits.
///
/// Tax amounts are already nickel-quantized by the time they are shown, so
/// the banker's rounding in `round_dp` only ever pads zeros for them; raw
/// prices with longer fractions get standard display rounding.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

/// Parses a decimal amount from text, digit for digit.
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Money)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Multiplication by an exact rate (tax calculation).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, rate: Decimal) -> Self {
        Money(self.0 * rate)
    }
}

/// Summation for receipt totals. An empty iterator sums to zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
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
    fn test_parse_keeps_exact_value() {
        assert_eq!(money("14.99").amount(), dec!(14.99));
        assert_eq!(money("10").amount(), dec!(10));
        // Numeric equality across scales
        assert_eq!(money("10.0"), money("10.00"));
    }

    #[test]
    fn test_display_two_fraction_digits() {
        assert_eq!(money("0.85").to_string(), "0.85");
        assert_eq!(money("10").to_string(), "10.00");
        assert_eq!(money("7.5").to_string(), "7.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_nickel_rounding_rounds_up() {
        assert_eq!(money("0.5625").round_up_to_nearest_nickel(), money("0.60"));
        assert_eq!(money("0.01").round_up_to_nearest_nickel(), money("0.05"));
        assert_eq!(money("1.125").round_up_to_nearest_nickel(), money("1.15"));
        assert_eq!(money("1.399").round_up_to_nearest_nickel(), money("1.40"));
    }

    #[test]
    fn test_nickel_rounding_fixed_points() {
        // Exact multiples of 0.05 are unchanged
        assert_eq!(money("0.05").round_up_to_nearest_nickel(), money("0.05"));
        assert_eq!(money("1.50").round_up_to_nearest_nickel(), money("1.50"));
        assert_eq!(Money::ZERO.round_up_to_nearest_nickel(), Money::ZERO);
    }

    #[test]
    fn test_nickel_rounding_bounds() {
        // result >= amount and result - amount < 0.05, result % 0.05 == 0
        for s in ["0.01", "0.04", "0.05", "0.07", "1.87", "2.375", "4.1999"] {
            let amount = money(s);
            let rounded = amount.round_up_to_nearest_nickel();
            assert!(rounded >= amount, "{s}: not an upper bound");
            assert!(rounded - amount < money("0.05"), "{s}: overshoots");
            assert!(
                (rounded.amount() % NICKEL).is_zero(),
                "{s}: not a nickel multiple"
            );
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = money("12.49");
        assert_eq!(a * 2, money("24.98"));
        assert_eq!(a + money("0.01"), money("12.50"));
        assert_eq!(a * dec!(0.10), money("1.249"));
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Money = std::iter::empty::<Money>().sum();
        assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn test_sum_is_exact_across_many_items() {
        // 1000 × 0.10 drifts under f64; must be exactly 100 here
        let total: Money = std::iter::repeat(money("0.10")).take(1000).sum();
        assert_eq!(total, money("100.00"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }
}
