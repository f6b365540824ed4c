//! # Line Parser
//!
//! Turns one raw input line into a structured purchase, or reports why it
//! cannot.
//!
//! ## Line Grammar
//! ```text
//! <quantity> <product name> at <unit price>
//!
//!   "2 book at 12.49"
//!   "1 imported bottle of perfume at 47.50"
//!   "1 item at the store at 10.00"   ← name may contain "at"
//! ```
//!
//! The delimiter is the LAST occurrence of `" at "` (exact spacing,
//! case-sensitive), so product names containing the word "at" still parse.
//! Quantity is a run of ASCII digits; the price is an unsigned decimal
//! kept digit-for-digit — it never round-trips through a binary float.
//!
//! The import flag and the category are keyword heuristics carried over
//! from the pricing rules: a product named "important item" counts as
//! imported. Deliberate; see the keyword tables below.

use crate::error::{ParseError, ParseResult};
use crate::money::Money;
use crate::types::Category;

/// Substring that marks a product as imported (case-sensitive).
const IMPORTED_MARKER: &str = "imported";

/// Delimiter between `<quantity> <name>` and `<price>`.
const DELIMITER: &str = " at ";

/// Category keyword tables, checked in order; first match wins.
/// Matching is case-insensitive substring containment on the product name.
const CATEGORY_KEYWORDS: &[(&[&str], Category)] = &[
    (&["book"], Category::Book),
    (&["chocolate", "chocolates", "bar"], Category::Food),
    (&["pills", "pill"], Category::Medical),
];

// =============================================================================
// Parsed Purchase
// =============================================================================

/// The structured form of one valid input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPurchase {
    pub quantity: u32,
    pub name: String,
    pub price: Money,
    pub imported: bool,
    pub category: Category,
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a single input line into a [`ParsedPurchase`].
///
/// Parsing is total: any input, however malformed, yields `Ok` or a
/// [`ParseError`] — never a panic. Quantities too large for `u32` and
/// prices too large for the decimal type are parse errors like any other.
///
/// ## Example
/// ```rust
/// use till_core::parser::parse_line;
/// use till_core::types::Category;
///
/// let purchase = parse_line("1 imported box of chocolates at 10.00").unwrap();
/// assert_eq!(purchase.quantity, 1);
/// assert_eq!(purchase.name, "imported box of chocolates");
/// assert!(purchase.imported);
/// assert_eq!(purchase.category, Category::Food);
/// ```
pub fn parse_line(line: &str) -> ParseResult<ParsedPurchase> {
    if line.trim().is_empty() {
        return Err(ParseError::EmptyLine);
    }

    // Split on the LAST " at " so names containing "at" survive.
    let split = line.rfind(DELIMITER).ok_or(ParseError::MissingDelimiter)?;
    let before = line[..split].trim();
    let after = line[split + DELIMITER.len()..].trim();

    let (quantity, name) = split_quantity_and_name(before)?;

    if !is_price(after) {
        return Err(ParseError::InvalidPrice {
            segment: after.to_string(),
        });
    }
    // Exact decimal conversion; overflow (28+ digits) is just another
    // malformed price.
    let price: Money = after.parse().map_err(|_| ParseError::InvalidPrice {
        segment: after.to_string(),
    })?;

    let imported = name.contains(IMPORTED_MARKER);
    let category = infer_category(name);

    Ok(ParsedPurchase {
        quantity,
        name: name.to_string(),
        price,
        imported,
        category,
    })
}

/// Splits `"<digits> <rest>"`, requiring at least one digit, at least one
/// whitespace character, and a non-empty remainder.
fn split_quantity_and_name(before: &str) -> ParseResult<(u32, &str)> {
    let invalid = || ParseError::InvalidQuantity {
        segment: before.to_string(),
    };

    let digits_end = before
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(before.len());
    if digits_end == 0 {
        return Err(invalid());
    }

    let rest = &before[digits_end..];
    if !rest.starts_with(char::is_whitespace) {
        return Err(invalid());
    }

    let name = rest.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    let quantity: u32 = before[..digits_end].parse().map_err(|_| invalid())?;
    Ok((quantity, name))
}

/// Checks the price shape: an unsigned integer or decimal. No sign, no
/// thousands separators, no exponent.
fn is_price(text: &str) -> bool {
    fn all_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    match text.split_once('.') {
        Some((int_part, frac_part)) => all_digits(int_part) && all_digits(frac_part),
        None => all_digits(text),
    }
}

/// Infers the product category from name keywords, defaulting to `Other`.
fn infer_category(name: &str) -> Category {
    let name_lower = name.to_lowercase();

    for (keywords, category) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| name_lower.contains(kw)) {
            return *category;
        }
    }

    Category::Other
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let p = parse_line("2 book at 12.49").unwrap();
        assert_eq!(p.quantity, 2);
        assert_eq!(p.name, "book");
        assert_eq!(p.price, "12.49".parse().unwrap());
        assert!(!p.imported);
        assert_eq!(p.category, Category::Book);
    }

    #[test]
    fn test_parse_multiword_name() {
        let p = parse_line("1 music CD at 14.99").unwrap();
        assert_eq!(p.name, "music CD");
        assert_eq!(p.category, Category::Other);
    }

    #[test]
    fn test_last_delimiter_wins() {
        let p = parse_line("1 item at the store at 10.00").unwrap();
        assert_eq!(p.name, "item at the store");
        assert_eq!(p.price, "10.00".parse().unwrap());
    }

    #[test]
    fn test_imported_flag() {
        assert!(parse_line("1 imported box of chocolates at 10.00")
            .unwrap()
            .imported);
        assert!(parse_line("1 box of imported chocolates at 11.25")
            .unwrap()
            .imported);
        assert!(!parse_line("1 box of chocolates at 11.25").unwrap().imported);
        // Substring heuristic is case-sensitive
        assert!(!parse_line("1 Imported perfume at 10.00").unwrap().imported);
    }

    #[test]
    fn test_imported_heuristic_false_positive_is_preserved() {
        // Substring containment, not word match: this is a known false
        // positive of the inherited heuristic.
        assert!(parse_line("1 importedly named thing at 1.00").unwrap().imported);
    }

    #[test]
    fn test_category_inference() {
        assert_eq!(parse_line("1 book at 1.00").unwrap().category, Category::Book);
        assert_eq!(
            parse_line("1 chocolate bar at 0.85").unwrap().category,
            Category::Food
        );
        assert_eq!(
            parse_line("1 packet of headache pills at 9.75").unwrap().category,
            Category::Medical
        );
        assert_eq!(
            parse_line("1 bottle of perfume at 18.99").unwrap().category,
            Category::Other
        );
        // Case-insensitive, substring: "Notebook" is a book
        assert_eq!(
            parse_line("1 Notebook at 3.00").unwrap().category,
            Category::Book
        );
    }

    #[test]
    fn test_category_priority_order() {
        // "book" wins over "bar" when both match
        assert_eq!(
            parse_line("1 book about a chocolate bar at 5.00").unwrap().category,
            Category::Book
        );
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_line(""), Err(ParseError::EmptyLine));
        assert_eq!(parse_line("   \t "), Err(ParseError::EmptyLine));
    }

    #[test]
    fn test_missing_delimiter() {
        assert_eq!(parse_line("2 book 12.49"), Err(ParseError::MissingDelimiter));
        // "at" without surrounding spaces is not a delimiter
        assert_eq!(parse_line("2 book at12.49"), Err(ParseError::MissingDelimiter));
    }

    #[test]
    fn test_invalid_quantity_segment() {
        assert!(matches!(
            parse_line("two books at 12.49"),
            Err(ParseError::InvalidQuantity { .. })
        ));
        // Digits but no name
        assert!(matches!(
            parse_line("2 at 12.49"),
            Err(ParseError::InvalidQuantity { .. })
        ));
        // Quantity glued to the name
        assert!(matches!(
            parse_line("2book at 12.49"),
            Err(ParseError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_quantity_overflow_is_a_parse_error() {
        assert!(matches!(
            parse_line("99999999999999999999 books at 1.00"),
            Err(ParseError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_invalid_price_segment() {
        for bad in ["-12.49", "12,49", "12.49.99", "12.", ".49", "1e3", "free"] {
            assert!(
                matches!(
                    parse_line(&format!("1 widget at {bad}")),
                    Err(ParseError::InvalidPrice { .. })
                ),
                "price {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let p = parse_line("  2   book   at   12.49  ").unwrap();
        assert_eq!(p.quantity, 2);
        assert_eq!(p.name, "book");
        assert_eq!(p.price, "12.49".parse().unwrap());
    }
}
