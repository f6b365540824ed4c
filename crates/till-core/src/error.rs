//! # Error Types
//!
//! The core has exactly one recoverable condition: an input line that is
//! not a purchase line. [`ParseError`] says which rule the line broke.
//!
//! ## Propagation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  parser::parse_line ──► Err(ParseError)                         │
//! │          │                                                      │
//! │          ▼                                                      │
//! │  receipt::build_receipt ──► silently skips the line             │
//! │                                                                 │
//! │  Nothing escalates: malformed input is indistinguishable from   │
//! │  absent input in the rendered receipt. The variants exist for   │
//! │  callers (and tests) that want to know why a line was dropped.  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants carrying the offending text, never bare Strings
//! 3. Parsing is total: every input produces `Ok` or a variant below, no panics

use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// Why an input line could not be read as a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is empty or contains only whitespace.
    #[error("line is empty")]
    EmptyLine,

    /// No `" at "` delimiter separates the product from the price.
    #[error("no \" at \" delimiter in line")]
    MissingDelimiter,

    /// The text before the delimiter is not `<quantity> <product name>`.
    #[error("expected \"<quantity> <product name>\", got {segment:?}")]
    InvalidQuantity { segment: String },

    /// The text after the delimiter is not an unsigned decimal number.
    #[error("expected an unsigned decimal price, got {segment:?}")]
    InvalidPrice { segment: String },
}

/// Convenience type alias for parser results.
pub type ParseResult<T> = Result<T, ParseError>;

// =============================================================================
// Unit Tests
// =============================================================================
