//! # till-core: Pure Business Logic for Till
//!
//! This crate is the **heart** of Till. It turns free-text purchase lines
//! into itemized sales-tax receipts, as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Till Architecture                         │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                   apps/cli (shell)                        │  │
//! │  │        read lines ──► process() ──► print receipt         │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │               ★ till-core (THIS CRATE) ★                  │  │
//! │  │                                                           │  │
//! │  │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐       │  │
//! │  │  │ parser  │─►│   tax   │─►│ receipt │─►│ format  │       │  │
//! │  │  │ 1 line →│  │ nickel- │  │ assemble│  │ fixed   │       │  │
//! │  │  │ purchase│  │ rounded │  │ + total │  │ layout  │       │  │
//! │  │  └─────────┘  └─────────┘  └─────────┘  └─────────┘       │  │
//! │  │                                                           │  │
//! │  │  NO I/O • NO SHARED STATE • PURE FUNCTIONS                │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: raw lines → parser → tax → assembler → formatter.
//! No stage mutates another's output.
//!
//! ## Modules
//!
//! - [`money`] - exact-decimal `Money` type and nickel rounding
//! - [`types`] - domain values (`Product`, `LineItem`, `Receipt`)
//! - [`parser`] - free-text purchase line parsing
//! - [`tax`] - basic tax and import duty calculation
//! - [`receipt`] - assembles parsed lines into a priced receipt
//! - [`format`] - renders the fixed receipt layout
//! - [`error`] - the one error kind: `ParseError`
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same lines in, same receipt out, always
//! 2. **Exact Decimals**: monetary values never touch binary floats
//! 3. **Total Parsing**: malformed input lines are skipped, never a panic
//!    or a fatal error
//!
//! ## Example Usage
//!
//! ```rust
//! let output = till_core::process([
//!     "2 book at 12.49",
//!     "1 music CD at 14.99",
//!     "1 chocolate bar at 0.85",
//! ]);
//!
//! assert_eq!(output, "\
//! 2 book: 24.98
//! 1 music CD: 16.49
//! 1 chocolate bar: 0.85
//! Sales Taxes: 1.50
//! Total: 42.32");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod money;
pub mod parser;
pub mod receipt;
pub mod tax;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Receipt` instead of
// `use till_core::types::Receipt`

pub use error::{ParseError, ParseResult};
pub use format::format_receipt;
pub use money::Money;
pub use parser::{parse_line, ParsedPurchase};
pub use receipt::{build_receipt, process};
pub use types::{Category, LineItem, Product, Receipt};
