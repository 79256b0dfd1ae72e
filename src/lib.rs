//! MCX Symbology Library
//!
//! Recognition and canonical normalization of MCX commodity futures symbols.
//! A symbol such as `GOLDM05FEB26FUT` names one contract (root `GOLD`, mini
//! lot `M`, expiry 05 FEB, year 26, futures tag); the same contract shows up
//! in feeds and logs as `goldm5feb26fut`, `GOLDM05feb26FUT`, and other
//! spellings. This library finds those spellings inside arbitrary text and
//! rewrites each to the single canonical form.
//!
//! # Features
//!
//! - **Type Safety**: parsed symbols are structured values, not strings
//! - **Whitelist-Driven**: recognition fires only for configured root codes,
//!   so free text that merely resembles the grammar is never touched
//! - **Total Normalization**: arbitrary text in, text out; characters outside
//!   matched symbols are preserved byte for byte
//! - **Error Handling**: comprehensive error types with `thiserror`
//!
//! # Example
//!
//! ```rust
//! use mcx_symbology::normalize;
//!
//! let line = normalize("filled goldm5feb26fut @ 62010");
//! assert_eq!(line, "filled GOLDM05FEB26FUT @ 62010");
//! ```
//!
//! Recognition is driven by a root table; the built-in one covers the MCX
//! contracts, and custom tables swap in without touching any parsing logic:
//!
//! ```rust
//! use mcx_symbology::{RootSpec, RootTable, SymbolNormalizer};
//!
//! # fn main() -> Result<(), mcx_symbology::RootTableError> {
//! let table = RootTable::new([RootSpec::new("COTTON")])?;
//! let normalizer = SymbolNormalizer::new(table);
//! assert_eq!(normalizer.normalize("cotton7mar26fut"), "COTTON07MAR26FUT");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// =============================================================================
// Global Clippy Lint Suppressions
// =============================================================================
// These lints are suppressed globally because they apply broadly across the
// codebase and would require excessive local annotations.
//
// - module_name_repetitions: Common pattern in Rust libraries (e.g., SymbolMatcher in symbol module)
// - missing_errors_doc: Too verbose to document every Result-returning function
// - missing_panics_doc: Panics are documented where they are part of the contract
// - must_use_candidate: Not all return values need #[must_use]
// - doc_markdown: Technical terms in docs don't need backticks (e.g., MCX, FUT)
// - struct_excessive_bools: Config structs legitimately have many boolean flags
// =============================================================================
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]

// Re-exports of external dependencies
pub use serde;

// Core modules
pub mod logging;
pub mod roots;
pub mod symbol;
pub mod types;

// Re-exports of core types for convenience
pub use roots::{RootSpec, RootTable, RootTableError};
pub use symbol::{
    Matches, SymbolError, SymbolFormatter, SymbolMatch, SymbolMatcher, SymbolNormalizer,
    SymbolParser, normalize,
};
pub use types::symbol::{FUTURES_SUFFIX, MONTH_ABBREVIATIONS, Month, ParsedSymbol};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use mcx_symbology::prelude::*;
/// ```
pub mod prelude {
    pub use crate::logging::{LogConfig, LogFormat, LogLevel, init_logging, try_init_logging};
    pub use crate::roots::{RootSpec, RootTable, RootTableError};
    pub use crate::symbol::{
        SymbolError, SymbolFormatter, SymbolMatch, SymbolMatcher, SymbolNormalizer, SymbolParser,
        normalize,
    };
    pub use crate::types::symbol::{FUTURES_SUFFIX, MONTH_ABBREVIATIONS, Month, ParsedSymbol};
    pub use serde::{Deserialize, Serialize};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "mcx-symbology");
    }
}
