//! Symbol recognition and normalization.
//!
//! A symbol names one futures contract: root code, optional lot-size marker,
//! expiry day, month abbreviation, two-digit year, and the `FUT` tag.
//! Recognition is case-insensitive and the day may be written with or
//! without its leading zero, so the same contract appears in the wild in
//! many spellings:
//!
//! | Input                | Canonical form     |
//! |----------------------|--------------------|
//! | `GOLDM05FEB26FUT`    | `GOLDM05FEB26FUT`  |
//! | `goldm5feb26fut`     | `GOLDM05FEB26FUT`  |
//! | `GOLDM05feb26FUT`    | `GOLDM05FEB26FUT`  |
//! | `crudeoil19feb26fut` | `CRUDEOIL19FEB26FUT` |
//!
//! The pieces compose in a pipeline: [`SymbolMatcher`] finds occurrences
//! inside arbitrary text, [`SymbolParser`] splits one occurrence into
//! fields, [`SymbolFormatter`] renders fields canonically, and
//! [`SymbolNormalizer`] drives all three to rewrite a whole text. Most
//! callers only need [`normalize`].

pub mod error;
pub mod formatter;
pub mod matcher;
pub mod normalizer;
pub mod parser;

pub use error::SymbolError;
pub use formatter::SymbolFormatter;
pub use matcher::{Matches, SymbolMatch, SymbolMatcher};
pub use normalizer::{SymbolNormalizer, normalize};
pub use parser::SymbolParser;

pub use crate::types::symbol::{FUTURES_SUFFIX, MONTH_ABBREVIATIONS, Month, ParsedSymbol};
