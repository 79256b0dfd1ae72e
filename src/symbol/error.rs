//! Symbol error types.

use thiserror::Error;

/// Errors reported when parsing a bare symbol string.
///
/// The taxonomy is narrow on purpose: inside [`normalize`], the matcher is
/// the sole gate, so only grammar-conformant substrings ever reach the
/// parser and none of these variants occur. They surface only through the
/// public parsing entry points ([`SymbolParser::parse`] and `FromStr`),
/// which accept arbitrary caller strings.
///
/// [`normalize`]: crate::normalize
/// [`SymbolParser::parse`]: crate::SymbolParser::parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// Symbol string was empty or all whitespace.
    #[error("Empty symbol")]
    EmptySymbol,

    /// Symbol contained non-ASCII characters. Fields are fixed-width byte
    /// runs, so the grammar is ASCII-only.
    #[error("Symbol must be ASCII: {0:?}")]
    NotAscii(String),

    /// Structural problem: a field was missing, too short, or had the wrong
    /// character class.
    #[error("Invalid symbol format: {0}")]
    InvalidFormat(String),

    /// The month token was not one of the twelve abbreviations.
    #[error("Unknown month abbreviation: {0:?}")]
    UnknownMonth(String),

    /// The leading letter run was not a whitelisted root, with or without a
    /// lot marker.
    #[error("Unknown root code: {0:?}")]
    UnknownRoot(String),
}
