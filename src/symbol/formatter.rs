//! Canonical formatter: renders parsed fields back into the uppercase,
//! zero-padded symbol form.

use crate::types::symbol::{FUTURES_SUFFIX, Month, ParsedSymbol};

/// Renders symbols in canonical form: uppercase root and lot marker, the
/// expiry day padded to two digits, the year as written, and the `FUT` tag.
///
/// Stateless; the canonical form depends only on the fields themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolFormatter;

impl SymbolFormatter {
    /// Formats a parsed symbol canonically.
    ///
    /// Equivalent to the symbol's `Display` implementation.
    pub fn format(symbol: &ParsedSymbol) -> String {
        symbol.to_string()
    }

    /// Formats raw contract fields canonically without building a
    /// [`ParsedSymbol`] first.
    pub fn format_contract(
        root: &str,
        lot_marker: Option<char>,
        day: u8,
        month: Month,
        year: &str,
    ) -> String {
        let mut out = root.to_uppercase();
        if let Some(marker) = lot_marker {
            out.extend(marker.to_uppercase());
        }
        out.push_str(&format!("{day:02}{month}{year}{FUTURES_SUFFIX}"));
        out
    }
}
