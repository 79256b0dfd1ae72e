//! Token parser: splits one symbol string into its positional fields.
//!
//! Parsing is anchored at the right edge: the `FUT` tag, the two-digit year,
//! and the three-letter month come off the tail in that order, the expiry day
//! is the digit run before the month, and whatever letters remain form the
//! root-and-lot head. The head is then resolved against the root whitelist,
//! longest interpretation first, so `GOLDM` is the mini lot of `GOLD` while
//! `GOLDGUINEA` stays one root.

use crate::roots::RootTable;
use crate::symbol::error::SymbolError;
use crate::types::symbol::{FUTURES_SUFFIX, Month, ParsedSymbol};

/// Parses individual symbol strings against a root whitelist.
///
/// Unlike the matcher, which only sees candidates that already satisfied the
/// shape pattern, the parser accepts arbitrary strings and validates every
/// field itself, reporting the first field that fails.
///
/// # Example
///
/// ```rust
/// use mcx_symbology::{Month, RootTable, SymbolParser};
///
/// let parser = SymbolParser::new(RootTable::mcx());
/// let symbol = parser.parse("goldm5feb26fut")?;
/// assert_eq!(symbol.root, "GOLD");
/// assert_eq!(symbol.lot_marker, Some('M'));
/// assert_eq!(symbol.day, 5);
/// assert_eq!(symbol.month, Month::Feb);
/// assert_eq!(symbol.year, "26");
/// # Ok::<(), mcx_symbology::SymbolError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SymbolParser {
    roots: RootTable,
}

impl SymbolParser {
    /// Creates a parser over the given root whitelist.
    pub fn new(roots: RootTable) -> Self {
        Self { roots }
    }

    /// The root whitelist in use.
    pub fn roots(&self) -> &RootTable {
        &self.roots
    }

    /// Whether the string is a well-formed symbol under this parser's
    /// whitelist.
    pub fn validate(&self, symbol: &str) -> bool {
        self.parse(symbol).is_ok()
    }

    /// Parses a symbol string into its fields.
    ///
    /// Leading and trailing whitespace is ignored; letter case is not
    /// significant. Returns an error naming the first field that fails.
    pub fn parse(&self, symbol: &str) -> Result<ParsedSymbol, SymbolError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(SymbolError::EmptySymbol);
        }
        if !symbol.is_ascii() {
            return Err(SymbolError::NotAscii(symbol.to_string()));
        }

        let rest = strip_suffix_ci(symbol, FUTURES_SUFFIX).ok_or_else(|| {
            SymbolError::InvalidFormat(format!(
                "{symbol:?} does not end with the {FUTURES_SUFFIX} tag"
            ))
        })?;

        // ASCII was checked above, so byte offsets are char offsets.
        let year_at = rest.len().checked_sub(2).ok_or_else(|| {
            SymbolError::InvalidFormat(format!("{symbol:?} is too short for an expiry year"))
        })?;
        let year = &rest[year_at..];
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SymbolError::InvalidFormat(format!(
                "expiry year must be two digits, got {year:?}"
            )));
        }

        let rest = &rest[..year_at];
        let month_at = rest.len().checked_sub(3).ok_or_else(|| {
            SymbolError::InvalidFormat(format!("{symbol:?} is too short for an expiry month"))
        })?;
        let month_token = &rest[month_at..];
        let month = Month::from_abbrev(month_token)
            .ok_or_else(|| SymbolError::UnknownMonth(month_token.to_string()))?;

        let rest = &rest[..month_at];
        let head_len = rest.bytes().take_while(u8::is_ascii_alphabetic).count();
        if head_len == 0 {
            return Err(SymbolError::InvalidFormat(format!(
                "{symbol:?} has no root code"
            )));
        }
        let (head, day_token) = rest.split_at(head_len);

        let day_err = || {
            SymbolError::InvalidFormat(format!(
                "expiry day must be one or two digits, got {day_token:?}"
            ))
        };
        if day_token.is_empty() || day_token.len() > 2 {
            return Err(day_err());
        }
        let day = day_token.parse::<u8>().map_err(|_| day_err())?;

        let (spec, lot_marker) = self
            .roots
            .split_head(head)
            .ok_or_else(|| SymbolError::UnknownRoot(head.to_ascii_uppercase()))?;

        Ok(ParsedSymbol::new(spec.code(), lot_marker, day, month, year))
    }
}

/// Strips `suffix` from the end of `s` ignoring ASCII case.
fn strip_suffix_ci<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let at = s.len().checked_sub(suffix.len())?;
    s[at..]
        .eq_ignore_ascii_case(suffix)
        .then_some(&s[..at])
}
