//! Substitution driver: rewrites every recognized symbol in a text to
//! canonical form, leaving everything else untouched.

use crate::roots::RootTable;
use crate::symbol::error::SymbolError;
use crate::symbol::matcher::{Matches, SymbolMatcher};
use crate::symbol::parser::SymbolParser;
use crate::types::symbol::ParsedSymbol;
use lazy_static::lazy_static;
use tracing::{debug, trace};

lazy_static! {
    static ref BUILTIN: SymbolNormalizer = SymbolNormalizer::new(RootTable::mcx());
}

/// Rewrites symbol occurrences in arbitrary text to canonical form.
///
/// Wraps a matcher and a parser sharing one root whitelist: the matcher finds
/// spans, the parser splits them into fields, and the fields render back
/// through the symbol's canonical `Display` form. Everything outside a
/// matched span is copied byte for byte.
///
/// # Example
///
/// ```rust
/// use mcx_symbology::{RootTable, SymbolNormalizer};
///
/// let normalizer = SymbolNormalizer::new(RootTable::mcx());
/// assert_eq!(
///     normalizer.normalize("filled goldm5feb26fut @ 62010"),
///     "filled GOLDM05FEB26FUT @ 62010"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SymbolNormalizer {
    matcher: SymbolMatcher,
    parser: SymbolParser,
}

impl SymbolNormalizer {
    /// Creates a normalizer over the given root whitelist.
    pub fn new(roots: RootTable) -> Self {
        Self {
            matcher: SymbolMatcher::new(roots.clone()),
            parser: SymbolParser::new(roots),
        }
    }

    /// Shared normalizer over the built-in MCX table ([`RootTable::mcx`]).
    pub fn builtin() -> &'static SymbolNormalizer {
        &BUILTIN
    }

    /// The root whitelist in use.
    pub fn roots(&self) -> &RootTable {
        self.matcher.roots()
    }

    /// Returns a lazy iterator over symbol occurrences in the text.
    pub fn find_iter<'m, 't>(&'m self, text: &'t str) -> Matches<'m, 't> {
        self.matcher.find_iter(text)
    }

    /// Parses a single symbol string into its fields.
    pub fn parse(&self, symbol: &str) -> Result<ParsedSymbol, SymbolError> {
        self.parser.parse(symbol)
    }

    /// Rewrites every symbol occurrence in `text` to canonical form.
    ///
    /// Total over arbitrary input: text with no occurrences comes back
    /// unchanged, and characters outside matched spans are preserved byte
    /// for byte.
    ///
    /// # Panics
    ///
    /// Panics if a span produced by the matcher fails to parse. The matcher
    /// and parser are built over the same whitelist and grammar, so this
    /// indicates a bug in this crate rather than bad input.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut replaced = 0u32;
        for m in self.matcher.find_iter(text) {
            let symbol = self
                .parser
                .parse(m.as_str())
                .expect("matched span must parse: matcher and parser share one grammar");
            let canonical = symbol.to_string();
            trace!(original = m.as_str(), %canonical, "normalized symbol");
            out.push_str(&text[copied..m.start()]);
            out.push_str(&canonical);
            copied = m.end();
            replaced += 1;
        }
        out.push_str(&text[copied..]);
        if replaced > 0 {
            debug!(replaced, "normalized symbol occurrences");
        }
        out
    }
}

/// Rewrites every symbol occurrence in `text` to canonical form using the
/// built-in MCX root table.
///
/// Convenience for [`SymbolNormalizer::normalize`] over
/// [`SymbolNormalizer::builtin`].
///
/// # Example
///
/// ```rust
/// assert_eq!(
///     mcx_symbology::normalize("buy goldm5feb26fut"),
///     "buy GOLDM05FEB26FUT"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    SymbolNormalizer::builtin().normalize(text)
}
