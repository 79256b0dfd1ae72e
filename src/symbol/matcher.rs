//! Pattern matcher: locates futures symbols inside arbitrary text.
//!
//! The matcher scans left to right and yields non-overlapping spans, each a
//! substring that satisfies the full symbol grammar against the configured
//! root whitelist. Recognition is two-staged: a compiled pattern finds
//! candidates with the right *shape* (letter run, day digits, month
//! abbreviation, year digits, `FUT` tag), then explicit checks accept or
//! reject each candidate. The whitelist deliberately lives outside the
//! pattern so root/lot disambiguation is an ordered lookup in code rather
//! than an artifact of regex alternation order.

use crate::roots::RootTable;
use crate::types::symbol::{FUTURES_SUFFIX, MONTH_ABBREVIATIONS};
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;
use tracing::trace;

lazy_static! {
    /// Shape of one candidate: a letter run, a one-or-two digit day, a month
    /// abbreviation, a two-digit year, and the futures tag.
    ///
    /// `(?i-u)` keeps case-insensitivity ASCII-only: with Unicode folding,
    /// confusables like the Kelvin sign or long s would match letter classes
    /// at a different byte width and break positional field splitting.
    static ref SYMBOL_SHAPE: Regex = Regex::new(&format!(
        r"(?i-u)([A-Z]+)([0-9]{{1,2}})({})([0-9]{{2}}){}",
        MONTH_ABBREVIATIONS.join("|"),
        FUTURES_SUFFIX,
    ))
    .expect("invalid symbol shape pattern");
}

/// One recognized symbol occurrence inside a larger text.
///
/// Byte offsets index the text handed to [`SymbolMatcher::find_iter`];
/// `as_str` borrows the matched substring as it appeared in the input (case
/// and padding untouched).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolMatch<'t> {
    start: usize,
    end: usize,
    text: &'t str,
}

impl<'t> SymbolMatch<'t> {
    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset immediately past the end of the match.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matched span as a byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched substring, exactly as written in the input.
    pub fn as_str(&self) -> &'t str {
        self.text
    }
}

/// Scans text for futures symbols against a root whitelist.
///
/// # Example
///
/// ```rust
/// use mcx_symbology::{RootTable, SymbolMatcher};
///
/// let matcher = SymbolMatcher::new(RootTable::mcx());
/// let spans: Vec<_> = matcher
///     .find_iter("sold goldm5feb26fut, kept silverm27feb26fut")
///     .map(|m| m.as_str())
///     .collect();
/// assert_eq!(spans, ["goldm5feb26fut", "silverm27feb26fut"]);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolMatcher {
    roots: RootTable,
}

impl SymbolMatcher {
    /// Creates a matcher over the given root whitelist.
    pub fn new(roots: RootTable) -> Self {
        Self { roots }
    }

    /// The root whitelist in use.
    pub fn roots(&self) -> &RootTable {
        &self.roots
    }

    /// Returns a lazy iterator over symbol occurrences, left to right,
    /// non-overlapping.
    pub fn find_iter<'m, 't>(&'m self, text: &'t str) -> Matches<'m, 't> {
        Matches {
            matcher: self,
            text,
            pos: 0,
        }
    }

    /// Whether the text contains at least one symbol occurrence.
    pub fn is_match(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }
}

/// Lazy iterator over the symbol occurrences in one text.
///
/// Created by [`SymbolMatcher::find_iter`].
#[derive(Debug)]
pub struct Matches<'m, 't> {
    matcher: &'m SymbolMatcher,
    text: &'t str,
    pos: usize,
}

impl<'m, 't> Iterator for Matches<'m, 't> {
    type Item = SymbolMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let caps = SYMBOL_SHAPE.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;
            let (start, end) = (whole.start(), whole.end());
            // Candidates are all-alphanumeric, so no accepted match can start
            // inside a rejected one; resume after it either way.
            self.pos = end;
            if !standalone(self.text, start, end) {
                trace!(
                    candidate = whole.as_str(),
                    "candidate embedded in a longer token, skipped"
                );
                continue;
            }
            let head = caps.get(1)?.as_str();
            if self.matcher.roots.split_head(head).is_none() {
                trace!(
                    candidate = whole.as_str(),
                    head,
                    "candidate root not whitelisted, skipped"
                );
                continue;
            }
            return Some(SymbolMatch {
                start,
                end,
                text: whole.as_str(),
            });
        }
        None
    }
}

/// A match must stand alone: the characters immediately before and after the
/// span (when present) must not be alphanumeric. This keeps the matcher from
/// rewriting the inside of longer words (`marigold05feb26fut`) and truncating
/// longer tags (`GOLDM05FEB26FUTURES`). Punctuation, whitespace, underscores,
/// and text edges all qualify as boundaries.
fn standalone(text: &str, start: usize, end: usize) -> bool {
    let clear_before = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric());
    let clear_after = text[end..]
        .chars()
        .next()
        .is_none_or(|c| !c.is_alphanumeric());
    clear_before && clear_after
}
