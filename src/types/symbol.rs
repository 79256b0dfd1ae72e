//! Symbol types for the canonical futures format.
//!
//! The canonical rendering of a futures symbol is `ROOT[LOT]DDMMMYYFUT`:
//!
//! | Field | Width | Rule | Example |
//! |-------|-------|------|---------|
//! | `ROOT` | variable | uppercase commodity code | `GOLD`, `CRUDEOIL` |
//! | `LOT` | 0 or 1 | uppercase lot-marker letter, roots with a reduced-lot variant only | `M` |
//! | `DD` | 2 | expiry day, zero-padded | `05` |
//! | `MMM` | 3 | uppercase month abbreviation | `FEB` |
//! | `YY` | 2 | expiry year digits, copied verbatim from input | `26` |
//! | `FUT` | 3 | fixed instrument tag | `FUT` |
//!
//! `GOLDM05FEB26FUT` is the 5 February (20)26 expiry of the gold mini
//! contract. The year is carried as text on purpose: it is never interpreted,
//! widened to four digits, or range-checked.

use crate::symbol::error::SymbolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The twelve month abbreviations accepted in symbols, in calendar order.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// The fixed instrument-type tag closing every futures symbol.
pub const FUTURES_SUFFIX: &str = "FUT";

/// Expiry month of a futures contract.
///
/// Symbols carry the month as a three-letter English abbreviation, accepted
/// in any letter case and always rendered uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    /// January
    Jan,
    /// February
    Feb,
    /// March
    Mar,
    /// April
    Apr,
    /// May
    May,
    /// June
    Jun,
    /// July
    Jul,
    /// August
    Aug,
    /// September
    Sep,
    /// October
    Oct,
    /// November
    Nov,
    /// December
    Dec,
}

impl Month {
    /// Looks up a month by its three-letter abbreviation, ignoring case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mcx_symbology::Month;
    ///
    /// assert_eq!(Month::from_abbrev("feb"), Some(Month::Feb));
    /// assert_eq!(Month::from_abbrev("FEB"), Some(Month::Feb));
    /// assert_eq!(Month::from_abbrev("febr"), None);
    /// ```
    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        let position = MONTH_ABBREVIATIONS
            .iter()
            .position(|name| name.eq_ignore_ascii_case(abbrev))?;
        Self::from_number(u8::try_from(position).ok()? + 1)
    }

    /// Looks up a month by calendar number, 1 (January) through 12 (December).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Jan),
            2 => Some(Self::Feb),
            3 => Some(Self::Mar),
            4 => Some(Self::Apr),
            5 => Some(Self::May),
            6 => Some(Self::Jun),
            7 => Some(Self::Jul),
            8 => Some(Self::Aug),
            9 => Some(Self::Sep),
            10 => Some(Self::Oct),
            11 => Some(Self::Nov),
            12 => Some(Self::Dec),
            _ => None,
        }
    }

    /// Calendar number of the month, 1 through 12.
    pub fn number(self) -> u8 {
        match self {
            Self::Jan => 1,
            Self::Feb => 2,
            Self::Mar => 3,
            Self::Apr => 4,
            Self::May => 5,
            Self::Jun => 6,
            Self::Jul => 7,
            Self::Aug => 8,
            Self::Sep => 9,
            Self::Oct => 10,
            Self::Nov => 11,
            Self::Dec => 12,
        }
    }

    /// Uppercase three-letter abbreviation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jan => "JAN",
            Self::Feb => "FEB",
            Self::Mar => "MAR",
            Self::Apr => "APR",
            Self::May => "MAY",
            Self::Jun => "JUN",
            Self::Jul => "JUL",
            Self::Aug => "AUG",
            Self::Sep => "SEP",
            Self::Oct => "OCT",
            Self::Nov => "NOV",
            Self::Dec => "DEC",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Month {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_abbrev(s).ok_or_else(|| SymbolError::UnknownMonth(s.to_string()))
    }
}

/// A futures symbol decomposed into typed fields.
///
/// Values are ephemeral: one is built per recognized occurrence, rendered to
/// canonical text, and dropped. Nothing persists a `ParsedSymbol` and it has
/// no identity beyond the single normalization call that produced it.
///
/// Field case is normalized at construction; the year is stored exactly as it
/// appeared in the input.
///
/// # Example
///
/// ```rust
/// use mcx_symbology::{Month, ParsedSymbol};
///
/// let symbol = ParsedSymbol::new("gold", Some('m'), 5, Month::Feb, "26");
/// assert_eq!(symbol.root, "GOLD");
/// assert_eq!(symbol.lot_marker, Some('M'));
/// assert_eq!(symbol.to_string(), "GOLDM05FEB26FUT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedSymbol {
    /// Commodity root code, uppercase (e.g. `GOLD`, `CRUDEOIL`).
    pub root: String,

    /// Lot-size marker letter, uppercase, for reduced-lot contract variants.
    pub lot_marker: Option<char>,

    /// Expiry day-of-month as parsed. Rendered zero-padded to two digits.
    /// Not calendar-validated: a day of 32, or 30 in a 28-day month, is
    /// normalized as-is (formatting only).
    pub day: u8,

    /// Expiry month.
    pub month: Month,

    /// Expiry year as a two-digit string, byte-for-byte from the input.
    pub year: String,

    /// Instrument-type tag, uppercase. Always [`FUTURES_SUFFIX`] in the
    /// supported grammar.
    pub suffix: String,
}

impl ParsedSymbol {
    /// Creates a parsed futures symbol, normalizing root and lot-marker case.
    ///
    /// The suffix is pinned to [`FUTURES_SUFFIX`]; the year is stored
    /// verbatim.
    pub fn new(
        root: impl AsRef<str>,
        lot_marker: Option<char>,
        day: u8,
        month: Month,
        year: impl AsRef<str>,
    ) -> Self {
        Self {
            root: root.as_ref().to_ascii_uppercase(),
            lot_marker: lot_marker.map(|marker| marker.to_ascii_uppercase()),
            day,
            month,
            year: year.as_ref().to_string(),
            suffix: FUTURES_SUFFIX.to_string(),
        }
    }

    /// The `DDMMMYY` expiry portion of the canonical form.
    ///
    /// ```rust
    /// use mcx_symbology::{Month, ParsedSymbol};
    ///
    /// let symbol = ParsedSymbol::new("SILVER", Some('M'), 27, Month::Feb, "26");
    /// assert_eq!(symbol.expiry_code(), "27FEB26");
    /// ```
    pub fn expiry_code(&self) -> String {
        format!("{:02}{}{}", self.day, self.month, self.year)
    }
}

impl fmt::Display for ParsedSymbol {
    /// Renders the canonical form: `ROOT[LOT]DDMMMYYFUT`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        if let Some(marker) = self.lot_marker {
            write!(f, "{}", marker)?;
        }
        write!(f, "{:02}{}{}{}", self.day, self.month, self.year, self.suffix)
    }
}

impl FromStr for ParsedSymbol {
    type Err = SymbolError;

    /// Parses a bare symbol against the builtin MCX root whitelist.
    ///
    /// ```rust
    /// use mcx_symbology::ParsedSymbol;
    ///
    /// let symbol: ParsedSymbol = "goldm5feb26fut".parse().expect("known root");
    /// assert_eq!(symbol.to_string(), "GOLDM05FEB26FUT");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::symbol::SymbolNormalizer::builtin().parse(s)
    }
}
