//! Commodity root whitelist.
//!
//! Recognition is anchored on an explicit table of known commodity root codes
//! and the lot-marker letters each root permits. Without the whitelist, any
//! word followed by date digits would look like a symbol. The table is plain
//! configuration data: built once (from code or from a deserialized config
//! file), handed to the engine at construction, and never mutated afterwards,
//! so new listings are a data change rather than a matching-logic change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors produced while validating a [`RootTable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RootTableError {
    /// The table was built from an empty spec list.
    #[error("Root table must contain at least one root")]
    EmptyTable,

    /// A root code was empty or contained non-letter characters.
    #[error("Invalid root code: {0:?}")]
    InvalidCode(String),

    /// A lot marker was not an ASCII letter.
    #[error("Invalid lot marker {marker:?} for root {root}")]
    InvalidLotMarker {
        /// Root code the marker was declared on.
        root: String,
        /// The offending marker character.
        marker: char,
    },

    /// The same root code appeared twice.
    #[error("Duplicate root code: {0}")]
    DuplicateRoot(String),
}

/// One whitelist entry: a commodity root code and its permitted lot markers.
///
/// Deserializable so whitelists can live in configuration files:
///
/// ```rust
/// use mcx_symbology::RootSpec;
///
/// let spec: RootSpec = serde_json::from_str(
///     r#"{ "code": "GOLD", "lot_markers": ["M"] }"#,
/// ).expect("valid spec");
/// assert_eq!(spec.code(), "GOLD");
/// ```
///
/// The `lot_markers` field may be omitted for roots without reduced-lot
/// variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSpec {
    code: String,
    #[serde(default)]
    lot_markers: Vec<char>,
}

impl RootSpec {
    /// Creates a spec for a root with no lot-size variants.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self {
            code: code.as_ref().to_ascii_uppercase(),
            lot_markers: Vec::new(),
        }
    }

    /// Adds a permitted lot-marker letter.
    pub fn with_lot_marker(mut self, marker: char) -> Self {
        self.lot_markers.push(marker.to_ascii_uppercase());
        self
    }

    /// Root code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Permitted lot-marker letters.
    pub fn lot_markers(&self) -> &[char] {
        &self.lot_markers
    }

    /// Whether `marker` is a permitted lot marker, ignoring case.
    pub fn allows_lot_marker(&self, marker: char) -> bool {
        self.lot_markers
            .iter()
            .any(|permitted| permitted.eq_ignore_ascii_case(&marker))
    }
}

/// The read-only whitelist of commodity roots, keyed by uppercase code.
///
/// Construction validates and case-normalizes every entry; lookups are then
/// exact. The table is cheap to clone and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootTable {
    specs: HashMap<String, RootSpec>,
}

impl RootTable {
    /// Builds a table from root specs, validating each entry.
    ///
    /// Codes must be non-empty ASCII letters; lot markers must be ASCII
    /// letters; codes must be unique (case-insensitively). Codes and markers
    /// are stored uppercase regardless of input case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mcx_symbology::{RootSpec, RootTable};
    ///
    /// let table = RootTable::new([
    ///     RootSpec::new("gold").with_lot_marker('m'),
    ///     RootSpec::new("COPPER"),
    /// ]).expect("valid table");
    /// assert_eq!(table.len(), 2);
    /// assert!(table.get("GOLD").is_some());
    /// ```
    pub fn new(specs: impl IntoIterator<Item = RootSpec>) -> Result<Self, RootTableError> {
        let mut table = HashMap::new();
        for spec in specs {
            let code = spec.code.to_ascii_uppercase();
            if code.is_empty() || !code.bytes().all(|byte| byte.is_ascii_alphabetic()) {
                return Err(RootTableError::InvalidCode(spec.code));
            }
            let mut markers: Vec<char> = Vec::with_capacity(spec.lot_markers.len());
            for &marker in &spec.lot_markers {
                if !marker.is_ascii_alphabetic() {
                    return Err(RootTableError::InvalidLotMarker { root: code, marker });
                }
                let marker = marker.to_ascii_uppercase();
                if !markers.contains(&marker) {
                    markers.push(marker);
                }
            }
            let normalized = RootSpec {
                code: code.clone(),
                lot_markers: markers,
            };
            if table.insert(code.clone(), normalized).is_some() {
                return Err(RootTableError::DuplicateRoot(code));
            }
        }
        if table.is_empty() {
            return Err(RootTableError::EmptyTable);
        }
        Ok(Self { specs: table })
    }

    /// The builtin table of MCX metal and energy roots.
    ///
    /// Versioned data, not a live listing feed: `M` marks the mini variants
    /// (GOLDM, SILVERM, CRUDEOILM); guinea/petal/micro contracts trade under
    /// their own roots.
    pub fn mcx() -> Self {
        let specs = vec![
            RootSpec::new("GOLD").with_lot_marker('M'),
            RootSpec::new("GOLDGUINEA"),
            RootSpec::new("GOLDPETAL"),
            RootSpec::new("SILVER").with_lot_marker('M'),
            RootSpec::new("SILVERMIC"),
            RootSpec::new("CRUDEOIL").with_lot_marker('M'),
            RootSpec::new("NATURALGAS"),
            RootSpec::new("COPPER"),
            RootSpec::new("ZINC"),
            RootSpec::new("LEAD"),
            RootSpec::new("NICKEL"),
            RootSpec::new("ALUMINIUM"),
        ];
        Self::new(specs).expect("builtin MCX root table is valid")
    }

    /// Looks up a root spec by code, ignoring case.
    pub fn get(&self, code: &str) -> Option<&RootSpec> {
        if code.is_ascii() {
            self.specs.get(&code.to_ascii_uppercase())
        } else {
            None
        }
    }

    /// Whether `code` is a whitelisted root.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Splits a candidate letter run into root and optional lot marker.
    ///
    /// Ordered lookup, longest combination first: the run is tried as
    /// root+lot (all but the last letter a known root, last letter one of its
    /// permitted markers) before falling back to the whole run as a bare
    /// root. `GOLDM` therefore resolves to `GOLD` + `M` while `GOLDGUINEA`
    /// resolves to the bare `GOLDGUINEA` root. Runs matching neither way
    /// return `None`.
    pub fn split_head(&self, head: &str) -> Option<(&RootSpec, Option<char>)> {
        if head.is_empty() || !head.is_ascii() {
            return None;
        }
        let run = head.to_ascii_uppercase();
        if run.len() >= 2 {
            let (stem, marker) = run.split_at(run.len() - 1);
            if let (Some(spec), Some(marker)) = (self.specs.get(stem), marker.chars().next()) {
                if spec.allows_lot_marker(marker) {
                    return Some((spec, Some(marker)));
                }
            }
        }
        self.specs.get(&run).map(|spec| (spec, None))
    }

    /// Number of roots in the table.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the table holds no roots. Always false for tables built by
    /// [`RootTable::new`].
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterates over the root specs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &RootSpec> {
        self.specs.values()
    }
}
