//! Core type definitions for the symbology engine.
//!
//! The data model is deliberately small: one record per recognized symbol
//! occurrence plus the fixed vocabularies (months, instrument suffix) the
//! grammar is built from.

/// Symbol types for the canonical futures format
pub mod symbol;

// Re-export commonly used types
pub use symbol::{FUTURES_SUFFIX, MONTH_ABBREVIATIONS, Month, ParsedSymbol};
