//! Integration tests for end-to-end symbol normalization.
//!
//! Exercises the full pipeline over realistic text: trade logs, config
//! values, and mixed prose, plus table loading from JSON and the component
//! seams between matcher, parser, and formatter.

use mcx_symbology::{
    Month, ParsedSymbol, RootSpec, RootTable, RootTableError, SymbolFormatter, SymbolNormalizer,
    normalize,
};

// ============================================================================
// Canonical Seed Cases
// ============================================================================

/// The exact input/output pairs the engine guarantees.
#[test]
fn test_seed_cases() {
    assert_eq!(normalize("GOLDM05FEB26FUT"), "GOLDM05FEB26FUT");
    assert_eq!(normalize("goldm5feb26fut"), "GOLDM05FEB26FUT");
    assert_eq!(normalize("GOLDM05feb26FUT"), "GOLDM05FEB26FUT");
    assert_eq!(normalize("crudeoil19feb26fut"), "CRUDEOIL19FEB26FUT");
    assert_eq!(normalize("SILVERM27FEB26FUT"), "SILVERM27FEB26FUT");
}

/// A sentence with two embedded symbols normalizes each independently.
#[test]
fn test_multi_occurrence_sentence() {
    assert_eq!(
        normalize("Trade goldm5feb26fut and silverm27feb26fut today."),
        "Trade GOLDM05FEB26FUT and SILVERM27FEB26FUT today."
    );
}

// ============================================================================
// Realistic Text Scenarios
// ============================================================================

/// A fill report line: the symbol is rewritten, prices and ids are not.
#[test]
fn test_trade_log_line() {
    let line = "2026-02-03T10:14:07Z FILL order=118842 goldm5feb26fut qty=2 px=62010.0";
    assert_eq!(
        normalize(line),
        "2026-02-03T10:14:07Z FILL order=118842 GOLDM05FEB26FUT qty=2 px=62010.0"
    );
}

/// A comma-separated config value: each entry normalizes, commas survive.
#[test]
fn test_config_value_list() {
    assert_eq!(
        normalize("symbols=goldm5feb26fut,silverm27feb26fut,naturalgas26feb26fut"),
        "symbols=GOLDM05FEB26FUT,SILVERM27FEB26FUT,NATURALGAS26FEB26FUT"
    );
}

/// A CSV row keeps its structure; only the symbol column changes.
#[test]
fn test_csv_row() {
    assert_eq!(
        normalize("buy,crudeoilm19feb26fut,100,5210.5"),
        "buy,CRUDEOILM19FEB26FUT,100,5210.5"
    );
}

/// Snake_case identifiers embed symbols cleanly; underscores are boundaries.
#[test]
fn test_underscore_delimited_identifier() {
    assert_eq!(
        normalize("pos_goldguinea1jan27fut_qty"),
        "pos_GOLDGUINEA01JAN27FUT_qty"
    );
}

/// Text around the symbol, including non-ASCII, is preserved byte for byte.
#[test]
fn test_unicode_context_is_preserved() {
    assert_eq!(
        normalize("цена silvermic8aug26fut → ₹92,410"),
        "цена SILVERMIC08AUG26FUT → ₹92,410"
    );
}

/// Text with nothing to normalize comes back identical.
#[test]
fn test_plain_text_is_identity() {
    let text = "settlement window closes at 23:30 IST";
    assert_eq!(normalize(text), text);
    assert_eq!(normalize(""), "");
}

// ============================================================================
// Rejection Scenarios
// ============================================================================

/// Candidates embedded in longer tokens are never rewritten.
#[test]
fn test_embedded_candidates_stay_untouched() {
    assert_eq!(normalize("marigold05feb26fut"), "marigold05feb26fut");
    assert_eq!(normalize("GOLDM05FEB26FUTURES"), "GOLDM05FEB26FUTURES");
    assert_eq!(normalize("7goldm5feb26fut"), "7goldm5feb26fut");
    assert_eq!(normalize("goldm5feb26fut2026"), "goldm5feb26fut2026");
}

/// Roots outside the whitelist never match, even in perfect symbol shape.
#[test]
fn test_unlisted_roots_stay_untouched() {
    assert_eq!(normalize("wheat5feb26fut"), "wheat5feb26fut");
    // COPPER is listed but has no registered lot marker.
    assert_eq!(normalize("copperm5feb26fut"), "copperm5feb26fut");
}

/// A rejected candidate does not hide a valid symbol later in the text.
#[test]
fn test_rejection_does_not_mask_later_matches() {
    assert_eq!(
        normalize("wheat5feb26fut then goldm5feb26fut"),
        "wheat5feb26fut then GOLDM05FEB26FUT"
    );
}

/// Out-of-calendar days normalize anyway; formatting is the whole contract.
#[test]
fn test_calendar_semantics_are_not_validated() {
    assert_eq!(normalize("gold32feb26fut"), "GOLD32FEB26FUT");
    assert_eq!(normalize("gold0feb26fut"), "GOLD00FEB26FUT");
}

// ============================================================================
// Component Seam Tests
// ============================================================================

/// Driving matcher, parser, and formatter by hand reproduces `normalize`.
#[test]
fn test_pipeline_components_agree_with_normalize() {
    let text = "opened zinc1jan27fut, rolled to zinc30jan27fut";
    let normalizer = SymbolNormalizer::builtin();

    let mut rebuilt = String::new();
    let mut copied = 0;
    for m in normalizer.find_iter(text) {
        let parsed = normalizer.parse(m.as_str()).expect("matched span parses");
        rebuilt.push_str(&text[copied..m.start()]);
        rebuilt.push_str(&SymbolFormatter::format(&parsed));
        copied = m.end();
    }
    rebuilt.push_str(&text[copied..]);

    assert_eq!(rebuilt, normalize(text));
    assert_eq!(rebuilt, "opened ZINC01JAN27FUT, rolled to ZINC30JAN27FUT");
}

/// Parsed fields carry through to serde intact.
#[test]
fn test_parsed_symbol_json_shape() {
    let parsed = SymbolNormalizer::builtin()
        .parse("goldm5feb26fut")
        .expect("valid symbol");
    assert_eq!(parsed.root, "GOLD");
    assert_eq!(parsed.lot_marker, Some('M'));
    assert_eq!(parsed.day, 5);
    assert_eq!(parsed.month, Month::Feb);
    assert_eq!(parsed.year, "26");

    let json = serde_json::to_string(&parsed).expect("serializes");
    let back: ParsedSymbol = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, parsed);
    assert_eq!(back.to_string(), "GOLDM05FEB26FUT");
}

// ============================================================================
// Table Configuration Tests
// ============================================================================

/// A table deserialized from JSON drives the same normalization as one
/// built in code.
#[test]
fn test_table_loaded_from_json() {
    let specs: Vec<RootSpec> = serde_json::from_str(
        r#"[
            { "code": "gold", "lot_markers": ["m"] },
            { "code": "COTTON" }
        ]"#,
    )
    .expect("valid JSON");
    let normalizer = SymbolNormalizer::new(RootTable::new(specs).expect("valid table"));

    assert_eq!(normalizer.normalize("goldm5feb26fut"), "GOLDM05FEB26FUT");
    assert_eq!(normalizer.normalize("cotton7mar26fut"), "COTTON07MAR26FUT");
    // SILVER is only in the builtin table.
    assert_eq!(normalizer.normalize("silver5feb26fut"), "silver5feb26fut");
}

/// Invalid tables are rejected at construction, before any matching runs.
#[test]
fn test_invalid_tables_are_rejected() {
    assert_eq!(
        RootTable::new(Vec::<RootSpec>::new()),
        Err(RootTableError::EmptyTable)
    );
    assert_eq!(
        RootTable::new([RootSpec::new("GOLD 2")]),
        Err(RootTableError::InvalidCode("GOLD 2".to_string()))
    );
    assert_eq!(
        RootTable::new([RootSpec::new("GOLD").with_lot_marker('7')]),
        Err(RootTableError::InvalidLotMarker {
            root: "GOLD".to_string(),
            marker: '7',
        })
    );
    assert_eq!(
        RootTable::new([RootSpec::new("GOLD"), RootSpec::new("gold")]),
        Err(RootTableError::DuplicateRoot("GOLD".to_string()))
    );
}

/// Rebuilding the builtin table from its own specs changes nothing.
#[test]
fn test_builtin_table_round_trips_through_specs() {
    let mcx = RootTable::mcx();
    let rebuilt = RootTable::new(mcx.iter().cloned()).expect("valid table");
    assert_eq!(rebuilt, mcx);

    let normalizer = SymbolNormalizer::new(rebuilt);
    assert_eq!(
        normalizer.normalize("aluminium30apr26fut"),
        "ALUMINIUM30APR26FUT"
    );
}
