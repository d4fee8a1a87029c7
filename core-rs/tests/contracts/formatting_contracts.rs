// Formatting Contract Tests
//
// These tests verify INVARIANTS of cell rendering that MUST NEVER BREAK.
// Operators read these tables to decide which bins to empty and which trucks
// to dispatch; a changed threshold or a dropped warning is a silent
// operational failure, not a cosmetic one.

use waste_explorer::format::{
    format_cell, format_row, group_thousands, parse_leading_integer, Column, ColumnRule, FormattedCell,
};
use waste_explorer::uri::local_name;
use waste_explorer::{RawBinding, RdfTerm, FILL_WARNING_THRESHOLD};

fn fill(raw: &str) -> FormattedCell {
    let column = Column::new("Fill Level (%)", "fill");
    format_cell(&column, &RawBinding::new().with("fill", RdfTerm::literal(raw)))
}

fn cap(raw: &str) -> FormattedCell {
    let column = Column::new("Capacity", "cap");
    format_cell(&column, &RawBinding::new().with("cap", RdfTerm::literal(raw)))
}

/// WHY: The warning fires strictly above 75, never at 75
/// REASON: Collection rounds are planned against "over three quarters full"
/// BREAKS: Bins at exactly 75% get flagged and dispatched early
/// SACRIFICES: If this fails, the operational threshold moved
#[test]
fn fill_warning_is_strictly_above_threshold() {
    assert_eq!(FILL_WARNING_THRESHOLD, 75);

    assert_eq!(fill("75").to_string(), "75%");
    assert!(!fill("75").is_warning());

    assert_eq!(fill("76").to_string(), "76% (Warning)");
    assert!(fill("76").is_warning());

    assert_eq!(fill("80").to_string(), "80% (Warning)");
    assert_eq!(fill("0").to_string(), "0%");
}

/// WHY: Datatype suffixes are stripped before the number is read
/// REASON: Endpoints return typed literals like `80^^xsd:int`
/// BREAKS: Every fill level renders as NaN%
#[test]
fn fill_datatype_suffix_is_ignored() {
    assert_eq!(fill("80^^int").to_string(), "80% (Warning)");
    assert_eq!(
        fill("\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>").to_string(),
        "42%"
    );
    assert_eq!(parse_leading_integer("80.6"), Some(80));
}

/// WHY: Unparsable numbers are an explicit branch, not a panic or a zero
/// REASON: A zero would read as "empty bin" and hide bad data
/// BREAKS: Corrupt sensor values look like valid readings
#[test]
fn unparsable_number_renders_nan() {
    assert_eq!(fill("n/a"), FormattedCell::NotANumber(ColumnRule::FillLevel));
    assert_eq!(fill("n/a").to_string(), "NaN%");
    assert!(!fill("n/a").is_warning());

    assert_eq!(cap("unknown").to_string(), "NaN");
}

/// WHY: `fill` is checked before `cap` in column classification
/// REASON: The rule is a substring heuristic; order decides ambiguous names
/// BREAKS: A column like `capFill` renders as a grouped integer
#[test]
fn fill_detection_takes_precedence_over_capacity() {
    assert_eq!(ColumnRule::for_column("capFill"), ColumnRule::FillLevel);
    assert_eq!(ColumnRule::for_column("CAPACITY"), ColumnRule::Capacity);
    assert_eq!(ColumnRule::for_column("truck"), ColumnRule::Identifier);
}

/// WHY: Capacities are grouped with `,` every three digits
/// REASON: Display locale is fixed to en-US, independent of the host
/// BREAKS: Output differs between machines
#[test]
fn capacity_grouping_is_locale_independent() {
    assert_eq!(cap("12000").to_string(), "12,000");
    assert_eq!(cap("5000^^int").to_string(), "5,000");
    assert_eq!(cap("999").to_string(), "999");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

/// WHY: Identifiers show only the text after the last `#`
/// REASON: Full ontology IRIs are unreadable in a table
/// BREAKS: Views fill up with namespace noise
#[test]
fn identifiers_show_local_name() {
    assert_eq!(
        local_name("http://www.semanticweb.org/asus/ontologies/2026/1/untitled-ontology-4#Bin_001"),
        "Bin_001"
    );
    assert_eq!(local_name("Plastic"), "Plastic");
    assert_eq!(local_name("ends-with#"), "");
}

/// WHY: Every row has exactly one cell per column
/// REASON: Unbound optional variables still occupy their cell
/// BREAKS: Columns shift left under the wrong header
#[test]
fn rows_are_uniform_with_unbound_variables() {
    let columns = [
        Column::new("Property", "prop"),
        Column::new("Type", "type").badge(),
        Column::new("Domain", "domain").optional("Any"),
        Column::new("Range", "range").optional("Any"),
    ];
    let binding = RawBinding::new()
        .with("prop", RdfTerm::iri("http://example.org/waste#deliversTo"))
        .with("type", RdfTerm::literal("Object"));

    let row = format_row(&columns, &binding);
    assert_eq!(row.len(), columns.len());
    assert_eq!(row[2], FormattedCell::Placeholder("Any"));
    assert_eq!(row[3], FormattedCell::Placeholder("Any"));
}

/// WHY: Formatting is a pure function of (column, binding)
/// REASON: Views are re-rendered by replacement, never patched
/// BREAKS: The same result set renders differently on reload
#[test]
fn formatting_is_deterministic() {
    let column = Column::new("Fill Level (%)", "fill");
    let binding = RawBinding::new().with("fill", RdfTerm::literal("91^^int"));

    let first = format_cell(&column, &binding);
    let second = format_cell(&column, &binding);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}
