//! Binding normalization
//!
//! Turns one raw term into a tagged [`CellValue`], deciding its kind once so
//! formatting downstream is an exhaustive match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::column::ColumnRule;
use crate::sparql::results::{RdfTerm, TermKind};
use crate::uri::local_name;

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading integer pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Local name of an IRI
    Identifier(String),
    Integer(i64),
    /// Any other literal, shortened the same way identifiers are
    Literal(String),
    /// Numeric column whose value did not parse; keeps the raw text
    NotANumber(String),
    /// Variable unbound in this row
    Missing,
}

/// Drop a trailing `^^<datatype>` annotation and surrounding quotes
pub fn strip_datatype_suffix(raw: &str) -> &str {
    let lexical = raw.split("^^").next().unwrap_or(raw);
    lexical.trim_matches('"')
}

/// Parse the leading integer of a value, the way a lenient form field does:
/// `"80"`, `"80^^int"`, `" 42 kg"` and `"80.6"` all yield a number.
pub fn parse_leading_integer(raw: &str) -> Option<i64> {
    let lexical = strip_datatype_suffix(raw);
    LEADING_INTEGER
        .captures(lexical)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Normalize one (possibly unbound) term for a column rule
pub fn normalize(rule: ColumnRule, term: Option<&RdfTerm>) -> CellValue {
    let Some(term) = term else {
        return CellValue::Missing;
    };

    match rule {
        ColumnRule::FillLevel | ColumnRule::Capacity => match parse_leading_integer(&term.value) {
            Some(n) => CellValue::Integer(n),
            None => CellValue::NotANumber(term.value.clone()),
        },
        ColumnRule::Identifier => match term.kind() {
            TermKind::Iri => CellValue::Identifier(local_name(&term.value).to_string()),
            TermKind::Literal | TermKind::BlankNode | TermKind::Unknown => {
                CellValue::Literal(local_name(&term.value).to_string())
            }
        },
    }
}
