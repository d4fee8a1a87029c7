//! Column formatter
//!
//! Maps one (column, binding) pair to the display form of a table cell.

use std::fmt;

use crate::format::column::{Column, ColumnKind, ColumnRule};
use crate::format::value::{normalize, CellValue};
use crate::sparql::results::RawBinding;
use crate::uri::local_name;
use crate::FILL_WARNING_THRESHOLD;

/// Property category shown as a coloured badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCategory {
    Object,
    Data,
}

impl BadgeCategory {
    /// `Object` is the only label with its own colour; everything else is Data
    pub fn from_label(label: &str) -> Self {
        if label == "Object" {
            BadgeCategory::Object
        } else {
            BadgeCategory::Data
        }
    }

    pub fn colour(self) -> &'static str {
        match self {
            BadgeCategory::Object => "green",
            BadgeCategory::Data => "purple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedCell {
    Text(String),
    Percentage { value: i64, warning: bool },
    Grouped(i64),
    NotANumber(ColumnRule),
    Badge { label: String, category: BadgeCategory },
    Tag(String),
    Placeholder(&'static str),
}

impl FormattedCell {
    pub fn percentage(value: i64) -> Self {
        FormattedCell::Percentage {
            value,
            warning: value > i64::from(FILL_WARNING_THRESHOLD),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, FormattedCell::Percentage { warning: true, .. })
    }
}

impl fmt::Display for FormattedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedCell::Text(text) | FormattedCell::Tag(text) => f.write_str(text),
            FormattedCell::Percentage { value, warning: true } => write!(f, "{}% (Warning)", value),
            FormattedCell::Percentage { value, warning: false } => write!(f, "{}%", value),
            FormattedCell::Grouped(value) => f.write_str(&group_thousands(*value)),
            FormattedCell::NotANumber(ColumnRule::FillLevel) => f.write_str("NaN%"),
            FormattedCell::NotANumber(_) => f.write_str("NaN"),
            FormattedCell::Badge { label, .. } => f.write_str(label),
            FormattedCell::Placeholder(text) => f.write_str(text),
        }
    }
}

/// Format an integer with `,` every three digits (en-US grouping)
///
/// # Example
///
/// ```
/// use waste_explorer::format::group_thousands;
///
/// assert_eq!(group_thousands(12000), "12,000");
/// assert_eq!(group_thousands(-1234567), "-1,234,567");
/// ```
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format the cell of `column` for one binding row
pub fn format_cell(column: &Column, binding: &RawBinding) -> FormattedCell {
    let term = binding.get(column.variable);

    match column.kind {
        ColumnKind::CategoryBadge => {
            let label = term.map(|t| t.value.clone()).unwrap_or_default();
            let category = BadgeCategory::from_label(&label);
            FormattedCell::Badge { label, category }
        }
        ColumnKind::Tag => match term {
            Some(t) => FormattedCell::Tag(local_name(&t.value).to_string()),
            None => FormattedCell::Placeholder(column.placeholder),
        },
        ColumnKind::Heuristic => {
            let rule = column.rule();
            match normalize(rule, term) {
                CellValue::Missing => FormattedCell::Placeholder(column.placeholder),
                CellValue::NotANumber(_) => FormattedCell::NotANumber(rule),
                CellValue::Integer(n) => match rule {
                    ColumnRule::FillLevel => FormattedCell::percentage(n),
                    ColumnRule::Capacity => FormattedCell::Grouped(n),
                    ColumnRule::Identifier => FormattedCell::Text(n.to_string()),
                },
                CellValue::Identifier(text) | CellValue::Literal(text) => FormattedCell::Text(text),
            }
        }
    }
}

/// Format a full row in column order; the row always has one cell per column
pub fn format_row(columns: &[Column], binding: &RawBinding) -> Vec<FormattedCell> {
    columns.iter().map(|column| format_cell(column, binding)).collect()
}
