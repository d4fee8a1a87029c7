/**
 * format module
 *
 * - column: column specifications and the name heuristic
 * - value: tagged normalization of raw terms
 * - cell: formatted cells and the column formatter
 */

pub mod cell;
pub mod column;
pub mod value;

pub use cell::{format_cell, format_row, group_thousands, BadgeCategory, FormattedCell};
pub use column::{Column, ColumnKind, ColumnRule};
pub use value::{normalize, parse_leading_integer, CellValue};
