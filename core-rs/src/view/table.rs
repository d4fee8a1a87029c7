//! Tabular view model
//!
//! A table body is either formatted rows or a single placeholder row that
//! spans every column (empty result, loading, failure).

use crate::catalog::QueryTemplate;
use crate::format::{format_row, Column, FormattedCell};
use crate::sparql::RawBinding;

pub const NO_DATA_MESSAGE: &str = "No data matched the query.";
pub const LOADING_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Empty,
    Loading,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<Vec<FormattedCell>>),
    Placeholder {
        kind: PlaceholderKind,
        message: String,
        colspan: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<Column>,
    pub body: TableBody,
}

impl TableView {
    /// One formatted row per binding, or the no-data row for an empty result
    pub fn from_bindings(columns: &[Column], bindings: &[RawBinding]) -> Self {
        let body = if bindings.is_empty() {
            TableBody::Placeholder {
                kind: PlaceholderKind::Empty,
                message: NO_DATA_MESSAGE.to_string(),
                colspan: columns.len(),
            }
        } else {
            TableBody::Rows(bindings.iter().map(|b| format_row(columns, b)).collect())
        };

        Self {
            columns: columns.to_vec(),
            body,
        }
    }

    pub fn for_template(template: &QueryTemplate, bindings: &[RawBinding]) -> Self {
        Self::from_bindings(template.columns, bindings)
    }

    pub fn loading(columns: &[Column]) -> Self {
        Self::placeholder(columns, PlaceholderKind::Loading, LOADING_MESSAGE.to_string())
    }

    pub fn failed(columns: &[Column], message: impl Into<String>) -> Self {
        Self::placeholder(columns, PlaceholderKind::Failed, message.into())
    }

    fn placeholder(columns: &[Column], kind: PlaceholderKind, message: String) -> Self {
        Self {
            columns: columns.to_vec(),
            body: TableBody::Placeholder {
                kind,
                message,
                colspan: columns.len(),
            },
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    /// Rendered row count, placeholder rows included
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder { .. } => 1,
        }
    }

    /// Rows backed by data
    pub fn data_rows(&self) -> &[Vec<FormattedCell>] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Placeholder { .. } => &[],
        }
    }

    pub fn placeholder_kind(&self) -> Option<PlaceholderKind> {
        match &self.body {
            TableBody::Placeholder { kind, .. } => Some(*kind),
            TableBody::Rows(_) => None,
        }
    }

    /// Plain-text cells, placeholder as a single cell
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        match &self.body {
            TableBody::Rows(rows) => rows
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
            TableBody::Placeholder { message, .. } => vec![vec![message.clone()]],
        }
    }
}
