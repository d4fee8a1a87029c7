//! Column specifications
//!
//! A column pairs a display label with the query variable that feeds it and
//! says how its cells are rendered.

/// Rendering rule picked from the variable name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRule {
    /// Percentage with an over-threshold warning
    FillLevel,
    /// Integer with thousands grouping
    Capacity,
    /// Shortened identifier as plain text
    Identifier,
}

impl ColumnRule {
    /// Classify a column by case-insensitive substring match on its name.
    ///
    /// `fill` is checked before `cap`, so a name containing both is a fill level.
    pub fn for_column(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("fill") {
            ColumnRule::FillLevel
        } else if lower.contains("cap") {
            ColumnRule::Capacity
        } else {
            ColumnRule::Identifier
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnRule::FillLevel | ColumnRule::Capacity)
    }
}

/// How a column's cells are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Name heuristic (fill / cap / identifier)
    Heuristic,
    /// Object vs Data property badge
    CategoryBadge,
    /// Shortened identifier shown as a pill
    Tag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub variable: &'static str,
    pub kind: ColumnKind,
    /// Shown when the variable is unbound in a row
    pub placeholder: &'static str,
    /// Rendered with emphasis (row key columns)
    pub emphasis: bool,
}

impl Column {
    pub const fn new(label: &'static str, variable: &'static str) -> Self {
        Self {
            label,
            variable,
            kind: ColumnKind::Heuristic,
            placeholder: "",
            emphasis: false,
        }
    }

    pub const fn badge(self) -> Self {
        Self { kind: ColumnKind::CategoryBadge, ..self }
    }

    pub const fn tag(self) -> Self {
        Self { kind: ColumnKind::Tag, ..self }
    }

    pub const fn optional(self, placeholder: &'static str) -> Self {
        Self { placeholder, ..self }
    }

    pub const fn emphasized(self) -> Self {
        Self { emphasis: true, ..self }
    }

    /// Rendering rule for heuristic columns, decided from the variable name
    pub fn rule(&self) -> ColumnRule {
        ColumnRule::for_column(self.variable)
    }
}
