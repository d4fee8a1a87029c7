/**
 * terminal.rs
 * Text rendering of the explorer views for the command line
 */

use std::collections::HashMap;
use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use crate::format::{BadgeCategory, Column, FormattedCell};
use crate::view::hierarchy::ClassHierarchy;
use crate::view::state::ViewKey;
use crate::view::surface::RenderSurface;
use crate::view::table::{PlaceholderKind, TableBody, TableView};

const COLUMN_GAP: &str = "  ";

/// Renders each region to lines of text; only visible regions are printed
#[derive(Debug, Default)]
pub struct TerminalSurface {
    colorize: bool,
    visibility: HashMap<ViewKey, bool>,
    headers: HashMap<ViewKey, Vec<&'static str>>,
    regions: HashMap<ViewKey, Vec<String>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            colorize: true,
            ..Default::default()
        }
    }

    /// Surface that never emits ANSI styling
    pub fn plain() -> Self {
        Self::default()
    }

    /// Title line followed by the region contents of one view
    pub fn render_view(&self, view: ViewKey) -> Vec<String> {
        let mut lines = vec![self.paint(view.title().to_string(), |s| s.bold().underline())];
        match self.regions.get(&view) {
            Some(region) => lines.extend(region.iter().cloned()),
            None => match self.headers.get(&view) {
                Some(headers) => lines.push(headers.join(COLUMN_GAP)),
                None => lines.push(String::new()),
            },
        }
        lines
    }

    /// Print every visible view
    pub fn print_visible<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for view in ViewKey::ALL {
            if self.visibility.get(&view).copied().unwrap_or(false) {
                for line in self.render_view(view) {
                    writeln!(out, "{}", line)?;
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn paint(&self, text: String, style: impl Fn(&str) -> ColoredString) -> String {
        if self.colorize {
            style(&text).to_string()
        } else {
            text
        }
    }

    fn styled_cell(&self, column: &Column, cell: &FormattedCell) -> String {
        let text = cell.to_string();
        match cell {
            FormattedCell::Percentage { warning: true, .. } => self.paint(text, |s| s.red().bold()),
            FormattedCell::Badge {
                category: BadgeCategory::Object,
                ..
            } => self.paint(text, |s| s.green()),
            FormattedCell::Badge {
                category: BadgeCategory::Data,
                ..
            } => self.paint(text, |s| s.purple()),
            FormattedCell::Tag(_) => self.paint(text, |s| s.blue()),
            FormattedCell::Placeholder(_) => self.paint(text, |s| s.dimmed()),
            _ if column.emphasis => self.paint(text, |s| s.bold()),
            _ => text,
        }
    }

    fn render_table(&self, headers: &[&'static str], table: &TableView) -> Vec<String> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in table.data_rows() {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.to_string().chars().count());
                }
            }
        }

        let header_line = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:<width$}", h, width = *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);

        let mut lines = vec![
            self.paint(header_line.trim_end().to_string(), |s| s.bold()),
            "-".repeat(rule_width),
        ];

        match &table.body {
            TableBody::Rows(rows) => {
                for row in rows {
                    let cells: Vec<String> = row
                        .iter()
                        .zip(table.columns.iter().zip(&widths))
                        .map(|(cell, (column, width))| {
                            let plain_len = cell.to_string().chars().count();
                            let padding = " ".repeat(width.saturating_sub(plain_len));
                            format!("{}{}", self.styled_cell(column, cell), padding)
                        })
                        .collect();
                    lines.push(cells.join(COLUMN_GAP).trim_end().to_string());
                }
            }
            TableBody::Placeholder { kind, message, .. } => {
                let line = match kind {
                    PlaceholderKind::Failed => self.paint(message.clone(), |s| s.red()),
                    PlaceholderKind::Loading => self.paint(message.clone(), |s| s.dimmed()),
                    PlaceholderKind::Empty => message.clone(),
                };
                lines.push(line);
            }
        }
        lines
    }

    fn render_hierarchy(&self, hierarchy: &ClassHierarchy) -> Vec<String> {
        let mut lines = Vec::new();
        for group in hierarchy.groups() {
            lines.push(self.paint(group.parent.clone(), |s| s.cyan().bold()));
            let pills: Vec<String> = group
                .children
                .iter()
                .map(|child| format!("[{}]", child))
                .collect();
            lines.push(format!("  {}", pills.join(" ")));
        }
        lines
    }
}

impl RenderSurface for TerminalSurface {
    fn set_visibility(&mut self, view: ViewKey, visible: bool) {
        self.visibility.insert(view, visible);
    }

    fn set_headers(&mut self, view: ViewKey, headers: &[&'static str]) {
        self.headers.insert(view, headers.to_vec());
    }

    fn set_body(&mut self, view: ViewKey, table: &TableView) {
        let headers = self
            .headers
            .get(&view)
            .cloned()
            .unwrap_or_else(|| table.headers());
        let lines = self.render_table(&headers, table);
        self.regions.insert(view, lines);
    }

    fn set_hierarchy(&mut self, hierarchy: &ClassHierarchy) {
        let lines = self.render_hierarchy(hierarchy);
        self.regions.insert(ViewKey::Hierarchy, lines);
    }

    fn set_error(&mut self, view: ViewKey, message: &str) {
        let line = self.paint(message.to_string(), |s| s.red());
        self.regions.insert(view, vec![line]);
    }
}
