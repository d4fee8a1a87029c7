//! # Waste Explorer - SPARQL browser for the waste-management ontology
//!
//! Queries a SPARQL endpoint (or an in-process store loaded from Turtle) and
//! renders the results as four views: class hierarchy, properties,
//! individuals, and an on-demand query table for the competency and
//! operational questions.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌───────────┐   ┌─────────────┐
//! │ catalog  │──▶│ QueryExecutor│──▶│  format   │──▶│ RenderSurface│
//! │ templates│   │ HTTP / local │   │ cells     │   │ views       │
//! └──────────┘   └──────────────┘   └───────────┘   └─────────────┘
//! ```
//!
//! Results are normalized per column: IRIs are shortened to their local
//! name, fill levels become percentages (flagged above the warning
//! threshold), and capacities are digit-grouped.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod format;
pub mod sparql;
pub mod uri;
pub mod view;

pub use catalog::{QueryTemplate, TemplateGroup, TemplateId};
pub use config::ExplorerConfig;
pub use errors::{ExplorerError, FetchError};
pub use format::{format_cell, format_row, Column, ColumnRule, FormattedCell};
pub use sparql::{HttpQueryExecutor, LocalStoreExecutor, QueryExecutor, RawBinding, RdfTerm, SparqlQuery};
pub use uri::local_name;
pub use view::{
    ClassHierarchy, Explorer, LoadState, RecordingSurface, RenderSurface, TableView, TerminalSurface,
    ViewController, ViewKey,
};

pub const VERSION: &str = "0.4.2";

/// Default SPARQL endpoint (local Fuseki dataset)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3030/waste_db/query";

/// Fill levels strictly above this are flagged as warnings
pub const FILL_WARNING_THRESHOLD: u32 = 75;

/// Minimum capacity for the operational truck query
pub const CAPACITY_THRESHOLD: u32 = 5000;
