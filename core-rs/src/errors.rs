//! Error types for the waste explorer

use thiserror::Error;

/// Failure of a single query execution.
///
/// Returned by every [`crate::sparql::QueryExecutor`]. A malformed results
/// document is not a `FetchError`: it degrades to an empty binding list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP {status}")]
    Transport { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Store error: {0}")]
    Store(String),

    /// The task running the query panicked or was cancelled
    #[error("Task aborted: {0}")]
    Aborted(String),
}

impl FetchError {
    /// Status code carried by a transport failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Transport { status: status.as_u16() },
            None => FetchError::Network(err.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Query failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("Unknown query template: {0}")]
    UnknownTemplate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
