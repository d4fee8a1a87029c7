/**
 * config.rs
 * Explorer settings file (YAML format)
 *
 * Format:
 * ```yaml
 * endpoint: http://localhost:3030/waste_db/query
 * dataFile: ontology/waste.ttl   # optional, queries a local store instead
 * ```
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::errors::{ExplorerError, Result};
use crate::sparql::{HttpQueryExecutor, LocalStoreExecutor, QueryExecutor};
use crate::DEFAULT_ENDPOINT;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerConfig {
    /// SPARQL query endpoint (HTTP GET)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Turtle file loaded into an in-process store; takes precedence over `endpoint`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            data_file: None,
        }
    }
}

impl ExplorerConfig {
    /// Load settings from a YAML file.
    ///
    /// A relative `dataFile` is resolved against the directory of the file.
    /// The endpoint is only validated when no `dataFile` is set.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ExplorerError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let mut config: ExplorerConfig = serde_yaml::from_str(&content)?;

        if let (Some(data_file), Some(dir)) = (&config.data_file, path.parent()) {
            if data_file.is_relative() {
                config.data_file = Some(dir.join(data_file));
            }
        }

        if config.data_file.is_none() {
            config.validate()?;
        }
        debug!(path = %path.display(), endpoint = %config.endpoint, "Loaded config");
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values.
    ///
    /// An explicit endpoint without an explicit data file drops any
    /// `dataFile` from the settings file, so the endpoint is queried.
    pub fn with_overrides(mut self, endpoint: Option<String>, data_file: Option<PathBuf>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
            self.data_file = None;
        }
        if data_file.is_some() {
            self.data_file = data_file;
        }
        self
    }

    /// Ensures the endpoint is a non-empty http(s) URL
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ExplorerError::Config("endpoint cannot be empty".to_string()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ExplorerError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                endpoint
            )));
        }
        Ok(())
    }

    /// Build the executor these settings describe
    pub fn executor(&self) -> Result<Arc<dyn QueryExecutor>> {
        match &self.data_file {
            Some(path) => Ok(Arc::new(LocalStoreExecutor::from_file(path)?)),
            None => {
                self.validate()?;
                Ok(Arc::new(HttpQueryExecutor::new(self.endpoint.trim())))
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), yaml)?;
        Ok(())
    }
}
