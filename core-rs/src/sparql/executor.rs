//! Query execution against a SPARQL endpoint
//!
//! One request per call: no retries, no timeout beyond the HTTP client's
//! defaults. A non-success status is a hard [`FetchError::Transport`]; a
//! successful response with an unusable body yields an empty binding list.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Url;
use tracing::{debug, info};

use crate::errors::FetchError;
use crate::sparql::results::{parse_bindings, RawBinding, SPARQL_RESULTS_JSON};

/// Anything that can answer a query with a list of bindings
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &str) -> Result<Vec<RawBinding>, FetchError>;

    /// Short label used in logs
    fn describe(&self) -> String;
}

/// Executor for a remote endpoint speaking the SPARQL HTTP protocol
#[derive(Debug, Clone)]
pub struct HttpQueryExecutor {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpQueryExecutor {
    /// Create an executor for an endpoint URL
    ///
    /// # Example
    ///
    /// ```
    /// use waste_explorer::sparql::HttpQueryExecutor;
    ///
    /// let executor = HttpQueryExecutor::new("http://localhost:3030/waste_db/query");
    /// assert_eq!(executor.endpoint(), "http://localhost:3030/waste_db/query");
    /// ```
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the GET URL with the query text URL-encoded into `query`
    ///
    /// # Example
    ///
    /// ```
    /// use waste_explorer::sparql::HttpQueryExecutor;
    ///
    /// let executor = HttpQueryExecutor::new("http://localhost:3030/waste_db/query");
    /// let url = executor.build_url("SELECT * WHERE { ?s ?p ?o }").unwrap();
    /// assert!(url.as_str().starts_with("http://localhost:3030/waste_db/query?query=SELECT"));
    /// ```
    pub fn build_url(&self, query: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(&self.endpoint, &[("query", query)])
            .map_err(|e| FetchError::Network(format!("Invalid endpoint '{}': {}", self.endpoint, e)))
    }
}

/// Map a response status to the transport contract
pub fn check_status(status: u16) -> Result<(), FetchError> {
    match status {
        200..=299 => Ok(()),
        _ => Err(FetchError::Transport { status }),
    }
}

#[async_trait]
impl QueryExecutor for HttpQueryExecutor {
    async fn execute(&self, query: &str) -> Result<Vec<RawBinding>, FetchError> {
        let url = self.build_url(query)?;
        debug!(endpoint = %self.endpoint, "Dispatching query");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .send()
            .await?;

        let status = response.status().as_u16();
        check_status(status)?;

        let body = response.text().await?;
        let bindings = parse_bindings(&body);
        info!(status, bindings = bindings.len(), "Query answered");
        Ok(bindings)
    }

    fn describe(&self) -> String {
        format!("endpoint {}", self.endpoint)
    }
}
