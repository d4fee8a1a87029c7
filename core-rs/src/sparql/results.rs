//! SPARQL JSON results model
//!
//! Mirrors the `application/sparql-results+json` document shape:
//!
//! ```json
//! { "head": { "vars": ["waste", "fill"] },
//!   "results": { "bindings": [
//!     { "waste": { "type": "uri", "value": "http://...#Plastic" },
//!       "fill":  { "type": "literal", "value": "80",
//!                  "datatype": "http://www.w3.org/2001/XMLSchema#integer" } } ] } }
//! ```
//!
//! Parsing is lenient: a document without the `results.bindings` structure,
//! or one that is not JSON at all, yields no bindings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Media type negotiated with the endpoint
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Term kind reported by the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Iri,
    Literal,
    BlankNode,
    Unknown,
}

/// One bound value: value string plus optional type metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdfTerm {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub term_type: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl RdfTerm {
    pub fn iri(value: impl Into<String>) -> Self {
        Self {
            term_type: Some("uri".to_string()),
            value: value.into(),
            datatype: None,
            lang: None,
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            term_type: Some("literal".to_string()),
            value: value.into(),
            datatype: None,
            lang: None,
        }
    }

    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            term_type: Some("literal".to_string()),
            value: value.into(),
            datatype: Some(datatype.into()),
            lang: None,
        }
    }

    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            term_type: Some("bnode".to_string()),
            value: id.into(),
            datatype: None,
            lang: None,
        }
    }

    pub fn kind(&self) -> TermKind {
        match self.term_type.as_deref() {
            Some("uri") | Some("iri") => TermKind::Iri,
            Some("literal") | Some("typed-literal") => TermKind::Literal,
            Some("bnode") => TermKind::BlankNode,
            _ => TermKind::Unknown,
        }
    }
}

/// One result row: variable name to bound term
///
/// Unbound variables are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBinding {
    terms: HashMap<String, RdfTerm>,
}

impl RawBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and the local store
    pub fn with(mut self, variable: impl Into<String>, term: RdfTerm) -> Self {
        self.insert(variable, term);
        self
    }

    pub fn insert(&mut self, variable: impl Into<String>, term: RdfTerm) {
        self.terms.insert(variable.into(), term);
    }

    pub fn get(&self, variable: &str) -> Option<&RdfTerm> {
        self.terms.get(variable)
    }

    /// Value string of a bound variable
    pub fn value(&self, variable: &str) -> Option<&str> {
        self.terms.get(variable).map(|t| t.value.as_str())
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct ResultsDocument {
    #[serde(default)]
    results: Option<ResultsSection>,
}

#[derive(Debug, Deserialize)]
struct ResultsSection {
    #[serde(default)]
    bindings: Option<Vec<RawBinding>>,
}

/// Extract the binding list from a results document body.
///
/// Missing structure and invalid JSON both degrade to an empty list.
pub fn parse_bindings(body: &str) -> Vec<RawBinding> {
    let document: ResultsDocument = match serde_json::from_str(body) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "Results document is not valid SPARQL JSON, treating as empty");
            return Vec::new();
        }
    };

    match document.results.and_then(|r| r.bindings) {
        Some(bindings) => bindings,
        None => {
            warn!("Results document has no results.bindings, treating as empty");
            Vec::new()
        }
    }
}
