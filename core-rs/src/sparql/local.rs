/**
 * local.rs
 * In-process query execution over an Oxigraph store
 *
 * Answers the same query text as the remote endpoint, from Turtle data
 * loaded into memory. Solutions are mapped into the SPARQL JSON binding
 * shape so downstream formatting cannot tell the two executors apart.
 */

use async_trait::async_trait;
use oxigraph::io::RdfFormat;
use oxigraph::model::Term;
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::errors::{ExplorerError, FetchError};
use crate::sparql::executor::QueryExecutor;
use crate::sparql::results::{RawBinding, RdfTerm};

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

pub struct LocalStoreExecutor {
    store: Store,
    source: String,
}

impl LocalStoreExecutor {
    /// Load Turtle text into a fresh in-memory store
    pub fn from_turtle(data: &str) -> Result<Self, FetchError> {
        let store = Store::new().map_err(|e| FetchError::Store(e.to_string()))?;
        store
            .load_from_reader(RdfFormat::Turtle, data.as_bytes())
            .map_err(|e| FetchError::Store(e.to_string()))?;

        Ok(Self {
            store,
            source: "inline data".to_string(),
        })
    }

    /// Load a Turtle file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExplorerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut executor = Self::from_turtle(&content)?;
        executor.source = path.display().to_string();
        info!(source = %executor.source, "Loaded local ontology data");
        Ok(executor)
    }

    fn run(&self, query: &str) -> Result<Vec<RawBinding>, FetchError> {
        let results = self
            .store
            .query(query)
            .map_err(|e| FetchError::Store(e.to_string()))?;

        match results {
            QueryResults::Solutions(solutions) => {
                let mut rows = Vec::new();

                for solution in solutions {
                    let solution = solution.map_err(|e| FetchError::Store(e.to_string()))?;
                    let mut row = RawBinding::new();

                    for (var, term) in solution.iter() {
                        if let Some(term) = to_rdf_term(term) {
                            row.insert(var.as_str(), term);
                        }
                    }

                    rows.push(row);
                }

                Ok(rows)
            }
            QueryResults::Boolean(_) | QueryResults::Graph(_) => {
                warn!("Local store answered a non-SELECT query, treating as empty");
                Ok(Vec::new())
            }
        }
    }
}

fn to_rdf_term(term: &Term) -> Option<RdfTerm> {
    match term {
        Term::NamedNode(node) => Some(RdfTerm::iri(node.as_str())),
        Term::BlankNode(node) => Some(RdfTerm::blank(node.as_str())),
        Term::Literal(literal) => {
            let mut rdf_term = RdfTerm::literal(literal.value());
            if let Some(lang) = literal.language() {
                rdf_term.lang = Some(lang.to_string());
            } else {
                let datatype = literal.datatype().as_str();
                if datatype != XSD_STRING && datatype != RDF_LANG_STRING {
                    rdf_term.datatype = Some(datatype.to_string());
                }
            }
            Some(rdf_term)
        }
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

#[async_trait]
impl QueryExecutor for LocalStoreExecutor {
    async fn execute(&self, query: &str) -> Result<Vec<RawBinding>, FetchError> {
        debug!(source = %self.source, "Evaluating query locally");
        let rows = self.run(query)?;
        info!(bindings = rows.len(), "Query answered");
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("local store ({})", self.source)
    }
}
