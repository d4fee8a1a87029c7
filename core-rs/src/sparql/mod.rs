/**
 * sparql module
 *
 * - query: prefix block and SPARQL text builders
 * - results: SPARQL JSON binding model, lenient parsing
 * - executor: QueryExecutor trait and the HTTP endpoint executor
 * - local: in-process executor over an Oxigraph store
 */

pub mod executor;
pub mod local;
pub mod query;
pub mod results;

pub use executor::{check_status, HttpQueryExecutor, QueryExecutor};
pub use local::LocalStoreExecutor;
pub use query::{prefix_block, SparqlQuery, ONTOLOGY_NAMESPACE};
pub use results::{parse_bindings, RawBinding, RdfTerm, TermKind, SPARQL_RESULTS_JSON};
