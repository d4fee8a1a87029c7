/**
 * query.rs
 * SPARQL query text for the waste ontology views
 */

/// Base namespace of the waste-management ontology
pub const ONTOLOGY_NAMESPACE: &str =
    "http://www.semanticweb.org/asus/ontologies/2026/1/untitled-ontology-4#";

pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL_NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

/// Prefix declarations prepended to every query
pub fn prefix_block() -> String {
    format!(
        "PREFIX : <{}> PREFIX rdfs: <{}> PREFIX owl: <{}> PREFIX rdf: <{}>",
        ONTOLOGY_NAMESPACE, RDFS_NAMESPACE, OWL_NAMESPACE, RDF_NAMESPACE
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlQuery {
    query: String,
}

impl SparqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Prepend the ontology prefix block to a query body
    pub fn with_prefixes(body: &str) -> Self {
        Self::new(format!("{}\n{}", prefix_block(), body))
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn into_string(self) -> String {
        self.query
    }

    // =============================================================================
    // Schema queries (loaded at startup)
    // =============================================================================

    /// Every named class with its optional direct named parent
    pub fn class_hierarchy() -> Self {
        Self::with_prefixes(
            "SELECT ?class ?parent WHERE { ?class a owl:Class . \
             OPTIONAL { ?class rdfs:subClassOf ?parent . FILTER(!isBlank(?parent)) } \
             FILTER(!isBlank(?class)) }",
        )
    }

    /// Object and datatype properties, tagged with their kind, plus optional domain/range
    pub fn properties() -> Self {
        Self::with_prefixes(
            "SELECT ?prop ?type ?domain ?range WHERE { \
             { ?prop a owl:ObjectProperty . BIND('Object' AS ?type) } \
             UNION { ?prop a owl:DatatypeProperty . BIND('Data' AS ?type) } \
             OPTIONAL { ?prop rdfs:domain ?domain } \
             OPTIONAL { ?prop rdfs:range ?range } \
             FILTER(!isBlank(?prop)) }",
        )
    }

    /// Typed individuals, excluding schema-level declarations
    pub fn individuals() -> Self {
        Self::with_prefixes(&format!(
            "SELECT ?ind ?class WHERE {{ ?ind rdf:type ?class . \
             FILTER(?class != <{owl}NamedIndividual> && ?class != owl:Class \
             && ?class != owl:ObjectProperty && ?class != owl:DatatypeProperty \
             && ?class != owl:Ontology) }}",
            owl = OWL_NAMESPACE
        ))
    }

    // =============================================================================
    // Competency questions (fixed subject)
    // =============================================================================

    /// Waste type and fill level held by one bin
    pub fn bin_contents(bin: &str) -> Self {
        Self::with_prefixes(&format!(
            "SELECT ?waste ?fill WHERE {{ :{bin} :containsWaste ?waste . :{bin} :currentFillLevel ?fill . }}",
            bin = bin
        ))
    }

    /// Processing facility and route assigned to one truck
    pub fn truck_assignment(truck: &str) -> Self {
        Self::with_prefixes(&format!(
            "SELECT ?facility ?route WHERE {{ :{truck} :deliversTo ?facility . :{truck} :followsRoute ?route . }}",
            truck = truck
        ))
    }

    /// Trucks following one route, with their capacity
    pub fn trucks_on_route(route: &str) -> Self {
        Self::with_prefixes(&format!(
            "SELECT ?truck ?cap WHERE {{ ?truck :followsRoute :{} . ?truck :vehicleCapacity ?cap . }}",
            route
        ))
    }

    // =============================================================================
    // Operational queries (threshold filters)
    // =============================================================================

    /// Bins whose fill level is strictly above `threshold`
    pub fn bins_over_fill(threshold: u32) -> Self {
        Self::with_prefixes(&format!(
            "SELECT ?bin ?fill WHERE {{ ?bin :currentFillLevel ?fill . FILTER(?fill > {}) }}",
            threshold
        ))
    }

    /// Trucks whose capacity is at least `minimum`
    pub fn trucks_with_capacity(minimum: u32) -> Self {
        Self::with_prefixes(&format!(
            "SELECT ?truck ?cap WHERE {{ ?truck :vehicleCapacity ?cap . FILTER(?cap >= {}) }}",
            minimum
        ))
    }
}

impl std::fmt::Display for SparqlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query)
    }
}
