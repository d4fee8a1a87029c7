//! Integration tests for the explorer over an in-process store
//!
//! Tests complete view workflows including:
//! - Startup loading of the three schema views
//! - Competency and operational queries into the query view
//! - Empty results, optional columns, and fill warnings
//! - Config-driven executor selection

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use waste_explorer::format::{BadgeCategory, FormattedCell};
use waste_explorer::view::{PlaceholderKind, TableBody, NO_DATA_MESSAGE, TOP_LEVEL_GROUP};
use waste_explorer::{
    Explorer, ExplorerConfig, FetchError, LoadState, LocalStoreExecutor, QueryExecutor,
    RecordingSurface, TemplateId, TerminalSurface, ViewKey,
};

const FIXTURE: &str = r#"
@prefix : <http://www.semanticweb.org/asus/ontologies/2026/1/untitled-ontology-4#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

<http://www.semanticweb.org/asus/ontologies/2026/1/untitled-ontology-4> a owl:Ontology .

:Bin a owl:Class .
:SmartBin a owl:Class ; rdfs:subClassOf :Bin .
:Truck a owl:Class .
:WasteType a owl:Class .
:Facility a owl:Class .
:Route a owl:Class .

:containsWaste a owl:ObjectProperty ; rdfs:domain :Bin .
:deliversTo a owl:ObjectProperty ; rdfs:domain :Truck ; rdfs:range :Facility .
:followsRoute a owl:ObjectProperty .
:currentFillLevel a owl:DatatypeProperty ; rdfs:domain :Bin ; rdfs:range xsd:integer .
:vehicleCapacity a owl:DatatypeProperty ; rdfs:domain :Truck ; rdfs:range xsd:integer .

:Plastic a :WasteType .
:Glass a :WasteType .
:RecyclingCenter a :Facility .
:Route_1A a :Route .

:Bin_001 a owl:NamedIndividual, :SmartBin ;
    :containsWaste :Plastic ;
    :currentFillLevel 80 .

:Bin_002 a :SmartBin ;
    :containsWaste :Glass ;
    :currentFillLevel 40 .

:Truck_A a :Truck ;
    :deliversTo :RecyclingCenter ;
    :followsRoute :Route_1A ;
    :vehicleCapacity 4000 .

:Truck_B a :Truck ;
    :followsRoute :Route_1A ;
    :vehicleCapacity 3500 .
"#;

fn explorer() -> Explorer<RecordingSurface> {
    let executor = LocalStoreExecutor::from_turtle(FIXTURE).unwrap();
    Explorer::new(Arc::new(executor), RecordingSurface::new())
}

fn sorted(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    rows.sort();
    rows
}

#[tokio::test]
async fn test_startup_views_render_from_store() {
    let mut explorer = explorer();
    let outcomes = explorer.load_startup_views().await;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));

    for view in ViewKey::STARTUP {
        assert!(explorer.controller().load_state(view).is_loaded());
    }
    assert_eq!(explorer.controller().load_state(ViewKey::QueryResults), &LoadState::Idle);
}

#[tokio::test]
async fn test_startup_views_stream_one_at_a_time() {
    let mut explorer = explorer();
    let dispatched = explorer.dispatch_startup_views();
    assert_eq!(dispatched.len(), 3);
    assert_eq!(explorer.pending_startup_views().len(), 3);

    let mut landed = Vec::new();
    while let Some(outcome) = explorer.next_startup_view().await {
        assert!(explorer.controller().load_state(outcome.view).is_loaded());
        assert!(!explorer.pending_startup_views().contains(&outcome.view));
        landed.push(outcome.view);
    }
    landed.sort();
    assert_eq!(landed, ViewKey::STARTUP.to_vec());

    // Nothing left to dispatch once every view has loaded
    assert!(explorer.dispatch_startup_views().is_empty());
}

#[tokio::test]
async fn test_hierarchy_groups_by_parent() {
    let mut explorer = explorer();
    explorer.load_startup_views().await;

    let hierarchy = explorer.surface().hierarchy().unwrap();
    assert_eq!(hierarchy.children_of("Bin").unwrap(), &["SmartBin".to_string()]);

    let mut top: Vec<String> = hierarchy.children_of(TOP_LEVEL_GROUP).unwrap().to_vec();
    top.sort();
    assert_eq!(top, vec!["Bin", "Facility", "Route", "Truck", "WasteType"]);
    assert_eq!(hierarchy.class_count(), 6);
}

#[tokio::test]
async fn test_properties_view_badges_and_placeholders() {
    let mut explorer = explorer();
    explorer.load_startup_views().await;

    let table = explorer.surface().body(ViewKey::Properties).unwrap();
    assert_eq!(table.headers(), vec!["Property", "Type", "Domain", "Range"]);

    let rows = sorted(table.text_rows());
    assert_eq!(
        rows,
        vec![
            vec!["containsWaste", "Object", "Bin", "Any"],
            vec!["currentFillLevel", "Data", "Bin", "integer"],
            vec!["deliversTo", "Object", "Truck", "Facility"],
            vec!["followsRoute", "Object", "Any", "Any"],
            vec!["vehicleCapacity", "Data", "Truck", "integer"],
        ]
    );

    let object_badges = table
        .data_rows()
        .iter()
        .filter(|row| {
            matches!(
                row[1],
                FormattedCell::Badge {
                    category: BadgeCategory::Object,
                    ..
                }
            )
        })
        .count();
    assert_eq!(object_badges, 3);
    assert!(table
        .data_rows()
        .iter()
        .any(|row| row[3] == FormattedCell::Placeholder("Any")));
}

#[tokio::test]
async fn test_individuals_exclude_named_individual_marker() {
    let mut explorer = explorer();
    explorer.load_startup_views().await;

    let table = explorer.surface().body(ViewKey::Individuals).unwrap();
    let rows = table.text_rows();

    assert_eq!(rows.len(), 8);
    assert!(rows.contains(&vec!["Bin_001".to_string(), "SmartBin".to_string()]));
    assert!(rows.iter().all(|row| row[1] != "NamedIndividual"));
    assert!(rows.iter().all(|row| row[1] != "Class"));
}

#[tokio::test]
async fn test_cq1_flags_fill_warning() {
    let mut explorer = explorer();
    let rows = explorer.run_query(TemplateId::Cq1).await.unwrap();
    assert_eq!(rows, 1);

    let table = explorer.surface().body(ViewKey::QueryResults).unwrap();
    assert_eq!(table.text_rows(), vec![vec!["Plastic", "80% (Warning)"]]);
    assert!(table.data_rows()[0][1].is_warning());
}

#[tokio::test]
async fn test_cq2_truck_assignment() {
    let mut explorer = explorer();
    explorer.run_query(TemplateId::Cq2).await.unwrap();

    let table = explorer.surface().body(ViewKey::QueryResults).unwrap();
    assert_eq!(table.headers(), vec!["Processing Facility", "Assigned Route"]);
    assert_eq!(table.text_rows(), vec![vec!["RecyclingCenter", "Route_1A"]]);
}

#[tokio::test]
async fn test_cq3_groups_capacity() {
    let mut explorer = explorer();
    explorer.run_query(TemplateId::Cq3).await.unwrap();

    let table = explorer.surface().body(ViewKey::QueryResults).unwrap();
    assert_eq!(
        sorted(table.text_rows()),
        vec![vec!["Truck_A", "4,000"], vec!["Truck_B", "3,500"]]
    );
}

#[tokio::test]
async fn test_op1_only_bins_over_threshold() {
    let mut explorer = explorer();
    explorer.run_query(TemplateId::Op1).await.unwrap();

    let table = explorer.surface().body(ViewKey::QueryResults).unwrap();
    assert_eq!(table.text_rows(), vec![vec!["Bin_001", "80% (Warning)"]]);
}

#[tokio::test]
async fn test_op2_no_match_renders_single_row() {
    let mut explorer = explorer();
    let rows = explorer.run_query(TemplateId::Op2).await.unwrap();
    assert_eq!(rows, 0);

    let table = explorer.surface().body(ViewKey::QueryResults).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(
        table.body,
        TableBody::Placeholder {
            kind: PlaceholderKind::Empty,
            message: NO_DATA_MESSAGE.to_string(),
            colspan: 2,
        }
    );
}

#[tokio::test]
async fn test_repeated_query_replaces_previous_rows() {
    let mut explorer = explorer();
    explorer.run_query(TemplateId::Cq3).await.unwrap();
    explorer.run_query(TemplateId::Cq1).await.unwrap();

    let table = explorer.surface().body(ViewKey::QueryResults).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.headers(), vec!["Waste Type", "Fill Level (%)"]);
}

#[tokio::test]
async fn test_rendering_is_idempotent() {
    let mut first = explorer();
    let mut second = explorer();
    first.run_query(TemplateId::Cq1).await.unwrap();
    second.run_query(TemplateId::Cq1).await.unwrap();
    second.run_query(TemplateId::Cq1).await.unwrap();

    assert_eq!(
        first.surface().body(ViewKey::QueryResults),
        second.surface().body(ViewKey::QueryResults)
    );
}

#[tokio::test]
async fn test_view_switch_does_not_reload() {
    let mut explorer = explorer();
    explorer.load_startup_views().await;
    let before = explorer.surface().events().len();

    let transition = explorer.activate(ViewKey::Individuals);
    assert!(transition.changed());
    assert!(explorer.surface().is_visible(ViewKey::Individuals));
    assert!(!explorer.surface().is_visible(ViewKey::Hierarchy));

    // Only the four visibility updates were recorded
    assert_eq!(explorer.surface().events().len(), before + 4);
    assert!(explorer.load_startup_views().await.is_empty());
}

#[tokio::test]
async fn test_invalid_query_is_reported_as_store_failure() {
    let executor = LocalStoreExecutor::from_turtle("").unwrap();
    let result = executor.execute("SELECT WHERE {").await;
    assert!(matches!(result, Err(FetchError::Store(_))));
}

#[tokio::test]
async fn test_config_selects_local_store() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("waste.ttl"), FIXTURE).unwrap();
    let config_path = temp_dir.path().join("explorer.yaml");
    fs::write(&config_path, "dataFile: waste.ttl\n").unwrap();

    let config = ExplorerConfig::load(&config_path).unwrap();
    let executor = config.executor().unwrap();
    let mut explorer = Explorer::new(executor, TerminalSurface::plain());

    explorer.activate(ViewKey::QueryResults);
    explorer.run_query(TemplateId::Cq1).await.unwrap();

    let lines = explorer.surface().render_view(ViewKey::QueryResults);
    assert!(lines.iter().any(|l| l.contains("Plastic") && l.contains("80% (Warning)")));
}
