//! Query catalog
//!
//! The fixed set of query templates the explorer can run: three schema
//! queries loaded at startup, three competency questions with a hardcoded
//! subject, and two threshold-filtered operational queries.

use std::fmt;
use std::str::FromStr;

use crate::errors::ExplorerError;
use crate::format::Column;
use crate::sparql::SparqlQuery;
use crate::{CAPACITY_THRESHOLD, FILL_WARNING_THRESHOLD};

/// Subject of the bin competency question
pub const CQ_BIN: &str = "Bin_001";
/// Subject of the truck competency question
pub const CQ_TRUCK: &str = "Truck_A";
/// Subject of the route competency question
pub const CQ_ROUTE: &str = "Route_1A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    Hierarchy,
    Properties,
    Individuals,
    Cq1,
    Cq2,
    Cq3,
    Op1,
    Op2,
}

/// Which selector a template is offered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateGroup {
    Schema,
    Competency,
    Operational,
}

impl TemplateId {
    pub const ALL: [TemplateId; 8] = [
        TemplateId::Hierarchy,
        TemplateId::Properties,
        TemplateId::Individuals,
        TemplateId::Cq1,
        TemplateId::Cq2,
        TemplateId::Cq3,
        TemplateId::Op1,
        TemplateId::Op2,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TemplateId::Hierarchy => "hierarchy",
            TemplateId::Properties => "properties",
            TemplateId::Individuals => "individuals",
            TemplateId::Cq1 => "cq1",
            TemplateId::Cq2 => "cq2",
            TemplateId::Cq3 => "cq3",
            TemplateId::Op1 => "op1",
            TemplateId::Op2 => "op2",
        }
    }

    pub fn group(self) -> TemplateGroup {
        match self {
            TemplateId::Hierarchy | TemplateId::Properties | TemplateId::Individuals => {
                TemplateGroup::Schema
            }
            TemplateId::Cq1 | TemplateId::Cq2 | TemplateId::Cq3 => TemplateGroup::Competency,
            TemplateId::Op1 | TemplateId::Op2 => TemplateGroup::Operational,
        }
    }

    /// Templates a user can pick from the query selectors
    pub fn selectable() -> impl Iterator<Item = TemplateId> {
        Self::ALL.into_iter().filter(|id| id.group() != TemplateGroup::Schema)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TemplateId {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExplorerError::UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for TemplateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemplateGroup::Schema => "schema",
            TemplateGroup::Competency => "competency",
            TemplateGroup::Operational => "operational",
        })
    }
}

/// A named query with the columns it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    pub id: TemplateId,
    pub title: &'static str,
    pub columns: &'static [Column],
}

const HIERARCHY_COLUMNS: &[Column] = &[
    Column::new("Class", "class"),
    Column::new("Parent", "parent"),
];

const PROPERTY_COLUMNS: &[Column] = &[
    Column::new("Property", "prop").emphasized(),
    Column::new("Type", "type").badge(),
    Column::new("Domain", "domain").optional("Any"),
    Column::new("Range", "range").optional("Any"),
];

const INDIVIDUAL_COLUMNS: &[Column] = &[
    Column::new("Individual", "ind").emphasized(),
    Column::new("Class", "class").tag(),
];

const CQ1_COLUMNS: &[Column] = &[
    Column::new("Waste Type", "waste"),
    Column::new("Fill Level (%)", "fill"),
];

const CQ2_COLUMNS: &[Column] = &[
    Column::new("Processing Facility", "facility"),
    Column::new("Assigned Route", "route"),
];

const CQ3_COLUMNS: &[Column] = &[
    Column::new("Collection Truck", "truck"),
    Column::new("Max Capacity", "cap"),
];

const OP1_COLUMNS: &[Column] = &[
    Column::new("Bin ID", "bin"),
    Column::new("Current Fill Level (%)", "fill"),
];

const OP2_COLUMNS: &[Column] = &[
    Column::new("Truck ID", "truck"),
    Column::new("Capacity", "cap"),
];

impl QueryTemplate {
    /// Look up the template for an id
    pub fn get(id: TemplateId) -> Self {
        let (title, columns) = match id {
            TemplateId::Hierarchy => ("Class hierarchy", HIERARCHY_COLUMNS),
            TemplateId::Properties => ("Object and data properties", PROPERTY_COLUMNS),
            TemplateId::Individuals => ("Typed individuals", INDIVIDUAL_COLUMNS),
            TemplateId::Cq1 => ("What waste does Bin_001 hold, and how full is it?", CQ1_COLUMNS),
            TemplateId::Cq2 => ("Where does Truck_A deliver, and on which route?", CQ2_COLUMNS),
            TemplateId::Cq3 => ("Which trucks follow Route_1A, and their capacity?", CQ3_COLUMNS),
            TemplateId::Op1 => ("Bins above the fill warning threshold", OP1_COLUMNS),
            TemplateId::Op2 => ("Trucks with large capacity", OP2_COLUMNS),
        };
        Self { id, title, columns }
    }

    /// Parse a template key and look it up
    pub fn by_key(key: &str) -> Result<Self, ExplorerError> {
        key.parse().map(Self::get)
    }

    /// Every template, in catalog order
    pub fn all() -> Vec<Self> {
        TemplateId::ALL.into_iter().map(Self::get).collect()
    }

    /// Full query text, prefixes included
    pub fn query(&self) -> SparqlQuery {
        match self.id {
            TemplateId::Hierarchy => SparqlQuery::class_hierarchy(),
            TemplateId::Properties => SparqlQuery::properties(),
            TemplateId::Individuals => SparqlQuery::individuals(),
            TemplateId::Cq1 => SparqlQuery::bin_contents(CQ_BIN),
            TemplateId::Cq2 => SparqlQuery::truck_assignment(CQ_TRUCK),
            TemplateId::Cq3 => SparqlQuery::trucks_on_route(CQ_ROUTE),
            TemplateId::Op1 => SparqlQuery::bins_over_fill(FILL_WARNING_THRESHOLD),
            TemplateId::Op2 => SparqlQuery::trucks_with_capacity(CAPACITY_THRESHOLD),
        }
    }

    pub fn column_labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }
}
