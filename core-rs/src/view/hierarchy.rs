//! Class hierarchy grouping
//!
//! Groups class bindings by their direct parent. Parents keep first-seen
//! order, and children keep encounter order within their parent.

use std::collections::HashMap;

use crate::sparql::RawBinding;
use crate::uri::local_name;

/// Group key for classes without a (named) parent
pub const TOP_LEVEL_GROUP: &str = "Top Level Concepts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyGroup {
    pub parent: String,
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassHierarchy {
    groups: Vec<HierarchyGroup>,
    index: HashMap<String, usize>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `?class ?parent` bindings
    pub fn from_bindings(bindings: &[RawBinding]) -> Self {
        let mut hierarchy = Self::new();
        for binding in bindings {
            let class = binding.value("class").map(local_name).unwrap_or("");
            let parent = binding.value("parent").map(local_name).unwrap_or("");
            hierarchy.add(parent, class);
        }
        hierarchy
    }

    /// Record one class under its parent; an empty parent means top level
    pub fn add(&mut self, parent: &str, child: &str) {
        let parent = if parent.is_empty() { TOP_LEVEL_GROUP } else { parent };

        let slot = match self.index.get(parent) {
            Some(&slot) => slot,
            None => {
                self.groups.push(HierarchyGroup {
                    parent: parent.to_string(),
                    children: Vec::new(),
                });
                let slot = self.groups.len() - 1;
                self.index.insert(parent.to_string(), slot);
                slot
            }
        };
        self.groups[slot].children.push(child.to_string());
    }

    pub fn groups(&self) -> &[HierarchyGroup] {
        &self.groups
    }

    pub fn children_of(&self, parent: &str) -> Option<&[String]> {
        self.index
            .get(parent)
            .map(|&slot| self.groups[slot].children.as_slice())
    }

    /// Number of class entries across all groups
    pub fn class_count(&self) -> usize {
        self.groups.iter().map(|g| g.children.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
