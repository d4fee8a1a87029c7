//! View-state controller
//!
//! Exactly one of the four views is visible at a time. Visibility is derived
//! from an explicit [`ViewKey`] held by [`ViewController`]; switching views is
//! a pure transition and never loads data.

use std::fmt;
use std::str::FromStr;

use crate::errors::ExplorerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewKey {
    Hierarchy,
    Properties,
    Individuals,
    QueryResults,
}

impl ViewKey {
    pub const ALL: [ViewKey; 4] = [
        ViewKey::Hierarchy,
        ViewKey::Properties,
        ViewKey::Individuals,
        ViewKey::QueryResults,
    ];

    /// Views loaded once at startup
    pub const STARTUP: [ViewKey; 3] = [ViewKey::Hierarchy, ViewKey::Properties, ViewKey::Individuals];

    /// Tab key, as used by the page tabs and the CLI
    pub fn tab_key(self) -> &'static str {
        match self {
            ViewKey::Hierarchy => "classes",
            ViewKey::Properties => "properties",
            ViewKey::Individuals => "individuals",
            ViewKey::QueryResults => "cqs",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKey::Hierarchy => "Classes",
            ViewKey::Properties => "Properties",
            ViewKey::Individuals => "Individuals",
            ViewKey::QueryResults => "Queries",
        }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_key())
    }
}

impl FromStr for ViewKey {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classes" | "hierarchy" => Ok(ViewKey::Hierarchy),
            "properties" => Ok(ViewKey::Properties),
            "individuals" => Ok(ViewKey::Individuals),
            "cqs" | "queries" | "query" => Ok(ViewKey::QueryResults),
            _ => Err(ExplorerError::UnknownView(s.to_string())),
        }
    }
}

/// Result of a view switch: the new active view and every view's visibility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub previous: ViewKey,
    pub active: ViewKey,
    pub visibility: [(ViewKey, bool); 4],
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.previous != self.active
    }

    pub fn is_visible(&self, key: ViewKey) -> bool {
        self.visibility
            .iter()
            .any(|(view, visible)| *view == key && *visible)
    }
}

/// Load progress of one view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded { rows: usize },
    Failed { message: String },
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ViewController {
    active: ViewKey,
    loads: [LoadState; 4],
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    /// Controller with the class hierarchy active and nothing loaded
    pub fn new() -> Self {
        Self {
            active: ViewKey::Hierarchy,
            loads: Default::default(),
        }
    }

    /// Pure transition from the current view to the requested one
    pub fn transition(current: ViewKey, requested: ViewKey) -> Transition {
        Transition {
            previous: current,
            active: requested,
            visibility: ViewKey::ALL.map(|view| (view, view == requested)),
        }
    }

    /// Switch the visible view; load states are left untouched
    pub fn activate(&mut self, requested: ViewKey) -> Transition {
        let transition = Self::transition(self.active, requested);
        self.active = transition.active;
        transition
    }

    pub fn active(&self) -> ViewKey {
        self.active
    }

    pub fn load_state(&self, view: ViewKey) -> &LoadState {
        &self.loads[Self::slot(view)]
    }

    pub fn set_load_state(&mut self, view: ViewKey, state: LoadState) {
        self.loads[Self::slot(view)] = state;
    }

    /// Whether a view still needs its data fetched.
    ///
    /// Startup views load once; the query view reloads on every trigger.
    pub fn needs_load(&self, view: ViewKey) -> bool {
        match view {
            ViewKey::QueryResults => true,
            _ => matches!(self.load_state(view), LoadState::Idle | LoadState::Failed { .. }),
        }
    }

    fn slot(view: ViewKey) -> usize {
        match view {
            ViewKey::Hierarchy => 0,
            ViewKey::Properties => 1,
            ViewKey::Individuals => 2,
            ViewKey::QueryResults => 3,
        }
    }
}
