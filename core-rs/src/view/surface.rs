//! Render targets
//!
//! The renderer only ever replaces whole regions ("set contents"); it never
//! appends. Each view owns its own region.

use std::collections::HashMap;

use crate::view::hierarchy::ClassHierarchy;
use crate::view::state::ViewKey;
use crate::view::table::TableView;

pub trait RenderSurface: Send {
    fn set_visibility(&mut self, view: ViewKey, visible: bool);

    /// Replace the header row of a tabular view
    fn set_headers(&mut self, view: ViewKey, headers: &[&'static str]);

    /// Replace the body of a tabular view
    fn set_body(&mut self, view: ViewKey, table: &TableView);

    /// Replace the grouped class cards
    fn set_hierarchy(&mut self, hierarchy: &ClassHierarchy);

    /// Show a failure for a view that has no table body
    fn set_error(&mut self, view: ViewKey, message: &str);
}

/// Every call made on a [`RecordingSurface`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Visibility(ViewKey, bool),
    Headers(ViewKey, Vec<&'static str>),
    Body(ViewKey, TableView),
    Hierarchy(ClassHierarchy),
    Error(ViewKey, String),
}

/// In-memory surface holding the current contents of every region
#[derive(Debug, Default)]
pub struct RecordingSurface {
    visibility: HashMap<ViewKey, bool>,
    headers: HashMap<ViewKey, Vec<&'static str>>,
    bodies: HashMap<ViewKey, TableView>,
    hierarchy: Option<ClassHierarchy>,
    errors: HashMap<ViewKey, String>,
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, view: ViewKey) -> bool {
        self.visibility.get(&view).copied().unwrap_or(false)
    }

    pub fn headers(&self, view: ViewKey) -> Option<&[&'static str]> {
        self.headers.get(&view).map(Vec::as_slice)
    }

    pub fn body(&self, view: ViewKey) -> Option<&TableView> {
        self.bodies.get(&view)
    }

    pub fn hierarchy(&self) -> Option<&ClassHierarchy> {
        self.hierarchy.as_ref()
    }

    pub fn error(&self, view: ViewKey) -> Option<&str> {
        self.errors.get(&view).map(String::as_str)
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }
}

impl RenderSurface for RecordingSurface {
    fn set_visibility(&mut self, view: ViewKey, visible: bool) {
        self.visibility.insert(view, visible);
        self.events.push(SurfaceEvent::Visibility(view, visible));
    }

    fn set_headers(&mut self, view: ViewKey, headers: &[&'static str]) {
        self.headers.insert(view, headers.to_vec());
        self.events.push(SurfaceEvent::Headers(view, headers.to_vec()));
    }

    fn set_body(&mut self, view: ViewKey, table: &TableView) {
        self.errors.remove(&view);
        self.bodies.insert(view, table.clone());
        self.events.push(SurfaceEvent::Body(view, table.clone()));
    }

    fn set_hierarchy(&mut self, hierarchy: &ClassHierarchy) {
        self.errors.remove(&ViewKey::Hierarchy);
        self.hierarchy = Some(hierarchy.clone());
        self.events.push(SurfaceEvent::Hierarchy(hierarchy.clone()));
    }

    fn set_error(&mut self, view: ViewKey, message: &str) {
        self.errors.insert(view, message.to_string());
        self.events.push(SurfaceEvent::Error(view, message.to_string()));
    }
}
