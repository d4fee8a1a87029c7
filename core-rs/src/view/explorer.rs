//! View renderer
//!
//! Drives catalog -> executor -> formatter -> surface for the four views.
//! The three startup views load as independent tasks with no join barrier:
//! each one is rendered as soon as its own query answers, and a failure in
//! one never touches another. The query view reloads on every trigger.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::{self, JoinSet};
use tracing::{debug, error, info, warn};

use crate::catalog::{QueryTemplate, TemplateId};
use crate::errors::FetchError;
use crate::sparql::QueryExecutor;
use crate::view::hierarchy::ClassHierarchy;
use crate::view::state::{LoadState, Transition, ViewController, ViewKey};
use crate::view::surface::RenderSurface;
use crate::view::table::TableView;

/// Rendered content of one view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
    Hierarchy(ClassHierarchy),
    Table(TableView),
}

impl ViewContent {
    /// Data entries shown: classes for the hierarchy, rows for tables
    pub fn entry_count(&self) -> usize {
        match self {
            ViewContent::Hierarchy(hierarchy) => hierarchy.class_count(),
            ViewContent::Table(table) => table.data_rows().len(),
        }
    }
}

/// How one view load ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOutcome {
    pub view: ViewKey,
    pub result: Result<usize, FetchError>,
}

/// Template feeding a startup view
pub fn startup_template(view: ViewKey) -> Option<TemplateId> {
    match view {
        ViewKey::Hierarchy => Some(TemplateId::Hierarchy),
        ViewKey::Properties => Some(TemplateId::Properties),
        ViewKey::Individuals => Some(TemplateId::Individuals),
        ViewKey::QueryResults => None,
    }
}

/// Execute a template and shape its bindings for `view`
pub async fn fetch_view(
    executor: &dyn QueryExecutor,
    view: ViewKey,
    template: &QueryTemplate,
) -> Result<ViewContent, FetchError> {
    debug!(view = %view, template = %template.id, "Fetching view");
    let bindings = executor.execute(template.query().as_str()).await?;

    Ok(match view {
        ViewKey::Hierarchy => ViewContent::Hierarchy(ClassHierarchy::from_bindings(&bindings)),
        _ => ViewContent::Table(TableView::for_template(template, &bindings)),
    })
}

type StartupTask = (ViewKey, QueryTemplate, Result<ViewContent, FetchError>);

pub struct Explorer<S: RenderSurface> {
    executor: Arc<dyn QueryExecutor>,
    controller: ViewController,
    surface: S,
    startup: JoinSet<StartupTask>,
    in_flight: HashMap<task::Id, ViewKey>,
}

impl<S: RenderSurface> Explorer<S> {
    /// Create an explorer and show the initial (hierarchy) view
    pub fn new(executor: Arc<dyn QueryExecutor>, surface: S) -> Self {
        let mut explorer = Self {
            executor,
            controller: ViewController::new(),
            surface,
            startup: JoinSet::new(),
            in_flight: HashMap::new(),
        };
        let initial = explorer.controller.active();
        explorer.activate(initial);
        explorer
    }

    /// Switch the visible view without loading anything
    pub fn activate(&mut self, view: ViewKey) -> Transition {
        let transition = self.controller.activate(view);
        for (key, visible) in transition.visibility {
            self.surface.set_visibility(key, visible);
        }
        transition
    }

    /// Spawn one task per startup view that has not loaded yet.
    ///
    /// Returns immediately with the dispatched views. Completions are
    /// collected with [`Explorer::next_startup_view`].
    pub fn dispatch_startup_views(&mut self) -> Vec<ViewKey> {
        let mut dispatched = Vec::new();

        for view in ViewKey::STARTUP {
            if !self.controller.needs_load(view) {
                debug!(view = %view, "Already loaded, skipping");
                continue;
            }
            let Some(id) = startup_template(view) else {
                continue;
            };
            let template = QueryTemplate::get(id);

            self.controller.set_load_state(view, LoadState::Loading);
            if view != ViewKey::Hierarchy {
                self.surface.set_headers(view, &template.column_labels());
            }

            let executor = Arc::clone(&self.executor);
            let handle = self.startup.spawn(async move {
                let result = fetch_view(executor.as_ref(), view, &template).await;
                (view, template, result)
            });
            self.in_flight.insert(handle.id(), view);
            dispatched.push(view);
        }
        dispatched
    }

    /// Startup views dispatched but not yet rendered
    pub fn pending_startup_views(&self) -> Vec<ViewKey> {
        ViewKey::STARTUP
            .into_iter()
            .filter(|view| self.in_flight.values().any(|v| v == view))
            .collect()
    }

    /// Wait for the next startup view to finish and render it.
    ///
    /// Returns `None` once nothing is in flight. A task that panicked or was
    /// cancelled is rendered as a failed view.
    pub async fn next_startup_view(&mut self) -> Option<ViewOutcome> {
        loop {
            match self.startup.join_next_with_id().await? {
                Ok((id, (view, template, result))) => {
                    self.in_flight.remove(&id);
                    return Some(self.apply(view, &template, result));
                }
                Err(e) => {
                    let Some(view) = self.in_flight.remove(&e.id()) else {
                        error!(error = %e, "Unknown startup task did not complete");
                        continue;
                    };
                    let Some(id) = startup_template(view) else {
                        continue;
                    };
                    error!(view = %view, error = %e, "Startup view task did not complete");
                    let reason = if e.is_panic() { "view task panicked" } else { "view task cancelled" };
                    let template = QueryTemplate::get(id);
                    return Some(self.apply(view, &template, Err(FetchError::Aborted(reason.to_string()))));
                }
            }
        }
    }

    /// Wait until `view` has rendered.
    ///
    /// Other startup views that finish first are rendered along the way and
    /// their outcomes returned before the requested one. Returns an empty list
    /// if `view` is not in flight.
    pub async fn wait_for_view(&mut self, view: ViewKey) -> Vec<ViewOutcome> {
        let mut outcomes = Vec::new();
        while self.in_flight.values().any(|v| *v == view) {
            let Some(outcome) = self.next_startup_view().await else {
                break;
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Dispatch every startup view and wait for all of them.
    ///
    /// Views render in completion order. Returns one outcome per dispatched view.
    pub async fn load_startup_views(&mut self) -> Vec<ViewOutcome> {
        self.dispatch_startup_views();
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.next_startup_view().await {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Run a competency or operational query into the query view.
    ///
    /// Headers and a loading row are shown first; the loading row is then
    /// replaced by the results or by a failure row.
    pub async fn run_query(&mut self, id: TemplateId) -> Result<usize, FetchError> {
        let view = ViewKey::QueryResults;
        let template = QueryTemplate::get(id);
        info!(template = %id, executor = %self.executor.describe(), "Running query");

        self.controller.set_load_state(view, LoadState::Loading);
        self.surface.set_headers(view, &template.column_labels());
        self.surface.set_body(view, &TableView::loading(template.columns));

        let result = fetch_view(self.executor.as_ref(), view, &template).await;
        self.apply(view, &template, result).result
    }

    fn apply(
        &mut self,
        view: ViewKey,
        template: &QueryTemplate,
        result: Result<ViewContent, FetchError>,
    ) -> ViewOutcome {
        match result {
            Ok(content) => {
                let entries = content.entry_count();
                match &content {
                    ViewContent::Hierarchy(hierarchy) => self.surface.set_hierarchy(hierarchy),
                    ViewContent::Table(table) => self.surface.set_body(view, table),
                }
                if entries == 0 {
                    warn!(view = %view, template = %template.id, "Query returned no bindings");
                }
                self.controller.set_load_state(view, LoadState::Loaded { rows: entries });
                ViewOutcome {
                    view,
                    result: Ok(entries),
                }
            }
            Err(e) => {
                error!(view = %view, template = %template.id, error = %e, "View failed to load");
                let message = format!("Query failed: {}", e);
                match view {
                    ViewKey::Hierarchy => self.surface.set_error(view, &message),
                    _ => self.surface.set_body(view, &TableView::failed(template.columns, &message)),
                }
                self.controller.set_load_state(view, LoadState::Failed { message });
                ViewOutcome {
                    view,
                    result: Err(e),
                }
            }
        }
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
