/**
 * view module
 *
 * - state: active view and per-view load state
 * - hierarchy: class cards grouped by parent
 * - table: tabular view bodies and placeholder rows
 * - surface: render target trait and an in-memory surface
 * - terminal: text surface for the command line
 * - explorer: wires queries, formatting and surfaces together
 */

pub mod explorer;
pub mod hierarchy;
pub mod state;
pub mod surface;
pub mod table;
pub mod terminal;

pub use explorer::{fetch_view, startup_template, Explorer, ViewContent, ViewOutcome};
pub use hierarchy::{ClassHierarchy, HierarchyGroup, TOP_LEVEL_GROUP};
pub use state::{LoadState, Transition, ViewController, ViewKey};
pub use surface::{RecordingSurface, RenderSurface, SurfaceEvent};
pub use table::{PlaceholderKind, TableBody, TableView, LOADING_MESSAGE, NO_DATA_MESSAGE};
pub use terminal::TerminalSurface;
