/// Example: Run the explorer views over a local Turtle file
///
/// Loads the ontology into an in-process store and prints the three schema
/// views, then every competency and operational query.
///
/// Usage:
///   cargo run --example query_ontology waste.ttl
///   cargo run --example query_ontology waste.ttl cq1

use std::env;
use std::io;
use std::sync::Arc;

use waste_explorer::{Explorer, LocalStoreExecutor, TemplateId, TerminalSurface, ViewKey};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example query_ontology <file.ttl> [template]");
        std::process::exit(1);
    }

    let executor = LocalStoreExecutor::from_file(&args[1])?;
    let mut explorer = Explorer::new(Arc::new(executor), TerminalSurface::new());
    let mut out = io::stdout();

    let mut failures = 0usize;

    let templates: Vec<TemplateId> = match args.get(2) {
        Some(key) => vec![key.parse()?],
        None => {
            explorer.dispatch_startup_views();
            while let Some(outcome) = explorer.next_startup_view().await {
                if outcome.result.is_err() {
                    failures += 1;
                }
                explorer.activate(outcome.view);
                explorer.surface().print_visible(&mut out)?;
            }
            TemplateId::selectable().collect()
        }
    };

    explorer.activate(ViewKey::QueryResults);
    for id in templates {
        println!("── {} ──", id);
        if let Err(e) = explorer.run_query(id).await {
            eprintln!("{} failed: {}", id, e);
            failures += 1;
        }
        explorer.surface().print_visible(&mut out)?;
    }

    if failures > 0 {
        eprintln!("{} quer{} failed", failures, if failures == 1 { "y" } else { "ies" });
        std::process::exit(1);
    }

    Ok(())
}
