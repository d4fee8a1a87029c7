//! wastex - waste ontology explorer CLI
//!
//! Renders the explorer views in the terminal against a SPARQL endpoint or a
//! local Turtle file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::Level;

use waste_explorer::catalog::{QueryTemplate, TemplateGroup, TemplateId};
use waste_explorer::{Explorer, ExplorerConfig, TerminalSurface, ViewKey, VERSION};

#[derive(Parser)]
#[command(name = "wastex")]
#[command(version = VERSION)]
#[command(about = "Waste-management ontology explorer", long_about = None)]
struct Cli {
    /// SPARQL endpoint to query (overrides the config file)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// YAML config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Query a local Turtle file instead of an endpoint
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the class, property and individual views, printing each as it lands
    Dashboard,
    /// Load the startup views and print one of them as soon as it has loaded
    Show {
        /// View key (classes, properties, individuals, cqs)
        view: ViewKey,
    },
    /// Run a competency or operational query (cq1, cq2, cq3, op1, op2)
    Query {
        /// Template key
        template: TemplateId,
    },
    /// List the available query templates
    List,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            process::exit(2);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Returns `Ok(false)` when any query failed
async fn run(cli: Cli) -> anyhow::Result<bool> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Commands::List = cli.command {
        print_templates(&mut io::stdout())?;
        return Ok(true);
    }

    let config = ExplorerConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load config")?
        .with_overrides(cli.endpoint, cli.data);
    let executor = config.executor().context("Failed to set up query executor")?;

    let surface = if cli.no_color {
        TerminalSurface::plain()
    } else {
        TerminalSurface::new()
    };
    let mut explorer = Explorer::new(executor, surface);
    let mut out = io::stdout().lock();

    let succeeded = match cli.command {
        Commands::Dashboard => {
            explorer.dispatch_startup_views();
            let mut succeeded = true;
            while let Some(outcome) = explorer.next_startup_view().await {
                explorer.activate(outcome.view);
                explorer.surface().print_visible(&mut out)?;
                out.flush()?;
                succeeded &= outcome.result.is_ok();
            }
            succeeded
        }
        Commands::Show { view } => {
            explorer.dispatch_startup_views();
            let outcomes = explorer.wait_for_view(view).await;
            explorer.activate(view);
            explorer.surface().print_visible(&mut out)?;
            outcomes
                .iter()
                .filter(|o| o.view == view)
                .all(|o| o.result.is_ok())
        }
        Commands::Query { template } => {
            if template.group() == TemplateGroup::Schema {
                anyhow::bail!(
                    "'{}' is a schema view template; use `wastex show` instead",
                    template
                );
            }
            explorer.activate(ViewKey::QueryResults);
            let result = explorer.run_query(template).await;
            explorer.surface().print_visible(&mut out)?;
            result.is_ok()
        }
        Commands::List => true,
    };

    out.flush()?;
    Ok(succeeded)
}

fn print_templates<W: Write>(out: &mut W) -> io::Result<()> {
    for group in [TemplateGroup::Competency, TemplateGroup::Operational] {
        writeln!(out, "{}", group.to_string().bold())?;
        for template in QueryTemplate::all().into_iter().filter(|t| t.id.group() == group) {
            writeln!(out, "  {:<5} {}", template.id.key(), template.title)?;
        }
    }
    Ok(())
}
