//! Command-line front end for the PE editor core.
//!
//! The interactive canvas reports its actions as a JSON array of editor
//! events; this binary replays such a recording, exports the resulting
//! circuit, and turns exported PE descriptions into Verilog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use pe_creator::core::routing;
use pe_creator::core::session::{parse_events, EditorEvent, EditorSession, EventOutcome};
use pe_creator::export::{write_verilog, PeSummary};
use pe_creator::{EditorConfig, PeDocument, Position};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pe-creator")]
#[command(about = "Lay out processing-element circuits and export them", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory exports are written to (overrides the config file)
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded list of editor events
    Replay {
        /// JSON file holding an array of events
        events: PathBuf,
    },

    /// Replay placements and selections, then export the circuit
    Export {
        /// JSON file holding an array of events
        events: PathBuf,

        /// Circuit name; blank falls back to the configured default
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Generate a Verilog module from an exported PE description
    Verilog {
        /// PE JSON file
        pe: PathBuf,
    },

    /// Print the connector path between two anchor points
    #[command(allow_negative_numbers = true)]
    Route { x1: f64, y1: f64, x2: f64, y2: f64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let default_level = config.log_level.clone().unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Commands::Replay { events } => {
            let mut session = EditorSession::new(config);
            for outcome in session.replay(read_events(&events)?)? {
                report(&outcome);
            }
        }
        Commands::Export { events, name } => {
            let mut session = EditorSession::new(config);
            session.replay(read_events(&events)?)?;
            let outcome = session.apply(EditorEvent::Export { name })?;
            report(&outcome);
        }
        Commands::Verilog { pe } => {
            let document = PeDocument::read(&pe)?;
            print!("{}", PeSummary(&document));
            let path = write_verilog(&document, &config.output_dir)?;
            println!("Wrote {}", path.display());
        }
        Commands::Route { x1, y1, x2, y2 } => {
            let connector = routing::route(Position::new(x1, y1), Position::new(x2, y2));
            println!("path:");
            for point in connector.path {
                println!("  ({:.2}, {:.2})", point.x, point.y);
            }
            println!("arrow:");
            for point in connector.arrow {
                println!("  ({:.2}, {:.2})", point.x, point.y);
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<EditorConfig> {
    let mut config = match &cli.config {
        Some(path) => EditorConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => EditorConfig::default(),
    };
    if let Some(dir) = &cli.out_dir {
        config = config.with_output_dir(dir.clone());
    }
    Ok(config)
}

fn read_events(path: &Path) -> Result<Vec<EditorEvent>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading events {}", path.display()))?;
    Ok(parse_events(&text)?)
}

fn report(outcome: &EventOutcome) {
    match outcome {
        EventOutcome::Placed(id) => info!("placed {}", id),
        EventOutcome::FirstSelected(id) => info!("selected {}", id),
        EventOutcome::Connected(connection) => info!("connected {}", connection),
        EventOutcome::Exported(path) => println!("Exported {}", path.display()),
        EventOutcome::Closed(path) => println!("Session log {}", path.display()),
        EventOutcome::Ignored => {}
    }
}
