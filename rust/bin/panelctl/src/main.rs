//! `panelctl` — keeps the panel ledgers of a furniture project up to date.
//!
//! Reads a scene snapshot exported by the modelling tool, merges the selected
//! panels into `<project>_ldsp.xlsx` / `<project>_hdf.xlsx`, and manages the
//! edge-banding marks stored in `<project>_edging.json`.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use panel_ledger::{EdgeSide, LedgerConfig};

/// Panel ledger CLI.
#[derive(Parser, Debug)]
#[command(name = "panelctl", about = "Furniture panel ledger tool", version)]
struct Cli {
    /// Project file the ledgers belong to (e.g. kitchen.blend).
    #[arg(long = "project", short = 'p', global = true)]
    project: Option<PathBuf>,

    /// Particle-board ledger (default: <project>_ldsp.xlsx).
    #[arg(long = "ldsp", global = true)]
    ldsp: Option<PathBuf>,

    /// Fiberboard ledger (default: <project>_hdf.xlsx).
    #[arg(long = "hdf", global = true)]
    hdf: Option<PathBuf>,

    /// Edge-banding marks (default: <project>_edging.json).
    #[arg(long = "edging", global = true)]
    edging: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge the selected panels into the ledgers.
    Save {
        /// Scene snapshot JSON with the selected objects.
        #[arg(long)]
        scene: PathBuf,
    },

    /// Edge-banding marks.
    Edging {
        #[command(subcommand)]
        action: EdgingAction,
    },

    /// Print the rows of a ledger.
    Show {
        /// Show the fiberboard ledger instead of the particle-board one.
        #[arg(long = "hdf-ledger")]
        hdf_ledger: bool,
    },
}

#[derive(Subcommand, Debug)]
enum EdgingAction {
    /// Mark one side on every banding candidate in the selection.
    Set {
        #[arg(long)]
        side: EdgeSide,
        #[arg(long)]
        scene: PathBuf,
    },
    /// Clear one side on every banding candidate in the selection.
    Unset {
        #[arg(long)]
        side: EdgeSide,
        #[arg(long)]
        scene: PathBuf,
    },
    /// List the selection with sizes and current marks.
    List {
        #[arg(long)]
        scene: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = LedgerConfig {
        project: cli.project,
        ldsp_path: cli.ldsp,
        hdf_path: cli.hdf,
        edging_path: cli.edging,
    };

    match cli.command {
        Commands::Save { scene } => {
            commands::save::run(&config, &scene)?;
        }

        Commands::Edging { action } => match action {
            EdgingAction::Set { side, scene } => {
                commands::edging::mark(&config, &scene, side, true)?;
            }
            EdgingAction::Unset { side, scene } => {
                commands::edging::mark(&config, &scene, side, false)?;
            }
            EdgingAction::List { scene } => {
                commands::edging::list(&config, &scene)?;
            }
        },

        Commands::Show { hdf_ledger } => {
            commands::show::run(&config, hdf_ledger)?;
        }
    }

    Ok(())
}
