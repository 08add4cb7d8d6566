//! pokedex - Pokémon data service and PokeAPI population runs.

use anyhow::{Context, Result};
use clap::Parser;
use pokedex_store::{DocumentStore, FsStore};
use pokedex_types::Dataset;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Pokémon data service backed by a document store", long_about = None)]
#[command(version)]
struct Cli {
    /// Populate the Pokémon collection from the Johto Pokédex, then exit
    #[arg(long, conflicts_with = "moves")]
    pokemon: bool,

    /// Populate the moves collection from generations 1-4, then exit
    #[arg(long)]
    moves: bool,

    /// Project whose document store is used
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project: String,

    /// Port the read API listens on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Credential file for the document store
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS", default_value = "service-account.json")]
    credentials: PathBuf,

    /// Directory holding the document store. Defaults to the platform data directory.
    #[arg(long, env = "POKEDEX_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Delay between PokeAPI requests during population, in milliseconds
    #[arg(long, env = "POKEDEX_DELAY_MS", default_value_t = 1000)]
    delay_ms: u64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (warnings and errors only, no summary)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// The dataset to populate, or `None` to start the server.
    const fn dataset(&self) -> Option<Dataset> {
        if self.pokemon {
            Some(Dataset::Pokemon)
        } else if self.moves {
            Some(Dataset::Moves)
        } else {
            None
        }
    }

    const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    check_credentials(&cli.credentials);

    let data_dir = cli.data_dir.clone().unwrap_or_else(FsStore::default_path);
    let store = open_store(&data_dir, &cli.project)?;

    match cli.dataset() {
        Some(dataset) => {
            let delay = Duration::from_millis(cli.delay_ms);
            commands::populate::populate(store, dataset, delay, cli.quiet).await
        }
        None => commands::serve::serve(store, cli.port).await,
    }
}

/// Opens the project's document store.
fn open_store(data_dir: &Path, project: &str) -> Result<Arc<dyn DocumentStore>> {
    let store = FsStore::open(data_dir, project).with_context(|| {
        format!(
            "Error initializing document store for project '{project}' in {}",
            data_dir.display()
        )
    })?;
    tracing::info!("Using document store at {}", store.base_path().display());
    Ok(Arc::new(store))
}

/// Warns when the configured credential file is missing.
///
/// The filesystem store needs no credentials, so this is not fatal.
fn check_credentials(path: &Path) {
    if !path.exists() {
        tracing::warn!("Credentials file {} not found", path.display());
    }
}
