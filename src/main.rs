//! Mauka Autocomplete - Main entrypoint.
//!
//! This is the main entry point for the Mauka Autocomplete application.
//! It loads configuration, initializes the logging system, builds the
//! autocomplete session and runs the requested command.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mauka_autocomplete_lib::autocomplete::repl::run_interactive;
use mauka_autocomplete_lib::catalog::{JsonFileCatalog, RestCountriesCatalog};
use mauka_autocomplete_lib::config::{
    AutocompleteConfig, CatalogSource, ConfigLoader, LogConfig, ENV_PREFIX,
};
use mauka_autocomplete_lib::error::{AutocompleteError, AutocompleteResult};
use mauka_autocomplete_lib::AutocompleteSession;
use tracing::{error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Mauka Autocomplete.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Autocomplete", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Read input lines from stdin and suggest as you type
    Interactive,

    /// Print every country name starting with a prefix
    Search {
        /// Prefix to complete (matched case-sensitively)
        prefix: String,
    },

    /// Print the detail card of a country
    Details {
        /// Full country name
        name: String,

        /// Print the card as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout only carries suggestions and cards.
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> AutocompleteResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    };

    result.map_err(|e| AutocompleteError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> AutocompleteResult<ExitCode> {
    let args = <Args as clap::Parser>::parse();
    let command = args.command.unwrap_or(Command::Interactive);

    if let Command::GenConfig { output } = &command {
        return gen_config(output).map(|()| ExitCode::SUCCESS);
    }

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logging(&config.log)?;

    if let Command::Validate = command {
        info!("Configuration validated successfully");
        return Ok(ExitCode::SUCCESS);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(command, config))
}

/// Builds the session from the configured catalog and runs `command`.
async fn run(command: Command, config: AutocompleteConfig) -> AutocompleteResult<ExitCode> {
    let local = match JsonFileCatalog::load(&config.catalog.path).await {
        Ok(catalog) => catalog,
        Err(e) => {
            // Without a catalog there are no words to offer, but the front
            // end still runs.
            error!(error = %e, "Failed to load country catalog");
            JsonFileCatalog::default()
        }
    };

    let mut session = match config.catalog.source {
        CatalogSource::File => AutocompleteSession::from_catalog(Arc::new(local), config.suggest),
        CatalogSource::Remote => {
            let remote = RestCountriesCatalog::new(&config.catalog.base_url, config.catalog.timeout())
                .with_fallback(local);
            AutocompleteSession::from_catalog(Arc::new(remote), config.suggest)
        }
    };
    session.initialize().await;

    match command {
        Command::Interactive => {
            info!("Type to search, ':<n>' to select, ':q' to quit");
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_interactive(&mut session, stdin, tokio::io::stdout()).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Search { prefix } => {
            // An empty prefix lists every name.
            let items = if prefix.trim().is_empty() {
                session.trie().search("")
            } else {
                session.suggest(&prefix).items
            };
            let mut stdout = std::io::stdout().lock();
            for item in &items {
                writeln!(stdout, "{item}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Details { name, json } => match session.select(&name).await {
            Some(card) if json => {
                println!("{}", serde_json::to_string_pretty(&card)?);
                Ok(ExitCode::SUCCESS)
            }
            Some(card) => {
                print!("{card}");
                Ok(ExitCode::SUCCESS)
            }
            None => Ok(ExitCode::FAILURE),
        },
        Command::Validate | Command::GenConfig { .. } => Ok(ExitCode::SUCCESS),
    }
}

/// Writes the default configuration as TOML to `output`.
fn gen_config(output: &Path) -> AutocompleteResult<()> {
    let default_config = AutocompleteConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| AutocompleteError::Custom(format!("Failed to serialize config: {e}")))?;

    std::fs::write(output, toml)?;

    eprintln!("Default configuration written to {}", output.display());
    Ok(())
}
