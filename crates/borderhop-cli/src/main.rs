//! `borderhop` - find an overland route between two countries.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use borderhop_cli::render::{self, CACHE_CLEARED_MESSAGE};
use borderhop_cli::{clear_border_cache, store_path, RestCountriesClient, Session};
use borderhop_core::{BorderhopConfig, Error, JsonFileStore};

/// Borderhop - overland routes between countries
#[derive(Parser, Debug)]
#[command(name = "borderhop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./borderhop.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the country and border caches
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Base URL of the countries API
    #[arg(long)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a route between two countries (names or codes)
    Route {
        /// Country to start from
        from: String,
        /// Country to reach
        to: String,
    },
    /// List known countries by descending area
    Countries {
        /// Show at most this many countries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Drop every cached border list
    ClearCache,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn resolve_data_dir(cli: Option<PathBuf>, config: &BorderhopConfig) -> PathBuf {
    cli.or_else(|| config.storage.data_dir.clone())
        .or_else(|| dirs::cache_dir().map(|d| d.join("borderhop")))
        .unwrap_or_else(|| PathBuf::from(".borderhop"))
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = BorderhopConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate()?;
    }
    let data_dir = resolve_data_dir(cli.data_dir, &config);
    tracing::debug!("Data directory: {}", data_dir.display());

    let store = Arc::new(JsonFileStore::open(store_path(&data_dir))?);
    let client = RestCountriesClient::from_config(&config.api)?;

    match cli.command {
        Command::ClearCache => {
            clear_border_cache(client, store)?;
            writeln!(io::stdout().lock(), "{}", CACHE_CLEARED_MESSAGE.green())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Countries { limit } => {
            let session = match Session::open(client, config.api.retry_policy(), store).await {
                Ok(session) => session,
                Err(err) => return Ok(report_error(&err)),
            };
            render::write_countries(&mut io::stdout().lock(), &session.countries(), limit)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Route { from, to } => {
            let mut session =
                match Session::open(client, config.api.retry_policy(), store).await {
                    Ok(session) => session,
                    Err(err) => return Ok(report_error(&err)),
                };
            let (source, destination) = match session.validate(&from, &to) {
                Ok(pair) => pair,
                Err(err) => return Ok(report_error(&err)),
            };
            render::write_banner(
                &mut io::stdout().lock(),
                session.registry(),
                &source,
                &destination,
            )?;
            match session.search(source, destination).await {
                Ok(report) => {
                    render::write_report(&mut io::stdout().lock(), session.registry(), &report)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => Ok(report_error(&err)),
            }
        }
    }
}

fn report_error(err: &Error) -> ExitCode {
    eprintln!("{}", render::fatal_message(err));
    match err {
        Error::Validation(_) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli).await
}
