use e621_fetch::{
    FetchBotError,
    cli::{Cli, Commands},
    client::HttpSearchClient,
    commands,
    config::AppConfig,
    store::SettingsStore,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FetchBotError>;

/// Log to stderr; `RUST_LOG` wins over the `--debug` flag
fn init_tracing(debug: bool) {
    let default_level = if debug { "e621_fetch=debug" } else { "e621_fetch=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Open the settings store at the configured location
fn open_store(config: &AppConfig) -> Result<SettingsStore> {
    let store_path = config.resolved_store_path()?;
    debug!(path = %store_path.display(), "opening settings store");
    Ok(SettingsStore::open(&store_path, &config.default_filters)?)
}

/// Dispatch a parsed command line
///
/// Configuration and completion commands never open the settings store.
///
/// # Errors
///
/// Returns `FetchBotError` if configuration loading fails, the store cannot
/// be opened, or the command handler returns an error.
async fn run(cli: Cli) -> Result<()> {
    let config_path = AppConfig::config_path()?;
    let config = AppConfig::load_from(&config_path)?;
    let quiet = cli.quiet || config.quiet;
    let community = cli.community.as_str();

    match &cli.command {
        Commands::Completions { shell } => commands::completions(*shell),
        Commands::Config { command } => commands::config(config, &config_path, command, quiet)?,
        Commands::Fetch { tags } | Commands::Random { tags } => {
            let randomize = matches!(cli.command, Commands::Random { .. });
            let store = open_store(&config)?;
            let backend = HttpSearchClient::from_config(&config)?;
            commands::fetch(&store, &backend, &config, community, tags, randomize, quiet).await?;
        }
        Commands::Filter { command } => {
            let store = open_store(&config)?;
            commands::filter(&store, community, command, quiet)?;
            store.flush()?;
        }
        Commands::Set { command } => {
            let store = open_store(&config)?;
            commands::settings(&store, community, command, quiet)?;
            store.flush()?;
        }
    }

    Ok(())
}

/// Main entry point for e621-fetch
#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
