use super::args::{Cli, Commands, ScanArgs};
use super::handlers;
use crate::config::{Config, ConfigLocation};
use crate::logging;
use crate::presentation::FormatOptions;
use anyhow::{Context, Result};
use chrono::Utc;
use docket_index::{Database, ScanFilter};
use docket_ingest::Normalizer;
use is_terminal::IsTerminal;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level, cli.no_color);

    let location = ConfigLocation::resolve(cli.config.as_deref())?;
    let config = Config::load_from(&location.config_path)?;
    debug!(config = %location.config_path.display(), "resolved configuration");

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Scan(ScanArgs::default()));

    match command {
        Commands::Scan(args) => {
            let db = open_store(&config, &location)?;
            let options = FormatOptions {
                enable_color: !cli.no_color && std::io::stdout().is_terminal(),
            };
            handlers::scan::handle(&db, &scan_filter(args), cli.format, &options)
        }

        Commands::Ingest { files } => {
            let db = open_store(&config, &location)?;
            handlers::ingest::handle(&db, &Normalizer::new(), &files)
        }

        Commands::Configure {
            store_path,
            save_to,
        } => handlers::configure::handle(
            config,
            &location.workspace,
            &location.config_path,
            handlers::configure::ConfigureArgs {
                store_path,
                save_to,
            },
        ),

        Commands::Purge => {
            let db = open_store(&config, &location)?;
            handlers::purge::handle(&db, Utc::now())
        }
    }
}

fn open_store(config: &Config, location: &ConfigLocation) -> Result<Database> {
    let db_path = config.store_path(&location.workspace);
    Database::open(&db_path)
        .with_context(|| format!("Failed to open event store at {}", db_path.display()))
}

fn scan_filter(args: ScanArgs) -> ScanFilter {
    if args.all {
        return ScanFilter::all();
    }
    match args.start_from {
        Some(prefix) => ScanFilter::with_time_prefix(prefix),
        None => ScanFilter::for_date(Utc::now().date_naive()),
    }
}
