use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "docket")]
#[command(
    about = "Pull stored ECS lifecycle events for quick reference timelines",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Config file (default: <workspace>/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show stored events as a timeline (the default command)
    Scan(ScanArgs),

    /// Normalize notifications and put them into the store
    Ingest {
        /// Files holding one notification each; `-` reads stdin
        #[arg(value_name = "FILE")]
        files: Vec<String>,
    },

    /// Prompt for settings and write the configuration file
    Configure {
        #[arg(long)]
        store_path: Option<String>,

        #[arg(long)]
        save_to: Option<String>,
    },

    /// Delete events past their retention window
    Purge,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Time prefix to match, e.g. 2024-05-01 or 2024-05-01T10 (default: today, UTC)
    #[arg(long, short = 's', conflicts_with = "all")]
    pub start_from: Option<String>,

    /// Show every stored event
    #[arg(long)]
    pub all: bool,
}
