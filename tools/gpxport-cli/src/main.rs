//! gpxport CLI — Convert recorded activities to GPX track documents.
//!
//! Usage:
//!   gpxport convert [REFERENCE]   Convert an activity dump to GPX
//!   gpxport info [REFERENCE]      Show activity information
//!   gpxport config                Show (or save) the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gpxport_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "gpxport",
    about = "Convert recorded activity streams into GPX tracks",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an activity dump to a GPX document
    Convert {
        /// Activity dump path, or `-` for stdin (defaults to GPXPORT_ACTIVITY)
        reference: Option<String>,

        /// Output file, or `-` for stdout [default: export.gpx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Zone of the activity start time: local, utc, or an offset like +02:00
        #[arg(long)]
        timezone: Option<String>,

        /// Value of the document's creator attribute
        #[arg(long)]
        creator: Option<String>,
    },

    /// Show activity information without converting
    Info {
        /// Activity dump path, or `-` for stdin (defaults to GPXPORT_ACTIVITY)
        reference: Option<String>,

        /// Zone of the activity start time: local, utc, or an offset like +02:00
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Save it to the configuration file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    let dotenv_path = gpxport_common::config::load_dotenv(None);
    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if cli.json_logs {
        logging.json = true;
    }
    gpxport_common::logging::init_logging(&logging);
    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    match cli.command {
        Commands::Convert {
            reference,
            output,
            timezone,
            creator,
        } => commands::convert::run(config, reference, output, timezone, creator),
        Commands::Info {
            reference,
            timezone,
        } => commands::info::run(config, reference, timezone),
        Commands::Config { write } => commands::config::run(config, write),
    }
}
