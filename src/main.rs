//! Command-line access to the properties configuration.
//!
//! ```text
//! prop-config [--dir DIR]... [--log-level LEVEL] <get KEY | list [--json] | check>
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use prop_config::observability::logging::init_logging;
use prop_config::{ConfigProvider, ResourceLocator, RESOURCE_NAME};

#[derive(Parser)]
#[command(name = "prop-config")]
#[command(about = "Inspect the application's properties configuration", long_about = None)]
struct Cli {
    /// Directory to search for the resource (repeatable, searched in order).
    #[arg(short, long = "dir")]
    dirs: Vec<PathBuf>,

    /// Log level for this tool (overridden by RUST_LOG).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value of a key
    Get { key: String },
    /// Print every key/value pair
    List {
        /// Emit a JSON object instead of key=value lines
        #[arg(long)]
        json: bool,
    },
    /// Load the resource and report how many keys it defines
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let locator = if cli.dirs.is_empty() {
        ResourceLocator::default()
    } else {
        ResourceLocator::new(cli.dirs)
    };
    let provider = ConfigProvider::new(locator);

    match cli.command {
        Commands::Get { key } => {
            println!("{}", provider.get_property(&key)?);
        }
        Commands::List { json } => {
            let sorted: BTreeMap<_, _> = provider.get_all_properties()?.into_iter().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&sorted)?);
            } else {
                for (key, value) in sorted {
                    println!("{key}={value}");
                }
            }
        }
        Commands::Check => {
            let snapshot = provider.get()?;
            let path = snapshot
                .source()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| RESOURCE_NAME.to_string());
            println!("{path}: {} keys", snapshot.len());
        }
    }

    Ok(())
}
