//! `category-logger`: inspect and exercise logger discovery from the shell.
//!
//! ```text
//! DEFAULT_CATEGORY_LOGGER=STDOUT category-logger emit --category net "hello"
//! category-logger --config logger.toml show
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use category_logger::config::{load_settings, ConfigError, LoggerSettings};
use category_logger::discovery::{self, CategoryLoggerDiscovery};
use category_logger::observability::logging::init_tracing;
use category_logger::Level;

#[derive(Parser)]
#[command(name = "category-logger")]
#[command(about = "Resolve and exercise the default category logger", long_about = None)]
struct Cli {
    /// Optional TOML settings file; DEFAULT_CATEGORY_LOGGER overrides its backend
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the selected compiled-in backend
    Show,
    /// Emit one record through the effective logger
    Emit {
        #[arg(short, long, default_value = "category-logger")]
        category: String,

        #[arg(short, long, default_value = "info")]
        level: Level,

        message: String,
    },
}

/// Settings from the config file, or the defaults when none is given.
fn file_settings(config: Option<&Path>) -> Result<LoggerSettings, ConfigError> {
    match config {
        Some(path) => load_settings(path),
        None => Ok(LoggerSettings::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let settings = file_settings(cli.config.as_deref())?.with_env_override();

    init_tracing(&settings.observability.log_level);
    let defaults = discovery::init(&settings)?;

    match cli.command {
        Commands::Show => {
            println!("compiled-in backend: {}", defaults.compiled_in_backend());
            println!(
                "process override: {}",
                if defaults.has_override() { "set" } else { "unset" }
            );
        }
        Commands::Emit {
            category,
            level,
            message,
        } => {
            let discovery = CategoryLoggerDiscovery::new();
            discovery.log(&category, level, &message, None);
            discovery.effective_logger().flush();
        }
    }

    Ok(())
}
