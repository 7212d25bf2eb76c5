mod sync;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::services::SyncConfig;
pub use sync::SyncArgs;

/// Sync local business listings from Google Sheets into JSON data files
#[derive(Parser)]
#[command(name = "bizsync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level; RUST_LOG takes precedence
    #[arg(
        long,
        global = true,
        default_value = "info",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the businesses tab and regenerate the data files (default)
    Sync(SyncArgs),

    /// Validate configuration without touching the network
    CheckConfig,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        init_logging(&self.log_level);

        match self.command {
            None => SyncArgs::default().run(),
            Some(Commands::Sync(args)) => args.run(),
            Some(Commands::CheckConfig) => {
                let config = SyncConfig::from_env()?;
                println!("Configuration OK");
                println!("  Sheet ID:         {}", config.spreadsheet_id);
                println!("  API key:          {}", config.masked_api_key());
                println!("  Businesses tab:   {}", config.businesses_sheet);
                println!("  Categories tab:   {} (not fetched)", config.categories_sheet);
                println!("  API base URL:     {}", config.api_base_url);
                Ok(())
            }
        }
    }
}

/// Install the stderr fmt subscriber. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bizsync={}", level)));

    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
