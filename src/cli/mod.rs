//! CLI command handling
//!
//! Dispatches the non-server commands and formats output.

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::Result;
use crate::discovery;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Serve(_) => {
            // Should never happen - serve mode is handled in main
            unreachable!("Serve command should be handled in main")
        }

        Commands::List { app_root, config } => {
            let config = Config::load(app_root.as_deref(), config.as_deref())?;
            let pages = discovery::find_test_pages(&config.test_root(), &config.public_root())?;

            if pages.is_empty() {
                println!("No test pages found in {}", config.test_root().display());
            } else {
                for page in &pages {
                    println!("{page}");
                }
            }

            Ok(())
        }
    }
}
