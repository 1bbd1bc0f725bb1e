//! qunit-harness - a web harness for browser-based unit tests
//!
//! Serves QUnit test pages for manual execution in the browser and
//! records posted results as JUnit XML report files.

use clap::Parser;
use commands::Commands;
use qunit_harness::{cli, commands, common, server};

#[derive(Parser)]
#[command(name = "qunit-harness", about = "Browser unit test harness")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => server::run(args).await,
        command => cli::dispatch(command).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
