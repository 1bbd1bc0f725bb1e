//! CLI command definitions
//!
//! Defines the clap commands for the harness binary.

use clap::{Args, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::common::config::Mode;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the harness HTTP server
    Serve(ServeArgs),

    /// List discovered test pages
    List {
        /// Application root directory (defaults to the current directory)
        #[arg(long)]
        app_root: Option<PathBuf>,

        /// Path to the configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Arguments for the serve command
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long)]
    pub addr: Option<SocketAddr>,

    /// Environment mode: dev, test or prod
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Application root directory (defaults to the current directory)
    #[arg(long)]
    pub app_root: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
