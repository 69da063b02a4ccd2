//! CLI definitions for taskdesk.
//!
//! Defined with clap's derive macros. Running without a subcommand is
//! equivalent to `taskdesk serve`.

use clap::{Parser, Subcommand};

/// Task manager web app backed by a hosted database
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Backend REST root URL (overrides config)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Backend API key (overrides config)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Port to serve the task page on (overrides config)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web server (default if no subcommand given)
    Serve,
}
