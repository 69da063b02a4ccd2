//! taskdesk
//!
//! A minimal task manager web app: a form to create tasks, a table to
//! list them, and inline controls to delete or edit a task's
//! description. Persistence is delegated to a hosted Postgres REST
//! backend.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use taskdesk::app::App;
use taskdesk::cli::{Cli, Command};
use taskdesk::config::Config;
use taskdesk::store::http::HttpStore;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            let file = OpenOptions::new().create(true).append(true).open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // Load configuration, then apply CLI overrides on top
    let mut config = Config::load(cli.config.as_deref().map(Path::new))?;
    if let Some(url) = cli.backend_url {
        config.backend.url = url;
    }
    if let Some(key) = cli.api_key {
        config.backend.api_key = key;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    match cli.command {
        Some(Command::Serve) | None => serve(config).await,
    }
}

/// Start the web server and run until interrupted.
async fn serve(config: Config) -> Result<()> {
    info!("Using backend at {}", config.backend.url);

    let store = Arc::new(HttpStore::new(&config.backend)?);
    let app = Arc::new(App::new(store));

    let (shutdown_tx, addr) = taskdesk::web::start_server(app, config.server.port).await?;
    info!("Task Manager available at http://{}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Interrupt received, shutting down");
    let _ = shutdown_tx.send(());

    Ok(())
}
