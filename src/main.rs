//! Demo Web Application
//!
//! A small observable HTTP service built with Tokio and Axum:
//! - three static pages (`/hello`, `/post`, `/web`) that log a structured
//!   record with the propagated trace identifier
//! - a per-process identity token attached to every log record
//! - a background ticker that advances a Prometheus counter, scraped via
//!   `/metrics` on the same listener

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use demo_webapp::config::{load_config, AppConfig};
use demo_webapp::http::{AppState, HttpServer};
use demo_webapp::identity::ProcessIdentity;
use demo_webapp::lifecycle::{signals, Shutdown};
use demo_webapp::observability::{logging, metrics};
use demo_webapp::ops::{OpsCounter, OpsRecorder};

#[derive(Parser)]
#[command(name = "demo-webapp")]
#[command(about = "Demo web application with metrics, logging and tracing", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(listen) = cli.listen {
        config.listener.bind_address = listen;
    }

    logging::init(&config.observability);

    tracing::info!("demo-webapp v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        tick_interval_ms = config.ticker.interval_ms,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    // Identity is computed once, before any request handler exists.
    let identity = ProcessIdentity::generate()?;
    tracing::info!(app = %identity, "Process identity assigned");

    // Metrics recorder must be installed before the first increment.
    let metrics_handle = metrics::install_recorder()?;

    let counter = Arc::new(OpsCounter::new());
    let shutdown = Shutdown::new();

    let recorder = OpsRecorder::new(
        counter.clone(),
        Duration::from_millis(config.ticker.interval_ms),
    );
    let recorder_handle = tokio::spawn(recorder.run(shutdown.subscribe()));

    signals::spawn_ctrl_c_listener(shutdown.clone());

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let state = AppState {
        identity,
        ops: counter,
        metrics: metrics_handle,
    };
    let server = HttpServer::new(&config, state);
    server.run(listener, shutdown.subscribe()).await?;

    // The server has drained; stop and join the background recorder.
    shutdown.trigger();
    if let Err(e) = recorder_handle.await {
        tracing::error!(error = %e, "Ops recorder task failed");
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
