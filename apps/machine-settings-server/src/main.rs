//! Machine settings HTTP server

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use machine_settings::MachineSettingsModule;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "machine-settings-server", version, about = "Machine settings HTTP server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "MACHINE_SETTINGS_CONFIG")]
    config: Option<PathBuf>,

    /// Listen port (overrides configuration and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.bind_addr.set_port(port);
    }

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    logging::init(&config.logging)?;

    let module = MachineSettingsModule::init(config.machine_settings.clone()).await?;
    tracing::info!(
        machines_file = %module.config().machines_file.display(),
        settings_dir = %module.config().settings_base_dir().display(),
        "Machine settings loaded"
    );
    let app = module.router().layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "Machine settings server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Machine settings server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
