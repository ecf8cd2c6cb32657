//! Time tracker HTTP server.
//!
//! Usage:
//!
//! ```text
//! time-tracker [--config time-tracker.toml] [--log-level debug]
//! ```
//!
//! `RUST_LOG` takes precedence over `--log-level`, which takes precedence over
//! the `logging.level` configuration key.

use clap::Parser;
use eyre::WrapErr;
use std::path::PathBuf;
use time_tracker::{api, app, config::Config};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "time-tracker", version, about = "User provisioning and work-session tracking")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "TIME_TRACKER_CONFIG", default_value = "time-tracker.toml")]
    config: PathBuf,

    /// Overrides the configured log filter.
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_with_env(&cli.config)
        .wrap_err_with(|| format!("load configuration from {}", cli.config.display()))?;

    let directive = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting time tracker");

    let state = app::build_state(&config)
        .await
        .wrap_err("assemble application state")?;
    let router = api::create_router(state);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .wrap_err_with(|| format!("bind {address}"))?;
    tracing::info!(%address, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("serve HTTP")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
