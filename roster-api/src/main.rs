use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roster_api::rest::{AppState, create_router};
use roster_api::{EmployeeAuditLogger, EmployeeService, SqliteStore, create_audit_logger};

#[derive(Parser)]
#[command(name = "roster-api")]
#[command(about = "Roster employee records service")]
struct Args {
    /// Listen address for the REST API
    #[arg(short, long, default_value = "[::]:5000")]
    listen: String,

    /// Data directory for the employee database
    #[arg(short, long, default_value = "/var/lib/roster")]
    data_dir: PathBuf,

    /// Run in development mode (ephemeral in-memory storage, no audit log)
    #[arg(long)]
    dev: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("roster_api=info".parse()?))
        .init();

    let args = Args::parse();

    // Open the store
    let store = if args.dev {
        warn!("Development mode: records are kept in memory and lost on exit");
        SqliteStore::in_memory().await?
    } else {
        tokio::fs::create_dir_all(&args.data_dir)
            .await
            .with_context(|| format!("creating data directory {}", args.data_dir.display()))?;
        SqliteStore::open(&args.data_dir)
            .await
            .with_context(|| format!("opening database in {}", args.data_dir.display()))?
    };
    let store = Arc::new(store);

    let audit = if args.dev {
        Arc::new(EmployeeAuditLogger::new_noop())
    } else {
        create_audit_logger()
    };

    let app_state = Arc::new(AppState {
        service: EmployeeService::new(store.clone(), audit),
    });
    let router = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("binding {}", args.listen))?;
    info!("REST API listening on {}", args.listen);

    // Run server with graceful shutdown
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Closing database...");
    store.close().await;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = signal::ctrl_c();
    let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            let _ = ctrl_c.await;
            info!("Received SIGINT");
            return;
        }
    };

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = sigterm.recv() => info!("Received SIGTERM"),
    }
}
