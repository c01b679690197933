//! Employee Service Library
//!
//! This crate provides employee management over an HTTP REST API backed by
//! PostgreSQL. Requests flow through field validation, the orchestration
//! layer and the persistence gateway, in that order.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::EmployeeServiceConfig;
use crate::infra::Database;
use crate::repository::{EmployeeRepository, EmployeeStore};
use crate::service::{EmployeeManager, EmployeeService};

/// Assemble the full application from a repository and a database handle.
pub fn build_router(
    repo: Arc<dyn EmployeeRepository>,
    database: Arc<Database>,
    request_timeout: Duration,
) -> Router {
    let employee_service: Arc<dyn EmployeeService> = Arc::new(EmployeeManager::new(repo));
    let state = AppState::new(employee_service, database);

    create_router(state, request_timeout)
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(
    config: EmployeeServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(database = ?config.database, "Starting {}", config.server.service_name);

    // Initialize database
    let db = Arc::new(Database::connect(&config.database).await?);

    // Create repository and router
    let repo = Arc::new(EmployeeStore::new(db.get_connection()));
    let app = build_router(
        repo,
        db.clone(),
        Duration::from_secs(config.server.request_timeout_secs),
    );

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Employee service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, closing database pool");
    if let Ok(db) = Arc::try_unwrap(db) {
        db.close().await?;
    }

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
