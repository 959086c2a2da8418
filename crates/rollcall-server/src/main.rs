//! # Rollcall Server
//!
//! Main entry point for the Rollcall user-directory service.

use rollcall_config::ConfigLoader;
use rollcall_core::{RollcallError, RollcallResult};
use rollcall_repository::InMemoryUserRepository;
use rollcall_rest::{create_router, AppState};
use rollcall_service::{UserService, UserServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Rollcall Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> RollcallResult<()> {
    let config = ConfigLoader::from_default_location()?;

    info!("Environment: {}", config.app.environment);

    // Wire the store and service; state lives for the process lifetime.
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(repository));

    let app_state = AppState::new(user_service);
    let router = create_router(app_state, &config.server);

    let rest_addr = config.server.rest_addr();
    info!("Starting REST server on http://{}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| RollcallError::internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RollcallError::internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rollcall=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
