use std::net::SocketAddr;
use std::sync::Arc;

use shieldx_core::clock::SystemClock;
use shieldx_db::{OpenOutcome, StateStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shieldx_api::config::ServerConfig;
use shieldx_api::router::build_app_router;
use shieldx_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shieldx_api=debug,shieldx_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = %config.port,
        state_file = %config.state_file.display(),
        "Loaded server configuration",
    );

    // --- Lock state ---
    let (store, outcome) = StateStore::open(&config.state_file)
        .await
        .expect("Failed to open lock state document");
    match outcome {
        OpenOutcome::Created => tracing::info!("Created lock state document with defaults"),
        OpenOutcome::Loaded => tracing::info!("Loaded existing lock state document"),
    }

    // --- App state ---
    let state = AppState {
        store: Arc::new(store),
        clock: Arc::new(SystemClock),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "ShieldX backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
