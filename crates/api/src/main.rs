use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use creatorhub_api::config::ServerConfig;
use creatorhub_api::router::build_app_router;
use creatorhub_api::state::AppState;
use creatorhub_db::DocumentStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "creatorhub_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Document store ---
    let store = build_store(&config).await;

    // --- App state & router ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Build the document store handle, tolerating absence.
///
/// A missing `DATABASE_URL`/`DATABASE_NAME` pair, a malformed address, or a
/// failing migration all leave the process running; the data endpoints and
/// `/test` report the store's condition per request.
async fn build_store(config: &ServerConfig) -> Option<Arc<dyn DocumentStore>> {
    let store = match creatorhub_db::connect(
        config.database_url.as_deref(),
        config.database_name.as_deref(),
    ) {
        Ok(Some(store)) => store,
        Ok(None) => {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set, store disabled");
            return None;
        }
        Err(err) => {
            tracing::warn!(error = %err, "Invalid database configuration, store disabled");
            return None;
        }
    };

    // The pool is lazy, so this is the first real round-trip.
    match creatorhub_db::run_migrations(store.pool()).await {
        Ok(()) => tracing::info!("Database migrations applied"),
        Err(err) => {
            tracing::warn!(error = %err, "Migrations failed, database may be unreachable");
        }
    }

    Some(Arc::new(store))
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
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
