use std::net::SocketAddr;
use std::sync::Arc;

use fabsite_api::config::ServerConfig;
use fabsite_api::router::build_app_router;
use fabsite_api::state::AppState;
use fabsite_api::telemetry::init_tracing;
use fabsite_db::DatabaseSettings;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing("fabsite_api=debug,fabsite_db=info,tower_http=debug");

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = config.port,
        admin_enabled = config.admin_key_sha256.is_some(),
        "Loaded server configuration"
    );
    if config.admin_key_sha256.is_none() {
        tracing::warn!("ADMIN_API_KEY_SHA256 is not set; admin routes will answer 403");
    }

    // --- Database ---
    let db_settings = DatabaseSettings::from_env().expect("Invalid database configuration");
    tracing::info!(
        database = %db_settings.describe(),
        max_connections = db_settings.max_connections,
        "Resolved database settings"
    );

    let pool = fabsite_db::create_pool(&db_settings)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    fabsite_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    fabsite_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

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

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
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
