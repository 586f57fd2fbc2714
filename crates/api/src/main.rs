use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fixhub_ai::GeminiClient;
use fixhub_api::config::ServerConfig;
use fixhub_api::router::build_app_router;
use fixhub_api::state::AppState;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fixhub_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Configuration loaded");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = fixhub_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    fixhub_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    fixhub_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    let ai = Arc::new(GeminiClient::new(config.gemini.clone()));
    tracing::info!(
        text_model = %config.gemini.text_model,
        image_model = %config.gemini.image_model,
        "Gemini client ready"
    );

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ai,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "FixHub API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Shutdown complete");
}

/// Resolve when the process is asked to stop. Handles SIGINT (Ctrl-C)
/// and, on Unix, SIGTERM from a process manager.
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
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
