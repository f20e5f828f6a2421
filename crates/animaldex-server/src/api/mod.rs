//! HTTP application assembly and serving
//!
//! [`create_router`] mounts the system routes (`/`, `/health`, `/api/health`)
//! next to the feature routes and applies the middleware stack.
//! [`create_app`] additionally strips trailing slashes so `/api/animals` and
//! `/api/animals/` reach the same handler.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router, ServiceExt,
};
use serde_json::json;
use sqlx::PgPool;
use tokio::signal;
use tower::Layer;
use tower_http::{
    compression::CompressionLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
};
use tracing::info;

use crate::config::Config;
use crate::{db, features, middleware};

/// Create the application router with all routes and middleware
pub fn create_router(db: PgPool, config: &Config) -> Router {
    let system_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/health", get(health_check))
        .with_state(db.clone());

    Router::new()
        .merge(system_routes)
        .merge(features::router(db))
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Router wrapped so paths are matched without their trailing slash
pub fn create_app(db: PgPool, config: &Config) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(create_router(db, config))
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
///
/// In-flight requests get `shutdown_timeout_secs` to finish once the signal
/// arrives.
pub async fn serve(config: Config, pool: PgPool) -> anyhow::Result<()> {
    let app = create_app(pool, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
    let shutdown = async move {
        shutdown_signal().await;
        let _ = signalled_tx.send(());
    };

    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .into_future();
    tokio::pin!(server);

    let timeout_secs = config.server.shutdown_timeout_secs;
    let drain_deadline = async move {
        match signalled_rx.await {
            Ok(()) => {
                info!("Waiting up to {} seconds for connections to close", timeout_secs);
                tokio::time::sleep(Duration::from_secs(timeout_secs)).await;
            },
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = &mut server => {
            result?;
            info!("Server shut down gracefully");
        },
        _ = drain_deadline => {
            tracing::warn!("Shutdown timeout elapsed with connections still open");
        },
    }

    Ok(())
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "AnimalDex API is running!",
        "name": "AnimalDex API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness plus database reachability
async fn health_check(State(pool): State<PgPool>) -> Response {
    match db::health_check(&pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected"
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": "disconnected"
                })),
            )
                .into_response()
        },
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
