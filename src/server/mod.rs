use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::info;

use crate::config::Settings;
use crate::supabase::SupabaseClient;

/// State shared with every handler.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub supabase: Arc<SupabaseClient>,
}

impl AppState {
    pub fn new(settings: Settings, supabase: SupabaseClient) -> Self {
        Self {
            settings: Arc::new(settings),
            supabase: Arc::new(supabase),
        }
    }
}

/// Builds the application router. No application routes are mounted yet;
/// feature routers get merged here before the middleware is applied.
pub fn build_app(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .with_state(state);

    apply_middleware(router)
}

/// Request tracing plus panic recovery: a panicking handler answers 500
/// and the server keeps running.
pub fn apply_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn serve(settings: Settings, supabase: SupabaseClient) -> Result<()> {
    let bind_address = settings.server.bind_address();
    let app = build_app(AppState::new(settings, supabase));

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("Listening and serving HTTP on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
