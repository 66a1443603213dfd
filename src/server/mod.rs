//! HTTP/WebSocket server
//!
//! A thin transport over the orchestrator: `/` serves the chat page,
//! `/ws` upgrades to a per-connection chat session.

mod chat;

use crate::assistant;
use crate::config::AppConfig;
use anyhow::{Context, Result};
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use reserva_core::Orchestrator;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

const INDEX_HTML: &str = include_str!("../../frontend/index.html");

/// Start the server with the given configuration
pub async fn run(config: AppConfig) -> Result<()> {
    let orchestrator = assistant::build_orchestrator(&config)?;
    let app = router(orchestrator);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Starting server on {addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(orchestrator)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(orchestrator): State<Arc<Orchestrator>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| chat::handle_socket(socket, orchestrator))
}
