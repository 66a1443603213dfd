//! Chat WebSocket sessions
//!
//! Plain text in, plain text out: each incoming frame runs one turn on
//! this connection's session and the reply is the final message content.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use reserva_core::Orchestrator;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::personas;
use crate::session::ChatSession;

/// Handle one WebSocket connection
pub async fn handle_socket(socket: WebSocket, orchestrator: Arc<Orchestrator>) {
    let session_id = Uuid::new_v4();
    info!("WebSocket chat connection established: {}", session_id);

    let (mut sender, mut receiver) = socket.split();
    let mut session = ChatSession::new(personas::RECEPTIONIST);

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                debug!(session_id = %session_id, persona = %session.persona(), "Received message");

                match session.send(&orchestrator, text).await {
                    Ok(reply) => {
                        if sender.send(Message::Text(reply)).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!(session_id = %session_id, error = %e, "Turn failed");
                        let notice = format!("Error: {e}");
                        if sender.send(Message::Text(notice)).await.is_err() {
                            break;
                        }
                    }
                }
            }
            Ok(Message::Close(_)) => {
                info!("WebSocket connection closed: {}", session_id);
                break;
            }
            Ok(Message::Ping(data)) => {
                let _ = sender.send(Message::Pong(data)).await;
            }
            Err(e) => {
                error!(session_id = %session_id, error = %e, "WebSocket error");
                break;
            }
            _ => {}
        }
    }

    info!("WebSocket chat connection ended: {}", session_id);
}
