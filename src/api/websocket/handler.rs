//! WebSocket connection handler

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tracing::{debug, warn};

use crate::board::RECENT_WINDOW;
use crate::types::EntryKind;

use super::events::{ClientEvent, PongMessage, ServerEvent};
use super::state::AppState;

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection
async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    // Subscribe before taking the snapshot so no append between the two is lost
    let mut rx = state.subscribe();
    debug!("client connected");

    // Send the one-time snapshot of both sequences
    let snapshot = ServerEvent::InitialData {
        messages: state.board.recent(EntryKind::Message, RECENT_WINDOW),
        notes: state.board.recent(EntryKind::Note, RECENT_WINDOW),
    };
    if let Ok(json) = serde_json::to_string(&snapshot) {
        if socket.send(Message::Text(json)).await.is_err() {
            return; // Client disconnected immediately
        }
    }

    loop {
        tokio::select! {
            // Broadcast events to client
            result = rx.recv() => {
                match result {
                    Ok(event) => {
                        if let Ok(json) = serde_json::to_string(&event) {
                            if socket.send(Message::Text(json)).await.is_err() {
                                break; // Client disconnected
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        // Client is too slow and missed events
                        let error_msg = serde_json::json!({
                            "type": "error",
                            "code": "lagged",
                            "message": format!("Missed {} events, please refresh", n)
                        });
                        let _ = socket.send(Message::Text(error_msg.to_string())).await;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        break; // Channel closed
                    }
                }
            }

            // Handle client messages
            result = socket.recv() => {
                match result {
                    Some(Ok(msg)) => {
                        if !handle_client_message(msg, &state, &mut socket).await {
                            break; // Client requested close or error
                        }
                    }
                    Some(Err(_)) => break, // WebSocket error
                    None => break, // Client disconnected
                }
            }
        }
    }

    debug!("client disconnected");
}

/// Handle a message from the client
/// Returns false if the connection should be closed
async fn handle_client_message(msg: Message, state: &AppState, socket: &mut WebSocket) -> bool {
    match msg {
        Message::Text(text) => {
            if let Ok(event) = serde_json::from_str::<ClientEvent>(&text) {
                match event {
                    ClientEvent::Ping => {
                        let pong = PongMessage::default();
                        if let Ok(json) = serde_json::to_string(&pong) {
                            let _ = socket.send(Message::Text(json)).await;
                        }
                    }
                    submission => {
                        if let Some(new) = submission.into_submission() {
                            // The broadcast loop delivers the entry back to
                            // this connection; no separate acknowledgment
                            if let Err(reason) = state.submit(new) {
                                warn!("rejected channel submission: {}", reason);
                            }
                        }
                    }
                }
            }
            true
        }
        Message::Binary(_) => true, // Ignore binary messages
        Message::Ping(data) => {
            let _ = socket.send(Message::Pong(data)).await;
            true
        }
        Message::Pong(_) => true, // Ignore pong responses
        Message::Close(_) => false, // Client requested close
    }
}

// Re-export for use by the select loop above
pub use tokio::sync::broadcast;
