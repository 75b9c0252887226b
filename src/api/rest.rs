//! REST endpoints for reading and submitting entries

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::board::RECENT_WINDOW;
use crate::types::{Entry, EntryKind, NewEntry};

use super::websocket::state::AppState;

/// Response for `GET /api/messages`: the trailing window of both sequences
#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub success: bool,
    pub messages: Vec<Entry>,
    pub notes: Vec<Entry>,
}

/// Response for a successful submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub data: Entry,
}

/// Response for a rejected submission
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// GET /api/messages - Last 50 messages and last 50 notes
///
/// Never fails once the process is up.
pub async fn get_messages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(RecentResponse {
        success: true,
        messages: state.board.recent(EntryKind::Message, RECENT_WINDOW),
        notes: state.board.recent(EntryKind::Note, RECENT_WINDOW),
    })
}

/// POST /api/messages - Submit a new entry
///
/// `type` defaults to "message". A missing or empty `text`/`author` yields
/// a 400 and leaves the board untouched; on success every connected
/// WebSocket client receives the new entry as well.
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewEntry>,
) -> impl IntoResponse {
    match state.submit(payload) {
        Ok(entry) => (
            StatusCode::OK,
            Json(SubmitResponse {
                success: true,
                data: entry,
            }),
        )
            .into_response(),
        Err(reason) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                error: reason.to_string(),
            }),
        )
            .into_response(),
    }
}
