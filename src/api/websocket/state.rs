//! Shared application state for both transports

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::board::Board;
use crate::types::{Entry, NewEntry};

use super::events::ServerEvent;

/// Shared state: the board plus the broadcast fan-out to all WebSocket clients
pub struct AppState {
    /// The board
    pub board: Arc<Board>,

    /// Broadcast channel for pushing events to all connected clients
    pub event_tx: broadcast::Sender<ServerEvent>,
}

impl AppState {
    /// Create state around an existing board
    pub fn new(board: Arc<Board>) -> Self {
        // Buffer 1024 events - a client that falls further behind misses
        // events and is told to refresh
        let (event_tx, _) = broadcast::channel(1024);

        Self { board, event_tx }
    }

    /// Submit a new entry through the shared pipeline
    ///
    /// Validates, builds the entry, appends + persists, then broadcasts to
    /// every connected client (the submitter included). Both the HTTP and
    /// WebSocket paths go through here so validation stays unified.
    pub fn submit(&self, new: NewEntry) -> Result<Entry, &'static str> {
        new.validate()?;

        let entry = Entry::now(new.text, new.author, new.kind);
        self.board.append(entry.clone());
        self.broadcast(ServerEvent::for_entry(entry.clone()));
        Ok(entry)
    }

    /// Broadcast an event to all connected WebSocket clients
    pub fn broadcast(&self, event: ServerEvent) {
        // Ignore send errors - they just mean no receivers are listening
        let _ = self.event_tx.send(event);
    }

    /// Subscribe to receive broadcast events
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }
}
