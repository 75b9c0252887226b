//! Message Board Server
//!
//! A minimal real-time messages and notes board: clients post short text
//! entries over HTTP or a WebSocket, the server appends them to two
//! append-only in-memory sequences, broadcasts every new entry to all
//! connected clients, and persists both sequences to a flat JSON file.
//!
//! # Modules
//!
//! - `types`: Core data structures (Entry, EntryKind, NewEntry)
//! - `board`: The in-memory store with coupled file persistence
//! - `persistence`: The flat-file document read and written by the board
//! - `api`: HTTP routes and the WebSocket realtime channel
//! - `config`: Port and data-file configuration from the environment
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use message_board::{AppState, Board, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let board = Arc::new(Board::new());
//!     let state = Arc::new(AppState::new(board));
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod persistence;
pub mod types;

// Re-export commonly used items at crate root
pub use api::http::create_router;
pub use api::websocket::{AppState, ClientEvent, ServerEvent};
pub use board::{Board, RECENT_WINDOW};
pub use config::ServerConfig;
pub use persistence::BoardFile;
pub use types::{BoardResult, Entry, EntryKind, NewEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
