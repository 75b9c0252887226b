//! WebSocket module for real-time board updates
//!
//! Provides the `/ws` endpoint. Each connection receives a one-time
//! `initialData` snapshot, then every `newMessage`/`newNote` event appended
//! from any transport; it can also submit entries directly with
//! `sendMessage`/`sendNote`.

pub mod events;
pub mod handler;
pub mod state;

// Re-export commonly used items
pub use events::{ClientEvent, ServerEvent};
pub use state::AppState;
