//! WebSocket event types for real-time board updates

use serde::{Deserialize, Serialize};

use crate::types::{Entry, EntryKind, NewEntry};

/// Events the server pushes to connected clients
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// One-time snapshot sent on connect: the last-50 window of each sequence
    InitialData {
        messages: Vec<Entry>,
        notes: Vec<Entry>,
    },

    /// A new message was appended (from any transport)
    NewMessage { data: Entry },

    /// A new note was appended (from any transport)
    NewNote { data: Entry },
}

impl ServerEvent {
    /// Wrap a freshly appended entry in the event matching its kind
    pub fn for_entry(entry: Entry) -> Self {
        match entry.kind {
            EntryKind::Message => ServerEvent::NewMessage { data: entry },
            EntryKind::Note => ServerEvent::NewNote { data: entry },
        }
    }
}

/// Events clients send to the server
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Submit a new message
    SendMessage {
        #[serde(default)]
        text: String,
        #[serde(default)]
        author: String,
    },

    /// Submit a new note
    SendNote {
        #[serde(default)]
        text: String,
        #[serde(default)]
        author: String,
    },

    /// Ping for heartbeat
    Ping,
}

impl ClientEvent {
    /// Convert a submission event into the shared submission payload
    ///
    /// Returns `None` for non-submission events.
    pub fn into_submission(self) -> Option<NewEntry> {
        match self {
            ClientEvent::SendMessage { text, author } => Some(NewEntry {
                text,
                author,
                kind: EntryKind::Message,
            }),
            ClientEvent::SendNote { text, author } => Some(NewEntry {
                text,
                author,
                kind: EntryKind::Note,
            }),
            ClientEvent::Ping => None,
        }
    }
}

/// Pong response message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PongMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
}

impl Default for PongMessage {
    fn default() -> Self {
        Self {
            msg_type: "pong".to_string(),
        }
    }
}
