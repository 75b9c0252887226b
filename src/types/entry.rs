//! Entry types for the message board

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Kind of a board entry: a chat message or a diary note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Message,
    Note,
}

impl EntryKind {
    /// Wire name of this kind ("message" or "note")
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Message => "message",
            EntryKind::Note => "note",
        }
    }
}

/// A single message or note on the board
///
/// Entries are immutable once created. `id` and `timestamp` carry the same
/// creation time in Unix milliseconds; `date` is a human-readable local
/// timestamp fixed at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub text: String,
    pub author: String,
    pub date: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    pub timestamp: u64,
}

impl Entry {
    /// Build an entry from raw inputs at the given instant
    ///
    /// Pure given `now`. Uniqueness of `id` is best-effort: two entries
    /// created within the same millisecond collide.
    pub fn create(text: String, author: String, kind: EntryKind, now: DateTime<Local>) -> Self {
        let millis = now.timestamp_millis().max(0) as u64;
        Self {
            id: millis,
            text,
            author,
            date: now.format("%d/%m/%Y, %H:%M:%S").to_string(),
            kind,
            timestamp: millis,
        }
    }

    /// Build an entry stamped with the current local time
    pub fn now(text: String, author: String, kind: EntryKind) -> Self {
        Self::create(text, author, kind, Local::now())
    }
}

/// Submission payload for a new entry, shared by the HTTP and WebSocket paths
///
/// `type` defaults to "message" when omitted; `text` and `author` default to
/// empty so that absent fields are reported by [`NewEntry::validate`] instead
/// of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntry {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
}

impl NewEntry {
    /// Check the required fields; both transports reject invalid submissions
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.text.is_empty() || self.author.is_empty() {
            return Err("text and author are required");
        }
        Ok(())
    }
}
