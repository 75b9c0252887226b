//! Flat-file persistence for the board
//!
//! The whole board is serialized to a single JSON document on every
//! mutation and read back once at startup:
//!
//! ```json
//! { "messages": [Entry...], "notes": [Entry...], "lastUpdate": "<RFC 3339>" }
//! ```
//!
//! Writes overwrite the file wholesale; there is no incremental append and
//! no atomic rename, so an external reader racing a write may observe a
//! partial document. That limitation is accepted.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::types::{BoardResult, Entry};

/// The persisted document shape
///
/// `messages` and `notes` default to empty so that a file written by an
/// older or partial producer still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardFile {
    #[serde(default)]
    pub messages: Vec<Entry>,
    #[serde(default)]
    pub notes: Vec<Entry>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update: String,
}

impl BoardFile {
    /// Load the document from `path`
    ///
    /// A missing file yields an empty document. Read or parse failures are
    /// returned to the caller, which degrades to empty sequences.
    pub fn load<P: AsRef<Path>>(path: P) -> BoardResult<BoardFile> {
        if !path.as_ref().exists() {
            return Ok(BoardFile::default());
        }

        let content = fs::read_to_string(path)?;
        let file = serde_json::from_str(&content)?;
        Ok(file)
    }

    /// Serialize the full board state to `path`, stamping `lastUpdate`
    pub fn save<P: AsRef<Path>>(path: P, messages: &[Entry], notes: &[Entry]) -> BoardResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = BoardFile {
            messages: messages.to_vec(),
            notes: notes.to_vec(),
            last_update: Utc::now().to_rfc3339(),
        };

        fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}
