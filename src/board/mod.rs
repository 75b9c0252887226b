//! Board - Core data engine
//!
//! The board holds the two append-only entry sequences behind a single
//! write lock and persists the full state to its data file after every
//! append. The lock is held across append + persist so that concurrent
//! handlers on a multi-threaded runtime never interleave a mutation with
//! a file write.

use std::env;
use std::sync::RwLock;

use tracing::{error, warn};

use crate::config::DATA_FILE;
use crate::persistence::BoardFile;
use crate::types::{Entry, EntryKind};

/// How many trailing entries the read endpoints and the connect snapshot
/// return per sequence
pub const RECENT_WINDOW: usize = 50;

/// In-memory board state: the two ordered sequences
#[derive(Debug, Clone, Default)]
struct BoardState {
    messages: Vec<Entry>,
    notes: Vec<Entry>,
}

/// Board with in-memory sequences and coupled file persistence
pub struct Board {
    data_file_path: String,
    state: RwLock<BoardState>,
}

impl Board {
    /// Create a board backed by the default data file in the working directory
    pub fn new() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let path = current_dir.join(DATA_FILE).to_string_lossy().to_string();
        Self::with_file_path(path)
    }

    /// Create a board backed by a custom data file path
    ///
    /// Loads persisted state at construction. A missing file starts empty;
    /// a malformed file is logged and treated the same way.
    pub fn with_file_path(file_path: String) -> Self {
        let state = match BoardFile::load(&file_path) {
            Ok(file) => BoardState {
                messages: file.messages,
                notes: file.notes,
            },
            Err(e) => {
                warn!("failed to load data file {}: {}", file_path, e);
                BoardState::default()
            }
        };

        Self {
            data_file_path: file_path,
            state: RwLock::new(state),
        }
    }

    /// Append an entry to the sequence matching its kind and persist
    ///
    /// Persistence failure is logged and swallowed: the in-memory append
    /// still counts, and the process degrades to non-durable mode.
    pub fn append(&self, entry: Entry) {
        let mut state = self.state.write().unwrap();
        match entry.kind {
            EntryKind::Message => state.messages.push(entry),
            EntryKind::Note => state.notes.push(entry),
        }

        if let Err(e) = BoardFile::save(&self.data_file_path, &state.messages, &state.notes) {
            error!("failed to save data file {}: {}", self.data_file_path, e);
        }
    }

    /// Last `n` entries of the given kind, oldest first; all if fewer exist
    pub fn recent(&self, kind: EntryKind, n: usize) -> Vec<Entry> {
        let state = self.state.read().unwrap();
        let seq = match kind {
            EntryKind::Message => &state.messages,
            EntryKind::Note => &state.notes,
        };
        let start = seq.len().saturating_sub(n);
        seq[start..].to_vec()
    }

    /// Number of entries of the given kind
    pub fn len(&self, kind: EntryKind) -> usize {
        let state = self.state.read().unwrap();
        match kind {
            EntryKind::Message => state.messages.len(),
            EntryKind::Note => state.notes.len(),
        }
    }

    /// True if no entry of the given kind exists
    pub fn is_empty(&self, kind: EntryKind) -> bool {
        self.len(kind) == 0
    }

    /// Path of the backing data file
    pub fn data_file_path(&self) -> &str {
        &self.data_file_path
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_board(dir: &tempfile::TempDir) -> Board {
        let path = dir.path().join("data.json").to_string_lossy().to_string();
        Board::with_file_path(path)
    }

    #[test]
    fn test_append_and_recent_preserve_order() {
        let dir = tempfile::tempdir().unwrap();
        let board = temp_board(&dir);

        for i in 0..3 {
            board.append(Entry::now(
                format!("m{}", i),
                "A".to_string(),
                EntryKind::Message,
            ));
        }

        let recent = board.recent(EntryKind::Message, RECENT_WINDOW);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].text, "m0");
        assert_eq!(recent[2].text, "m2");
        assert!(board.is_empty(EntryKind::Note));
    }

    #[test]
    fn test_recent_window_drops_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let board = temp_board(&dir);

        for i in 0..102 {
            board.append(Entry::now(
                format!("m{}", i),
                "A".to_string(),
                EntryKind::Message,
            ));
        }

        let recent = board.recent(EntryKind::Message, RECENT_WINDOW);
        assert_eq!(recent.len(), RECENT_WINDOW);
        assert_eq!(recent[0].text, "m52");
        assert_eq!(recent[49].text, "m101");
    }

    #[test]
    fn test_kinds_go_to_separate_sequences() {
        let dir = tempfile::tempdir().unwrap();
        let board = temp_board(&dir);

        board.append(Entry::now("m".to_string(), "A".to_string(), EntryKind::Message));
        board.append(Entry::now("n".to_string(), "A".to_string(), EntryKind::Note));

        assert_eq!(board.len(EntryKind::Message), 1);
        assert_eq!(board.len(EntryKind::Note), 1);
        assert_eq!(board.recent(EntryKind::Note, 50)[0].text, "n");
    }

    #[test]
    fn test_state_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json").to_string_lossy().to_string();

        {
            let board = Board::with_file_path(path.clone());
            board.append(Entry::now("kept".to_string(), "A".to_string(), EntryKind::Message));
        }

        let board = Board::with_file_path(path);
        let recent = board.recent(EntryKind::Message, RECENT_WINDOW);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].text, "kept");
    }

    #[test]
    fn test_malformed_data_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{{{ definitely not json").unwrap();

        let board = Board::with_file_path(path.to_string_lossy().to_string());
        assert!(board.is_empty(EntryKind::Message));
        assert!(board.is_empty(EntryKind::Note));
    }
}
