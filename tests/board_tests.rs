//! Integration tests for the board store and its file persistence

use message_board::board::{Board, RECENT_WINDOW};
use message_board::persistence::BoardFile;
use message_board::types::{Entry, EntryKind};

fn temp_path(dir: &tempfile::TempDir) -> String {
    dir.path().join("data.json").to_string_lossy().to_string()
}

#[test]
fn test_append_then_recent_returns_tail() {
    let dir = tempfile::tempdir().unwrap();
    let board = Board::with_file_path(temp_path(&dir));

    board.append(Entry::now("hi".to_string(), "A".to_string(), EntryKind::Message));

    let recent = board.recent(EntryKind::Message, RECENT_WINDOW);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].text, "hi");
    assert_eq!(recent[0].author, "A");
    assert_eq!(recent[0].kind, EntryKind::Message);
}

#[test]
fn test_recent_window_is_bounded_and_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let board = Board::with_file_path(temp_path(&dir));

    // Two batches of 51: the window must keep only the last 50, in order
    for i in 0..102 {
        board.append(Entry::now(
            format!("m{}", i),
            "A".to_string(),
            EntryKind::Message,
        ));
    }

    let recent = board.recent(EntryKind::Message, 50);
    assert_eq!(recent.len(), 50);
    assert_eq!(recent[0].text, "m52");
    assert_eq!(recent[49].text, "m101");
    for pair in recent.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[test]
fn test_save_load_round_trip_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);

    let board = Board::with_file_path(path.clone());
    board.append(Entry::now("m1".to_string(), "A".to_string(), EntryKind::Message));
    board.append(Entry::now("n1".to_string(), "B".to_string(), EntryKind::Note));
    board.append(Entry::now("m2".to_string(), "A".to_string(), EntryKind::Message));

    let file = BoardFile::load(&path).unwrap();
    assert_eq!(file.messages.len(), 2);
    assert_eq!(file.notes.len(), 1);

    // Loading into a fresh board reproduces both sequences element-for-element
    let reloaded = Board::with_file_path(path);
    let messages = reloaded.recent(EntryKind::Message, RECENT_WINDOW);
    let notes = reloaded.recent(EntryKind::Note, RECENT_WINDOW);

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "m1");
    assert_eq!(messages[1].text, "m2");
    assert_eq!(messages[0].id, file.messages[0].id);
    assert_eq!(notes[0].text, "n1");
    assert_eq!(notes[0].date, file.notes[0].date);
}

#[test]
fn test_unreadable_data_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let board = Board::with_file_path(path.to_string_lossy().to_string());
    assert!(board.is_empty(EntryKind::Message));
    assert!(board.is_empty(EntryKind::Note));

    // The board still works and overwrites the bad file on the next append
    board.append(Entry::now("ok".to_string(), "A".to_string(), EntryKind::Message));
    let file = BoardFile::load(&path).unwrap();
    assert_eq!(file.messages.len(), 1);
}

#[test]
fn test_persisted_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);

    let board = Board::with_file_path(path.clone());
    board.append(Entry::now("hi".to_string(), "A".to_string(), EntryKind::Message));

    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(doc["messages"].is_array());
    assert!(doc["notes"].is_array());
    assert!(doc["lastUpdate"].is_string());

    let entry = &doc["messages"][0];
    assert_eq!(entry["text"], "hi");
    assert_eq!(entry["author"], "A");
    assert_eq!(entry["type"], "message");
    assert!(entry["id"].is_u64());
    assert!(entry["timestamp"].is_u64());
    assert!(entry["date"].is_string());
}
