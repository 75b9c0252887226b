//! Data types for the Message Board server
//!
//! This module contains the core data structures used throughout the application.

mod entry;

pub use entry::{Entry, EntryKind, NewEntry};

/// Result type for board operations
pub type BoardResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
