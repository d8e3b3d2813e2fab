//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a note, using UUID v7 (time-sortable)
///
/// List identity is always this generated id, never a position or a
/// recomputed integer, so dismissing rows can never alias two notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A note on the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Short title line
    pub title: String,
    /// Free-form description text
    pub body: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Note {
    /// Create a new note with the given title and body
    ///
    /// Empty strings are accepted; there is no validation.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            body: body.into(),
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Title truncated to `max_len` characters for row rendering
    #[must_use]
    pub fn title_preview(&self, max_len: usize) -> String {
        self.title.chars().take(max_len).collect()
    }

    /// First line of the body truncated to `max_len` characters
    #[must_use]
    pub fn body_preview(&self, max_len: usize) -> String {
        self.body
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(max_len)
            .collect()
    }

    /// Check if both title and body are empty (whitespace-only counts)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.body.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_parse() {
        let id = NoteId::new();
        let parsed: NoteId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_note_new() {
        let note = Note::new("Groceries", "Milk, eggs");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.body, "Milk, eggs");
        assert!(note.created_at > 0);
    }

    #[test]
    fn test_note_new_accepts_empty_fields() {
        let note = Note::new("", "");
        assert_eq!(note.title, "");
        assert_eq!(note.body, "");
        assert!(note.is_empty());
    }

    #[test]
    fn test_title_preview_truncates() {
        let note = Note::new("A fairly long note title", "");
        assert_eq!(note.title_preview(8), "A fairly");
        assert_eq!(note.title_preview(100), "A fairly long note title");
    }

    #[test]
    fn test_body_preview_first_line() {
        let note = Note::new("t", "First line\nSecond line");
        assert_eq!(note.body_preview(50), "First line");
        assert_eq!(note.body_preview(5), "First");
    }

    #[test]
    fn test_is_empty() {
        assert!(Note::new("   ", "").is_empty());
        assert!(!Note::new("Hello", "").is_empty());
        assert!(!Note::new("", "world").is_empty());
    }
}
