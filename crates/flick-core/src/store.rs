//! In-memory note store
//!
//! Ordered list of notes for the lifetime of the screen. Insertion order is
//! display order. Nothing here is persisted.

use crate::models::{Note, NoteId};

/// The starter note every fresh screen begins with
const SEED_TITLE: &str = "Important";
const SEED_BODY: &str = "This is a very important note. Pls remind me of this";

/// Ordered collection of notes backing the list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Create a store holding the single starter note
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            notes: vec![Note::new(SEED_TITLE, SEED_BODY)],
        }
    }

    /// Append a new note and return its generated id
    ///
    /// Empty title/body are accepted; there is no validation.
    pub fn add(&mut self, title: impl Into<String>, body: impl Into<String>) -> NoteId {
        let note = Note::new(title, body);
        let id = note.id;
        self.notes.push(note);
        tracing::info!("Added note: {}", id);
        id
    }

    /// Remove the note with the given id
    ///
    /// Returns `false` when no note matches; the store is left unchanged.
    /// Dismissing the same id twice is therefore a no-op the second time.
    pub fn dismiss(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        if removed {
            tracing::info!("Dismissed note: {}", id);
        } else {
            tracing::debug!("Dismiss ignored, no note with id {}", id);
        }
        removed
    }

    /// All notes in display order
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes currently in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the store holds no notes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
