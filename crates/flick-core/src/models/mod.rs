//! Data models for Flick

mod note;

pub use note::{Note, NoteId};
