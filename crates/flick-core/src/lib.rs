//! flick-core - Core library for Flick
//!
//! This crate contains the shared models and the screen state machines
//! (note store, composer, slide animation, swipe tracking) used by the
//! Flick UI. It has no GUI dependency and is fully unit-testable.

pub mod anim;
pub mod composer;
pub mod error;
pub mod models;
pub mod store;
pub mod swipe;

pub use composer::{Composer, Visibility};
pub use error::{Error, Result};
pub use models::{Note, NoteId};
pub use store::NoteStore;
