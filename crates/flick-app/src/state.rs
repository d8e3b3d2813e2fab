//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use flick_core::anim::Slide;
use flick_core::{Composer, Note, NoteStore};

use crate::config::AppConfig;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// All notes on the screen
    pub store: Signal<NoteStore>,
    /// Composer drafts and panel visibility
    pub composer: Signal<Composer>,
    /// Running slide timeline for the composer panel
    pub slide: Signal<Slide>,
    /// Interpolated visibility scalar consumed by the panel each frame
    pub panel_offset: Signal<f32>,
    /// Window configuration (row width for the swipe threshold)
    pub config: AppConfig,
}

impl AppState {
    /// Notes in display order
    #[must_use]
    pub fn visible_notes(&self) -> Vec<Note> {
        (self.store)().notes().to_vec()
    }

    /// Row width used for the swipe dismiss threshold
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn row_width(&self) -> f32 {
        self.config.window_width as f32
    }
}
