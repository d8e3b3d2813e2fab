//! Shared screen actions used by UI components.

use std::time::Instant;

use dioxus::prelude::*;

use flick_core::NoteId;

use crate::state::AppState;

/// Slide the composer panel into view.
pub fn open_composer(state: &mut AppState) {
    state.composer.write().open();
    retarget_slide(state);
    tracing::info!("Composer opened");
}

/// Slide the composer shut and discard the draft.
pub fn cancel_composer(state: &mut AppState) {
    state.composer.write().cancel();
    retarget_slide(state);
    tracing::info!("Composer cancelled, draft discarded");
}

/// Commit the draft as a new note and slide the composer shut.
pub fn submit_draft(state: &mut AppState) {
    let (title, body) = state.composer.write().submit();
    let id = state.store.write().add(title, body);
    retarget_slide(state);
    tracing::info!("Committed draft as note {}", id);
}

/// Remove a note after a completed dismiss gesture.
pub fn dismiss_note(state: &mut AppState, id: NoteId) {
    // The store logs both outcomes; an unknown id is a silent no-op here.
    let _ = state.store.write().dismiss(id);
}

/// Point the slide timeline at the composer's current visibility.
///
/// Retargets from the timeline's current value, so toggling mid-flight
/// reverses smoothly instead of jumping.
fn retarget_slide(state: &mut AppState) {
    let target = state.composer.read().visibility().target();
    let now = Instant::now();
    let next = state.slide.read().retarget(target, now);
    state.slide.set(next);
}
