//! Swipeable note row component

use dioxus::prelude::*;

use flick_core::swipe::{SwipeOutcome, SwipeTracker};
use flick_core::NoteId;

use crate::actions;
use crate::state::AppState;
use crate::theme::PALETTE;

/// A single note row, swiped left to dismiss
#[component]
pub fn NoteRow(id: NoteId, title: String, preview: String) -> Element {
    let mut state = use_context::<AppState>();
    let mut tracker = use_signal(|| None::<SwipeTracker>);
    let mut offset = use_signal(|| 0.0f32);

    let dragging = tracker.read().is_some();
    let offset_px = offset();
    // Live dragging tracks the pointer directly; snap-back animates.
    let transition = if dragging {
        "none"
    } else {
        "transform 150ms ease"
    };

    rsx! {
        div {
            class: "note-row",
            style: "
                background: {PALETTE.bg_row};
                border-radius: 10px;
                box-shadow: 0 10px 20px {PALETTE.shadow};
                padding: 14px 16px;
                margin-bottom: 12px;
                touch-action: pan-y;
                user-select: none;
                cursor: grab;
                transform: translateX({offset_px}px);
                transition: {transition};
            ",

            onpointerdown: move |evt| {
                #[allow(clippy::cast_possible_truncation)]
                let x = evt.client_coordinates().x as f32;
                tracker.set(Some(SwipeTracker::begin(x)));
            },
            onpointermove: move |evt| {
                if tracker.peek().is_none() {
                    return;
                }
                #[allow(clippy::cast_possible_truncation)]
                let x = evt.client_coordinates().x as f32;
                if let Some(swipe) = tracker.write().as_mut() {
                    offset.set(swipe.update(x));
                }
            },
            onpointerup: move |_| {
                if let Some(swipe) = tracker.take() {
                    match swipe.release(state.row_width()) {
                        SwipeOutcome::Dismiss => actions::dismiss_note(&mut state, id),
                        SwipeOutcome::Settle => offset.set(0.0),
                    }
                }
            },
            onpointercancel: move |_| {
                if tracker.peek().is_some() {
                    tracker.set(None);
                    offset.set(0.0);
                }
            },
            onpointerleave: move |_| {
                if tracker.peek().is_some() {
                    tracker.set(None);
                    offset.set(0.0);
                }
            },

            div {
                class: "note-title",
                style: "
                    font-weight: 500;
                    margin-bottom: 4px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    color: {PALETTE.text_primary};
                ",
                "{title}"
            }

            div {
                class: "note-preview",
                style: "
                    font-size: 12px;
                    color: {PALETTE.text_muted};
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{preview}"
            }
        }
    }
}
