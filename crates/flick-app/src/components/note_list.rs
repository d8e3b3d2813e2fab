//! Note list component

use dioxus::prelude::*;

use super::NoteRow;
use crate::state::AppState;
use crate::theme::PALETTE;

/// Scrollable list of notes, one swipeable row per note
///
/// Rows are keyed by `NoteId`, so dismissing one row leaves the identity of
/// every other row untouched.
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let notes = state.visible_notes();

    rsx! {
        div {
            class: "note-list",
            style: "
                flex: 1;
                overflow-y: auto;
                overflow-x: hidden;
                padding: 0 16px 96px 16px;
            ",

            if notes.is_empty() {
                div {
                    style: "padding: 20px; text-align: center; color: {PALETTE.text_muted};",
                    "No notes yet"
                }
            } else {
                for note in notes {
                    {
                        let note_id = note.id;
                        let title = note.title_preview(40);
                        let preview = note.body_preview(60);

                        rsx! {
                            NoteRow {
                                key: "{note_id}",
                                id: note_id,
                                title,
                                preview,
                            }
                        }
                    }
                }
            }
        }
    }
}
