//! Home view - the single Flick screen

use dioxus::prelude::*;

use crate::actions;
use crate::components::{ComposerPanel, NoteList};
use crate::state::AppState;
use crate::theme::PALETTE;
use crate::ui::{ButtonVariant, UiButton};

/// Home view component - the note list plus the composer overlay
#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100%;",

            h1 {
                style: "
                    font-size: 60px;
                    font-weight: 400;
                    margin: 20px 0;
                    padding-left: 5%;
                    color: {PALETTE.text_primary};
                ",
                "Tasks"
            }

            NoteList {}
        }

        // Floating add affordance above the list, bottom-right
        div {
            class: "add-button-container",
            style: "position: absolute; bottom: 0; right: 0; padding: 20px;",

            UiButton {
                variant: ButtonVariant::Ghost,
                style: "font-size: 40px; line-height: 1; padding: 8px 16px;",
                onclick: move |_| actions::open_composer(&mut state),
                "+"
            }
        }

        ComposerPanel {}
    }
}
