//! Composer panel component

use dioxus::prelude::*;

use flick_core::anim::PANEL_TRAVEL;

use crate::actions;
use crate::state::AppState;
use crate::theme::PALETTE;
use crate::ui::{ButtonVariant, UiButton, UiInput, UiTextarea};

/// Slide-up panel for composing a new note
///
/// The vertical offset is the interpolated visibility scalar times the
/// panel travel distance, so the frame driver is the only thing moving it.
#[component]
pub fn ComposerPanel() -> Element {
    let mut state = use_context::<AppState>();
    let composer = (state.composer)();
    let offset_px = (state.panel_offset)() * PANEL_TRAVEL;

    rsx! {
        div {
            class: "composer-panel",
            style: "
                position: absolute;
                left: 0;
                right: 0;
                bottom: 0;
                height: 85%;
                background: {PALETTE.bg_panel};
                border: 1px solid {PALETTE.border};
                border-bottom: none;
                border-radius: 50px 50px 0 0;
                display: flex;
                flex-direction: column;
                align-items: center;
                transform: translateY({offset_px}px);
            ",
            onkeydown: move |evt| {
                // Escape closes without committing
                if evt.key() == Key::Escape {
                    actions::cancel_composer(&mut state);
                }
            },

            div {
                class: "title-input-container",
                style: "margin-top: 50px; width: 90%; display: flex; flex-direction: column; gap: 15px;",

                label {
                    r#for: "draft-title",
                    style: "font-size: 25px; color: {PALETTE.text_primary};",
                    "Title"
                }
                UiInput {
                    id: "draft-title",
                    value: "{composer.title()}",
                    oninput: move |evt: FormEvent| state.composer.write().set_title(evt.value()),
                }
            }

            div {
                class: "body-input-container",
                style: "margin-top: 20px; width: 90%; display: flex; flex-direction: column; gap: 15px;",

                label {
                    r#for: "draft-body",
                    style: "font-size: 25px; color: {PALETTE.text_primary};",
                    "Description"
                }
                UiTextarea {
                    id: "draft-body",
                    rows: 4,
                    value: "{composer.body()}",
                    oninput: move |evt: FormEvent| state.composer.write().set_body(evt.value()),
                }
            }

            div {
                style: "margin-top: 20px; width: 90%; display: flex; justify-content: center;",

                UiButton {
                    variant: ButtonVariant::Outline,
                    block: true,
                    style: "height: 50px; font-size: 20px;",
                    onclick: move |_| actions::submit_draft(&mut state),
                    "Add"
                }
            }

            div {
                class: "cancel-button-container",
                style: "position: absolute; bottom: 0; right: 0; padding: 20px;",

                UiButton {
                    variant: ButtonVariant::Ghost,
                    style: "font-size: 28px; line-height: 1;",
                    onclick: move |_| actions::cancel_composer(&mut state),
                    "✕"
                }
            }
        }
    }
}
