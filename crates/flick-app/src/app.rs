//! Main application component

use std::time::{Duration, Instant};

use dioxus::prelude::*;

use flick_core::anim::Slide;
use flick_core::{Composer, NoteStore, Visibility};

use crate::config;
use crate::state::AppState;
use crate::theme::PALETTE;
use crate::ui::UI_STYLES;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let store = use_signal(NoteStore::seeded);
    let composer = use_signal(Composer::new);
    let slide = use_signal(|| Slide::settled(Visibility::Closed.target(), Instant::now()));
    let mut panel_offset = use_signal(|| Visibility::Closed.target());

    // Drive the slide timeline at ~60fps. Only the interpolated scalar is
    // written back, and only while it is actually moving, so a settled
    // panel costs no re-renders.
    use_future(move || async move {
        loop {
            let now = Instant::now();
            let value = slide.peek().value_at(now);
            if (value - *panel_offset.peek()).abs() > f32::EPSILON {
                panel_offset.set(value);
            }
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    });

    use_context_provider(|| AppState {
        store,
        composer,
        slide,
        panel_offset,
        config: config::app_config(),
    });

    rsx! {
        style { "{UI_STYLES}" }

        div {
            class: "app-container",
            style: "
                position: relative;
                height: 100vh;
                overflow: hidden;
                font-family: system-ui, -apple-system, sans-serif;
                background: {PALETTE.bg_screen};
                color: {PALETTE.text_primary};
            ",
            Home {}
        }
    }
}
