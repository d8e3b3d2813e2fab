//! Shared UI primitives aligned with official Dioxus component patterns.

use dioxus::prelude::*;

/// Shared styles for button/input/textarea wrappers.
pub const UI_STYLES: &str = r"
.ui-button {
    border-radius: 10px;
    padding: 10px 12px;
    font-size: 15px;
    font-weight: 500;
    border: 1px solid transparent;
    background: transparent;
    cursor: pointer;
    transition: background-color 120ms ease, color 120ms ease, border-color 120ms ease;
}

.ui-button:disabled {
    opacity: 0.55;
}

.ui-button--block {
    width: 100%;
}

.ui-button--outline {
    background: transparent;
    color: #000000;
    border-color: #000000;
}

.ui-button--ghost {
    background: transparent;
    color: #000000;
    border-color: transparent;
}

.ui-input {
    width: 100%;
    border: 1px solid #000000;
    border-radius: 10px;
    padding: 10px 15px;
    font-size: 15px;
    background: #ffffff;
    color: #000000;
    outline: none;
    box-sizing: border-box;
}

.ui-textarea {
    width: 100%;
    border: 1px solid #000000;
    border-radius: 10px;
    padding: 10px 15px;
    font-size: 15px;
    background: #ffffff;
    color: #000000;
    outline: none;
    box-sizing: border-box;
    resize: none;
}
";

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Outline,
    Ghost,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] block: bool,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut class_name = format!("ui-button {}", variant.class());
    if block {
        class_name.push_str(" ui-button--block");
    }

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiInput(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "ui-input",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

#[component]
pub fn UiTextarea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "ui-textarea",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}
