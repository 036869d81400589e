//! Debug toggle and secret code panel.
//!
//! A development aid only: the secret ships with the binary either way.

use dioxus::prelude::*;

use super::button::IconButton;
use super::icons::{EyeIcon, EyeOffIcon};

/// Corner button switching the secret panel on and off
#[component]
pub fn DebugToggle(shown: bool, ontoggle: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: ontoggle,
            aria_label: "Modo debug".to_string(),
            class: "debug-toggle".to_string(),
            if shown {
                EyeOffIcon {}
            } else {
                EyeIcon {}
            }
        }
    }
}

/// Panel printing the expected code
#[component]
pub fn SecretPanel(code: String) -> Element {
    rsx! {
        div { class: "secret-panel",
            "Senha correta: "
            span { class: "secret-code", "{code}" }
        }
    }
}
