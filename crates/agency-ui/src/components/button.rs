//! Button Components
//!
//! - Protocol: the large "execute protocol" action with a sweeping shine
//! - Icon: round glass button in the corner (debug toggle)

use dioxus::prelude::*;

use super::icons::LockIcon;

/// Properties for the ProtocolButton component
#[derive(Clone, PartialEq, Props)]
pub struct ProtocolButtonProps {
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Small caption above the label
    #[props(default = "PROTOCOLO".to_string())]
    pub caption: String,
    /// Main label
    #[props(default = "EXECUTAR PROTOCOLO".to_string())]
    pub label: String,
}

/// The submit button of the access form
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProtocolButton { onclick: move |_| submit() }
/// }
/// ```
#[component]
pub fn ProtocolButton(props: ProtocolButtonProps) -> Element {
    rsx! {
        button {
            class: "btn-protocol",
            r#type: "button",
            onclick: move |_| props.onclick.call(()),

            span { class: "btn-shine-track",
                span { class: "btn-shine" }
            }
            span { class: "btn-protocol-body",
                span { class: "btn-protocol-text",
                    span { class: "btn-protocol-caption", "{props.caption}" }
                    span { class: "btn-protocol-label", "{props.label}" }
                }
                span { class: "btn-protocol-icon", LockIcon {} }
            }
        }
    }
}

/// Round icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}
