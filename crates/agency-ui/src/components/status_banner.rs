//! Status Banner Component
//!
//! Shows the outcome of the last submission:
//! - idle: prompt asking for both keys
//! - error: rejection notice, shaking on every failure
//! - partial: which agent authenticated, waiting for the partner
//! - success: access granted, secret message typed out behind a caret

use agency_core::{AgentNames, Half, Status};
use dioxus::prelude::*;

use super::icons::{AlertIcon, LockIcon, ShieldIcon};

/// Headline text for a status
pub fn status_headline(status: Status, agents: &AgentNames) -> String {
    match status {
        Status::Idle => "INSIRA AS DUAS CHAVES PARA INICIAR O PROTOCOLO".to_string(),
        Status::Error => "CÓDIGO INVÁLIDO. TENTATIVA REGISTRADA.".to_string(),
        Status::LeftAuthenticated => partner_pending(agents.for_half(Half::Left)),
        Status::RightAuthenticated => partner_pending(agents.for_half(Half::Right)),
        Status::Success => "ACESSO CONCEDIDO".to_string(),
    }
}

fn partner_pending(agent: &str) -> String {
    format!("Agente {agent} autenticado. Aguardando parceiro.")
}

/// Icon shown next to the headline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerIcon {
    Alert,
    Lock,
    Shield,
}

/// Pick the headline icon: a lock while one agent waits for the other
pub fn banner_icon(status: Status) -> BannerIcon {
    if status == Status::Error {
        BannerIcon::Alert
    } else if status.is_partial() {
        BannerIcon::Lock
    } else {
        BannerIcon::Shield
    }
}

/// CSS classes for the banner container
pub fn banner_class(status: Status, shake_class: &str) -> String {
    let tone = match status {
        Status::Idle => "status-idle",
        Status::Error => "status-error",
        Status::LeftAuthenticated => "status-left",
        Status::RightAuthenticated => "status-right",
        Status::Success => "status-success",
    };
    if status == Status::Error && !shake_class.is_empty() {
        format!("status-banner {tone} {shake_class}")
    } else {
        format!("status-banner {tone}")
    }
}

/// Properties for the StatusBanner component
#[derive(Clone, PartialEq, Props)]
pub struct StatusBannerProps {
    pub status: Status,
    pub agents: AgentNames,
    /// Revealed part of the secret message (success only)
    #[props(default)]
    pub revealed: String,
    /// Class from the shake cue, alternates on each failure
    #[props(default)]
    pub shake_class: String,
}

/// Displays the current submission status
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusBanner {
///         status: Status::LeftAuthenticated,
///         agents: AgentNames::default(),
///     }
/// }
/// ```
#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let headline = status_headline(props.status, &props.agents);
    let class = banner_class(props.status, &props.shake_class);

    rsx! {
        div {
            class: "{class}",
            role: "status",
            "aria-live": "polite",

            div { class: "status-headline",
                {
                    match banner_icon(props.status) {
                        BannerIcon::Alert => rsx! { AlertIcon {} },
                        BannerIcon::Lock => rsx! { LockIcon {} },
                        BannerIcon::Shield => rsx! { ShieldIcon {} },
                    }
                }
                span { "{headline}" }
            }

            if props.status == Status::Success {
                div { class: "reveal-box",
                    span { class: "reveal-text", "{props.revealed}" }
                    span { class: "reveal-caret" }
                }
            }
        }
    }
}
