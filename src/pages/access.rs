//! Access screen - the whole application.
//!
//! "Operação Noite Feliz": two agents each hold half of an 8-digit code.
//! Both halves open the vault and the hidden message is typed out.

use agency_core::{AccessForm, Half, SlotIndex, Submission};
use agency_ui::{
    input_is_stale, slot_dom_id, slot_form_key, slot_text, DebugToggle, DigitSlot,
    ProtocolButton, SecretPanel, SessionFooter, ShieldIcon, StatusBanner,
};
use dioxus::prelude::*;

use crate::components::{read_clipboard, use_reveal_timer};
use crate::context::use_access_config;

/// Run a script against a slot's input element, bound as `el`.
fn with_slot_element(slot: SlotIndex, action: &'static str, body: String) {
    let id = slot_dom_id(slot);
    let script = format!(
        "const el = document.getElementById('{id}'); if (!el) {{ return false; }} {body} return true;"
    );
    spawn(async move {
        if let Err(e) = dioxus::document::eval(&script).await {
            tracing::trace!(slot = %slot, "Failed to {} digit slot: {:?}", action, e);
        }
    });
}

/// Move keyboard focus to a slot and select its content, so the next digit
/// typed replaces the current one.
fn focus_slot(slot: SlotIndex) {
    with_slot_element(slot, "focus", "el.focus(); el.select();".to_string());
}

/// Overwrite a slot's input with the stored digit.
fn show_stored_digit(slot: SlotIndex, value: Option<char>) {
    let text = slot_text(value);
    with_slot_element(slot, "sync", format!("el.value = '{text}';"));
}

/// Paste the system clipboard into the form starting at `slot`.
fn paste_clipboard(mut form: Signal<AccessForm>, slot: SlotIndex) {
    spawn(async move {
        if let Some(text) = read_clipboard().await {
            if !form.write().paste(slot, &text) {
                tracing::debug!("Clipboard held no digits");
            }
        }
    });
}

/// Access screen component.
///
/// Owns the `AccessForm`; every event handler below is a thin call into it.
#[component]
pub fn AccessScreen() -> Element {
    let config = use_access_config();
    let mut form = use_signal(|| config.new_form());
    let mut reveal_timer = use_reveal_timer();
    let interval = config.reveal_interval();

    // Keyboard focus follows the form's focused slot
    let focused = use_memo(move || form.read().focus());
    use_effect(move || focus_slot(focused()));

    let mut apply_submission = move |submission: Submission| {
        if submission.cancels_reveal() {
            reveal_timer.cancel();
        }
        if submission.restart_reveal {
            reveal_timer.restart(interval, form);
        }
    };

    let mut submit = move || {
        let submission = form.write().submit();
        apply_submission(submission);
    };

    let mut on_key = move |slot: SlotIndex, evt: KeyboardEvent| {
        let Some(key) = slot_form_key(&evt.key()) else {
            return;
        };
        evt.prevent_default();
        let submission = form.write().handle_key(slot, key);
        if let Some(submission) = submission {
            apply_submission(submission);
        }
    };

    let mut on_input = move |slot: SlotIndex, text: String| {
        let stored = {
            let mut state = form.write();
            state.set_digit(slot, &text);
            state.digits().get(slot)
        };
        if input_is_stale(&text, stored) {
            show_stored_digit(slot, stored);
        }
    };

    let state = form.read();
    let digits = state.digits().clone();
    let status = state.status();
    let revealed = state.revealed_text().to_string();
    let shake_class = state.shake().class().to_string();
    let show_secret = state.is_secret_shown();
    let secret_code = state.secret().expose();
    drop(state);

    let left_agent = config.agents.for_half(Half::Left).to_uppercase();
    let right_agent = config.agents.for_half(Half::Right).to_uppercase();

    rsx! {
        main { class: "agency",
            div { class: "agency-glow" }
            div { class: "agency-scanlines" }

            DebugToggle {
                shown: show_secret,
                ontoggle: move |_| form.write().toggle_secret(),
            }

            div { class: "agency-shell",
                section { class: "agency-card",
                    header { class: "agency-header",
                        div { class: "agency-header-row",
                            div { class: "agency-badge",
                                ShieldIcon {}
                                "AGÊNCIA SECRETA"
                            }
                            div { class: "agency-case-id", "ID 2025-004" }
                        }
                        h1 { class: "agency-title", "OPERAÇÃO NOITE FELIZ" }
                        p { class: "agency-tagline",
                            "Autenticação dupla necessária. Duas chaves, um único destino."
                        }
                    }

                    div { class: "digit-board",
                        div { class: "digit-half",
                            span { class: "digit-half-label label-left", "AGENTE {left_agent}" }
                            div { class: "digit-group",
                                for slot in Half::Left.slots() {
                                    DigitSlot {
                                        key: "{slot}",
                                        slot,
                                        value: digits.get(slot),
                                        oninput: move |text: String| on_input(slot, text),
                                        onkeydown: move |evt: KeyboardEvent| on_key(slot, evt),
                                        onfocus: move |_| form.write().focus_slot(slot),
                                        onpaste: move |_| paste_clipboard(form, slot),
                                    }
                                }
                            }
                        }

                        div { class: "digit-divider" }

                        div { class: "digit-half",
                            span { class: "digit-half-label label-right", "AGENTE {right_agent}" }
                            div { class: "digit-group",
                                for slot in Half::Right.slots() {
                                    DigitSlot {
                                        key: "{slot}",
                                        slot,
                                        value: digits.get(slot),
                                        oninput: move |text: String| on_input(slot, text),
                                        onkeydown: move |evt: KeyboardEvent| on_key(slot, evt),
                                        onfocus: move |_| form.write().focus_slot(slot),
                                        onpaste: move |_| paste_clipboard(form, slot),
                                    }
                                }
                            }
                        }
                    }

                    if show_secret {
                        SecretPanel { code: secret_code }
                    }

                    ProtocolButton { onclick: move |_| submit() }

                    StatusBanner {
                        status,
                        agents: config.agents.clone(),
                        revealed,
                        shake_class,
                    }

                    SessionFooter { digits: digits.clone() }
                }
            }
        }
    }
}
