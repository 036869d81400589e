//! Digit Slot Component
//!
//! One single-digit input of the access code. Slots of the left agent use
//! the fuchsia accent, slots of the right agent the cyan accent.

use agency_core::{FormKey, Half, SlotIndex};
use dioxus::prelude::*;

/// Map a key press in a digit slot to a form key.
///
/// `None` leaves the key to the input itself. That includes the paste
/// shortcuts, which reach the slot as a paste event.
pub fn slot_form_key(key: &Key) -> Option<FormKey> {
    match key {
        Key::Backspace => Some(FormKey::Backspace),
        Key::ArrowLeft => Some(FormKey::ArrowLeft),
        Key::ArrowRight => Some(FormKey::ArrowRight),
        Key::Enter => Some(FormKey::Enter),
        _ => None,
    }
}

/// Text an input shows for a stored digit
pub fn slot_text(value: Option<char>) -> String {
    value.map(String::from).unwrap_or_default()
}

/// Whether the text left in an input after an edit differs from the stored
/// digit. The renderer only writes `value` when it changes, so rejected
/// characters stay on screen unless written back.
pub fn input_is_stale(raw: &str, stored: Option<char>) -> bool {
    raw != slot_text(stored)
}

/// CSS class for the agent owning a slot
pub fn half_class(half: Half) -> &'static str {
    match half {
        Half::Left => "digit-left",
        Half::Right => "digit-right",
    }
}

/// DOM id of a slot's input
pub fn slot_dom_id(slot: SlotIndex) -> String {
    format!("digit-{}", slot.get())
}

/// Properties for the DigitSlot component
#[derive(Clone, PartialEq, Props)]
pub struct DigitSlotProps {
    /// Position of this slot
    pub slot: SlotIndex,
    /// Digit currently stored
    pub value: Option<char>,
    /// Raw text entered into the input
    pub oninput: EventHandler<String>,
    /// Key presses, before the input handles them
    pub onkeydown: EventHandler<KeyboardEvent>,
    /// The input gained focus (click, tab or programmatic)
    pub onfocus: EventHandler<()>,
    /// Any paste into the input: shortcut, context menu or autofill.
    /// The browser's own insertion is suppressed.
    pub onpaste: EventHandler<()>,
}

/// A single digit input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DigitSlot {
///         slot,
///         value: form.read().digits().get(slot),
///         oninput: move |text: String| on_input(slot, text),
///         onkeydown: move |evt| on_key(slot, evt),
///         onfocus: move |_| form.write().focus_slot(slot),
///         onpaste: move |_| paste_clipboard(form, slot),
///     }
/// }
/// ```
#[component]
pub fn DigitSlot(props: DigitSlotProps) -> Element {
    let class = format!("digit-slot {}", half_class(props.slot.half()));
    let value = slot_text(props.value);
    let position = props.slot.get() + 1;
    let id = slot_dom_id(props.slot);

    rsx! {
        input {
            id: "{id}",
            class: "{class}",
            r#type: "text",
            inputmode: "numeric",
            autocomplete: "one-time-code",
            maxlength: "1",
            value: "{value}",
            "aria-label": "Dígito {position}",
            oninput: move |e| props.oninput.call(e.value()),
            onkeydown: move |e| props.onkeydown.call(e),
            onfocus: move |_| props.onfocus.call(()),
            onpaste: move |e| {
                e.prevent_default();
                props.onpaste.call(());
            },
        }
    }
}
