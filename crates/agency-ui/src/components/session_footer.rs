//! Session Footer Component
//!
//! Channel label on the left, the code typed so far on the right.

use agency_core::DigitSequence;
use dioxus::prelude::*;

/// Placeholder shown for an empty slot
pub const EMPTY_SLOT_MARK: char = '•';

/// Text of the session indicator
pub fn session_label(digits: &DigitSequence) -> String {
    format!("SESSÃO: {}", digits.display_with(EMPTY_SLOT_MARK))
}

#[component]
pub fn SessionFooter(digits: DigitSequence) -> Element {
    let session = session_label(&digits);

    rsx! {
        footer { class: "session-footer",
            span { "CANAL: CRIPTOGRAFADO" }
            span { "{session}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_core::SlotIndex;

    #[test]
    fn empty_session_is_all_marks() {
        assert_eq!(session_label(&DigitSequence::new()), "SESSÃO: ••••••••");
    }

    #[test]
    fn session_shows_filled_slots_in_place() {
        let mut digits = DigitSequence::new();
        digits.set(SlotIndex::FIRST, Some('2'));
        digits.set(SlotIndex::LAST, Some('3'));
        assert_eq!(session_label(&digits), "SESSÃO: 2••••••3");
    }
}
