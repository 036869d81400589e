//! Access form controller.
//!
//! `AccessForm` holds everything the access screen shows: the digit slots,
//! which slot has focus, the last submission's status, the shake cue and the
//! reveal cursor. The UI calls the handlers below from its event callbacks
//! and renders from the accessors; no other code mutates the state.
//!
//! ## Example
//!
//! ```
//! use agency_core::{AccessForm, FormKey, SecretCode, SlotIndex, Status};
//!
//! let mut form = AccessForm::new(SecretCode::default(), "message");
//! form.paste(SlotIndex::FIRST, "28460000");
//! let submission = form.handle_key(SlotIndex::LAST, FormKey::Enter);
//!
//! assert_eq!(submission.map(|s| s.status), Some(Status::LeftAuthenticated));
//! ```

use crate::digits::{only_digits, DigitSequence, Direction, SlotIndex};
use crate::evaluator::{evaluate, Status};
use crate::reveal::Reveal;
use crate::secret::SecretCode;

/// Navigation and action keys the form reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Backspace,
    ArrowLeft,
    ArrowRight,
    Enter,
}

/// What a submission decided, and what the caller must do about it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// Status after evaluation
    pub status: Status,
    /// The reveal cursor was reset; (re)start the reveal timer
    pub restart_reveal: bool,
    /// The shake cue was bumped
    pub shake: bool,
}

impl Submission {
    /// Whether a running reveal timer must be stopped
    pub fn cancels_reveal(&self) -> bool {
        self.status != Status::Success
    }
}

/// Replay counter for the failure animation.
///
/// CSS animations only replay when the class changes, so the cue alternates
/// between two classes sharing the same keyframes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShakeCue(u32);

impl ShakeCue {
    /// Number of failed submissions so far
    pub fn count(&self) -> u32 {
        self.0
    }

    /// Replay the cue
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Class to attach to the status banner
    pub fn class(&self) -> &'static str {
        match self.0 {
            0 => "",
            n if n % 2 == 1 => "shake-odd",
            _ => "shake-even",
        }
    }
}

/// State and handlers of the access screen
#[derive(Debug, Clone, PartialEq)]
pub struct AccessForm {
    secret: SecretCode,
    message: String,
    digits: DigitSequence,
    focus: SlotIndex,
    status: Status,
    shake: ShakeCue,
    reveal: Reveal,
    show_secret: bool,
}

impl AccessForm {
    /// A fresh form: empty slots, focus on the first slot, status idle
    pub fn new(secret: SecretCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let reveal = Reveal::for_message(&message);
        Self {
            secret,
            message,
            digits: DigitSequence::new(),
            focus: SlotIndex::FIRST,
            status: Status::Idle,
            shake: ShakeCue::default(),
            reveal,
            show_secret: false,
        }
    }

    /// Start with the secret panel open or closed
    pub fn with_secret_shown(mut self, shown: bool) -> Self {
        self.show_secret = shown;
        self
    }

    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }

    /// Slot that should hold keyboard focus
    pub fn focus(&self) -> SlotIndex {
        self.focus
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn shake(&self) -> ShakeCue {
        self.shake
    }

    pub fn reveal(&self) -> Reveal {
        self.reveal
    }

    /// The part of the secret message revealed so far
    pub fn revealed_text(&self) -> &str {
        self.reveal.visible(&self.message)
    }

    pub fn secret(&self) -> &SecretCode {
        &self.secret
    }

    pub fn is_secret_shown(&self) -> bool {
        self.show_secret
    }

    /// Open or close the secret panel
    pub fn toggle_secret(&mut self) {
        self.show_secret = !self.show_secret;
    }

    /// Move focus to a slot
    pub fn focus_slot(&mut self, slot: SlotIndex) {
        self.focus = slot;
    }

    /// Handle new text in a slot.
    ///
    /// Non-digits are dropped and only the last remaining digit is kept; text
    /// without digits empties the slot. Entering a digit moves focus right.
    pub fn set_digit(&mut self, slot: SlotIndex, text: &str) {
        let digit = only_digits(text).last();
        self.digits.set(slot, digit);

        if digit.is_some() {
            if let Some(next) = slot.next() {
                self.focus = next;
            }
        }
    }

    /// Handle Backspace in a slot.
    ///
    /// A filled slot is cleared in place. An empty slot clears its left
    /// neighbour and moves focus there.
    pub fn backspace(&mut self, slot: SlotIndex) {
        if self.digits.is_filled(slot) {
            self.digits.clear(slot);
            return;
        }
        if let Some(prev) = slot.prev() {
            self.digits.clear(prev);
            self.focus = prev;
        }
    }

    /// Move focus one slot left or right; digits are untouched
    pub fn arrow(&mut self, slot: SlotIndex, direction: Direction) {
        let target = match direction {
            Direction::Left => slot.prev(),
            Direction::Right => slot.next(),
        };
        if let Some(target) = target {
            self.focus = target;
        }
    }

    /// Write pasted digits into consecutive slots starting at `slot`.
    ///
    /// Digits beyond the last slot are discarded. Focus lands on the last
    /// written slot. Returns `false` when the text had no digits, in which
    /// case nothing changes.
    pub fn paste(&mut self, slot: SlotIndex, text: &str) -> bool {
        let mut last_written = None;
        for (target, digit) in SlotIndex::all().skip(slot.get()).zip(only_digits(text)) {
            self.digits.set(target, Some(digit));
            last_written = Some(target);
        }

        match last_written {
            Some(last) => {
                self.focus = last;
                true
            }
            None => false,
        }
    }

    /// Route a key press in `slot`. Enter submits and returns the submission.
    pub fn handle_key(&mut self, slot: SlotIndex, key: FormKey) -> Option<Submission> {
        match key {
            FormKey::Backspace => self.backspace(slot),
            FormKey::ArrowLeft => self.arrow(slot, Direction::Left),
            FormKey::ArrowRight => self.arrow(slot, Direction::Right),
            FormKey::Enter => return Some(self.submit()),
        }
        None
    }

    /// Evaluate the entered code and update the status.
    pub fn submit(&mut self) -> Submission {
        let status = evaluate(&self.digits, &self.secret);
        self.status = status;

        let restart_reveal = status == Status::Success;
        if restart_reveal {
            self.reveal.restart();
        }

        let shake = status == Status::Error;
        if shake {
            self.shake.bump();
        }

        tracing::debug!(
            status = %status,
            filled = self.digits.filled_count(),
            "Access code submitted"
        );

        Submission {
            status,
            restart_reveal,
            shake,
        }
    }

    /// Advance the reveal by one character.
    ///
    /// Returns `true` while the reveal should keep ticking. Outside of
    /// `Success` nothing advances and `false` is returned.
    pub fn tick_reveal(&mut self) -> bool {
        if self.status != Status::Success {
            return false;
        }
        self.reveal.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(i: usize) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    fn form() -> AccessForm {
        AccessForm::new(SecretCode::default(), "abc")
    }

    #[test]
    fn new_form_is_idle_and_empty() {
        let form = form();
        assert_eq!(form.status(), Status::Idle);
        assert!(form.digits().is_empty());
        assert_eq!(form.focus(), SlotIndex::FIRST);
        assert_eq!(form.revealed_text(), "");
        assert!(!form.is_secret_shown());
    }

    #[test]
    fn set_digit_keeps_last_digit_and_advances() {
        let mut form = form();
        form.set_digit(slot(2), "a4b7");
        assert_eq!(form.digits().get(slot(2)), Some('7'));
        assert_eq!(form.focus(), slot(3));
    }

    #[test]
    fn set_digit_on_last_slot_keeps_focus() {
        let mut form = form();
        form.focus_slot(SlotIndex::LAST);
        form.set_digit(SlotIndex::LAST, "3");
        assert_eq!(form.focus(), SlotIndex::LAST);
    }

    #[test]
    fn set_digit_without_digits_clears_and_stays() {
        let mut form = form();
        form.set_digit(slot(1), "5");
        form.focus_slot(slot(1));
        form.set_digit(slot(1), "x");
        assert_eq!(form.digits().get(slot(1)), None);
        assert_eq!(form.focus(), slot(1));
    }

    #[test]
    fn backspace_clears_filled_slot_in_place() {
        let mut form = form();
        form.set_digit(slot(3), "9");
        form.focus_slot(slot(3));
        form.backspace(slot(3));
        assert_eq!(form.digits().get(slot(3)), None);
        assert_eq!(form.focus(), slot(3));
    }

    #[test]
    fn backspace_on_empty_slot_clears_previous() {
        let mut form = form();
        form.paste(SlotIndex::FIRST, "123");
        form.focus_slot(slot(3));
        form.backspace(slot(3));
        assert_eq!(form.digits().get(slot(2)), None);
        assert_eq!(form.digits().get(slot(1)), Some('2'));
        assert_eq!(form.focus(), slot(2));
    }

    #[test]
    fn backspace_on_first_slot() {
        let mut form = form();
        form.backspace(SlotIndex::FIRST);
        assert!(form.digits().is_empty());
        assert_eq!(form.focus(), SlotIndex::FIRST);

        form.set_digit(SlotIndex::FIRST, "4");
        form.backspace(SlotIndex::FIRST);
        assert!(form.digits().is_empty());
    }

    #[test]
    fn arrows_move_focus_within_bounds() {
        let mut form = form();
        form.arrow(SlotIndex::FIRST, Direction::Left);
        assert_eq!(form.focus(), SlotIndex::FIRST);
        form.arrow(SlotIndex::FIRST, Direction::Right);
        assert_eq!(form.focus(), slot(1));
        form.arrow(SlotIndex::LAST, Direction::Right);
        assert_eq!(form.focus(), slot(1));
        form.arrow(SlotIndex::LAST, Direction::Left);
        assert_eq!(form.focus(), slot(6));
        assert!(form.digits().is_empty());
    }

    #[test]
    fn paste_fills_all_slots() {
        let mut form = form();
        assert!(form.paste(SlotIndex::FIRST, "123456789"));
        assert_eq!(form.digits().display_with('_'), "12345678");
        assert_eq!(form.focus(), SlotIndex::LAST);
    }

    #[test]
    fn paste_from_middle_stops_at_last_slot() {
        let mut form = form();
        form.paste(slot(5), "9 8-7 6");
        assert_eq!(form.digits().display_with('_'), "_____987");
        assert_eq!(form.focus(), SlotIndex::LAST);
    }

    #[test]
    fn paste_short_text_focuses_last_written() {
        let mut form = form();
        form.paste(slot(1), "42");
        assert_eq!(form.focus(), slot(2));
    }

    #[test]
    fn paste_without_digits_is_noop() {
        let mut form = form();
        form.focus_slot(slot(4));
        assert!(!form.paste(slot(4), "code?"));
        assert!(form.digits().is_empty());
        assert_eq!(form.focus(), slot(4));
    }

    #[test]
    fn enter_submits() {
        let mut form = form();
        form.paste(SlotIndex::FIRST, "00001973");
        let submission = form.handle_key(slot(7), FormKey::Enter).unwrap();
        assert_eq!(submission.status, Status::RightAuthenticated);
        assert!(submission.cancels_reveal());
        assert_eq!(form.handle_key(slot(7), FormKey::ArrowLeft), None);
        assert_eq!(form.focus(), slot(6));
    }

    #[test]
    fn error_bumps_shake() {
        let mut form = form();
        let first = form.submit();
        assert_eq!(first.status, Status::Error);
        assert!(first.shake);
        assert_eq!(form.shake().class(), "shake-odd");

        form.submit();
        assert_eq!(form.shake().count(), 2);
        assert_eq!(form.shake().class(), "shake-even");
    }

    #[test]
    fn partial_does_not_shake() {
        let mut form = form();
        form.paste(SlotIndex::FIRST, "28460000");
        let submission = form.submit();
        assert!(!submission.shake);
        assert_eq!(form.shake().count(), 0);
        assert_eq!(form.shake().class(), "");
    }

    #[test]
    fn editing_does_not_change_status() {
        let mut form = form();
        form.paste(SlotIndex::FIRST, "28461973");
        form.submit();
        form.backspace(SlotIndex::LAST);
        form.set_digit(SlotIndex::FIRST, "0");
        assert_eq!(form.status(), Status::Success);
    }

    #[test]
    fn reveal_only_ticks_on_success() {
        let mut form = form();
        assert!(!form.tick_reveal());
        assert_eq!(form.reveal().cursor(), 0);

        form.paste(SlotIndex::FIRST, "28461973");
        let submission = form.submit();
        assert!(submission.restart_reveal);
        assert!(form.tick_reveal());
        assert!(form.tick_reveal());
        assert!(!form.tick_reveal());
        assert_eq!(form.revealed_text(), "abc");
    }

    #[test]
    fn resubmitting_success_restarts_reveal() {
        let mut form = form();
        form.paste(SlotIndex::FIRST, "28461973");
        form.submit();
        form.tick_reveal();
        form.tick_reveal();
        assert_eq!(form.reveal().cursor(), 2);

        form.submit();
        assert_eq!(form.reveal().cursor(), 0);
        assert_eq!(form.revealed_text(), "");
    }

    #[test]
    fn leaving_success_stops_reveal() {
        let mut form = form();
        form.paste(SlotIndex::FIRST, "28461973");
        form.submit();
        form.tick_reveal();

        form.set_digit(SlotIndex::FIRST, "9");
        let submission = form.submit();
        assert_eq!(submission.status, Status::RightAuthenticated);
        assert!(submission.cancels_reveal());
        assert!(!form.tick_reveal());
    }

    #[test]
    fn toggle_secret_panel() {
        let mut form = form().with_secret_shown(true);
        assert!(form.is_secret_shown());
        form.toggle_secret();
        assert!(!form.is_secret_shown());
    }
}
