//! App-level helpers for the access screen.
//!
//! Presentational components live in `agency-ui`; this module holds the
//! pieces tied to the desktop runtime.

mod clipboard;
mod reveal_timer;

pub use clipboard::read_clipboard;
pub use reveal_timer::{use_reveal_timer, RevealTimer};
