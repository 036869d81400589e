//! Reusable components for the access screen
//!
//! All class names match the global stylesheet shipped by the desktop app.

mod button;
mod digit_slot;
mod icons;
mod secret_panel;
mod session_footer;
mod status_banner;

pub use button::*;
pub use digit_slot::*;
pub use icons::*;
pub use secret_panel::*;
pub use session_footer::*;
pub use status_banner::*;
