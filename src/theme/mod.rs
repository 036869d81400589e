//! Visual theme for the access screen.

mod styles;

pub use styles::GLOBAL_STYLES;
