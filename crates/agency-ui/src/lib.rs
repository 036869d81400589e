//! Agency Access UI Components
//!
//! Dioxus components for the secret agency access screen.
//!
//! ## Look
//!
//! Dark glass panels over a slate background, one accent per agent:
//! - **Fuchsia**: left agent's digits and partial status
//! - **Cyan**: right agent's digits and partial status
//! - **Emerald**: granted access, the protocol button
//! - **Red**: rejected code, with a shake on every failure
//!
//! The components are stateless; the page owns an `AccessForm` and passes
//! values and handlers down.

pub mod components;

pub use components::*;
