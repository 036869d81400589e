//! Agency Access Core Library
//!
//! Logic behind the two-agent access code screen.
//!
//! ## Overview
//!
//! A visitor types an 8-digit code into eight single-digit slots. The first
//! four digits belong to the left agent, the last four to the right agent.
//! Submitting compares each half against the secret; when both match, a
//! hidden message is typed out one character per timer tick.
//!
//! ## Quick Start
//!
//! ```
//! use agency_core::{AccessForm, SecretCode, SlotIndex, Status};
//!
//! let secret: SecretCode = "28461973".parse().unwrap();
//! let mut form = AccessForm::new(secret, "hidden message");
//!
//! form.paste(SlotIndex::FIRST, "2846-1973");
//! let submission = form.submit();
//!
//! assert_eq!(submission.status, Status::Success);
//! assert!(submission.restart_reveal);
//! ```

pub mod config;
pub mod digits;
pub mod error;
pub mod evaluator;
pub mod form;
pub mod reveal;
pub mod secret;

// Re-exports
pub use config::{AccessConfig, AgentNames, DEFAULT_MESSAGE};
pub use digits::{Direction, DigitSequence, Half, SlotIndex, HALF_LEN, SLOT_COUNT};
pub use error::{AccessError, AccessResult};
pub use evaluator::{evaluate, Status};
pub use form::{AccessForm, FormKey, ShakeCue, Submission};
pub use reveal::{run_reveal, Reveal, DEFAULT_REVEAL_INTERVAL};
pub use secret::{SecretCode, DEFAULT_SECRET};
