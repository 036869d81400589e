//! Context access for the Agency Access screen.
//!
//! The launcher places the validated [`AccessConfig`] in root context; pages
//! read it with [`use_access_config`].
//!
//! ## Usage
//!
//! ```ignore
//! let config = use_access_config();
//! let form = use_signal(|| config.new_form());
//! ```

use agency_core::AccessConfig;
use dioxus::prelude::*;

/// Hook to access the process-wide access configuration.
pub fn use_access_config() -> AccessConfig {
    use_context::<AccessConfig>()
}
