//! Configuration for the access screen.
//!
//! Every field has a default, so an empty JSON object is a valid file:
//!
//! ```json
//! {
//!   "secret": "28461973",
//!   "message": "casa da sanja, cozinha, gaveta, em baixo dos panos de prato",
//!   "reveal_interval_ms": 26,
//!   "agents": { "left": "Amanda", "right": "Gabriel" },
//!   "show_secret": false
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::digits::Half;
use crate::error::{AccessError, AccessResult};
use crate::form::AccessForm;
use crate::reveal::DEFAULT_REVEAL_INTERVAL;
use crate::secret::SecretCode;

/// Message revealed when no configuration overrides it
pub const DEFAULT_MESSAGE: &str = "casa da sanja, cozinha, gaveta, em baixo dos panos de prato";

/// Display names of the two agents holding one half each
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentNames {
    pub left: String,
    pub right: String,
}

impl AgentNames {
    /// Name of the agent owning `half`
    pub fn for_half(&self, half: Half) -> &str {
        match half {
            Half::Left => &self.left,
            Half::Right => &self.right,
        }
    }
}

impl Default for AgentNames {
    fn default() -> Self {
        Self {
            left: "Amanda".to_string(),
            right: "Gabriel".to_string(),
        }
    }
}

/// Settings fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Code both agents must enter
    pub secret: SecretCode,
    /// Text typed out after a successful match
    pub message: String,
    /// Milliseconds between revealed characters
    pub reveal_interval_ms: u64,
    /// Agent display names
    pub agents: AgentNames,
    /// Whether the secret panel starts open
    pub show_secret: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            secret: SecretCode::default(),
            message: DEFAULT_MESSAGE.to_string(),
            reveal_interval_ms: DEFAULT_REVEAL_INTERVAL.as_millis() as u64,
            agents: AgentNames::default(),
            show_secret: false,
        }
    }
}

impl AccessConfig {
    /// Load a JSON configuration file and validate it
    pub fn from_json_file(path: impl AsRef<Path>) -> AccessResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded access configuration");
        Ok(config)
    }

    /// Reject values the screen cannot work with
    pub fn validate(&self) -> AccessResult<()> {
        if self.reveal_interval_ms == 0 {
            return Err(AccessError::InvalidConfig(
                "reveal_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.agents.left.trim().is_empty() || self.agents.right.trim().is_empty() {
            return Err(AccessError::InvalidConfig(
                "agent names must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Interval between revealed characters
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    /// A fresh form using this configuration
    pub fn new_form(&self) -> AccessForm {
        AccessForm::new(self.secret.clone(), self.message.clone())
            .with_secret_shown(self.show_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AccessConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reveal_interval(), Duration::from_millis(26));
        assert_eq!(config.agents.for_half(Half::Left), "Amanda");
        assert_eq!(config.agents.for_half(Half::Right), "Gabriel");
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: AccessConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AccessConfig::default());
    }

    #[test]
    fn partial_agents_keep_other_default() {
        let config: AccessConfig =
            serde_json::from_str(r#"{ "agents": { "left": "Ana" } }"#).unwrap();
        assert_eq!(config.agents.left, "Ana");
        assert_eq!(config.agents.right, "Gabriel");
    }

    #[test]
    fn zero_interval_rejected() {
        let config = AccessConfig {
            reveal_interval_ms: 0,
            ..AccessConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AccessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn blank_agent_rejected() {
        let mut config = AccessConfig::default();
        config.agents.right = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn new_form_honours_show_secret() {
        let config = AccessConfig {
            show_secret: true,
            ..AccessConfig::default()
        };
        assert!(config.new_form().is_secret_shown());
        assert!(!AccessConfig::default().new_form().is_secret_shown());
    }
}
