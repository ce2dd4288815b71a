//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! [initial]
//! time = 72.0
//! money = 1000000
//!
//! [talents]
//! offer_size = 3
//! refreshes = 1
//!
//! [pacing]
//! transition_delay_ms = 3500
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use exile_rules::InitialStats;

use crate::error::{EngineError, Result};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Starting stats for every run.
    #[serde(default)]
    pub initial: InitialStats,
    /// Talent offer settings.
    #[serde(default)]
    pub talents: TalentConfig,
    /// Presentation pacing.
    #[serde(default)]
    pub pacing: PacingConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `EngineError::Config` if the TOML is invalid or fails validation.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject settings the session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.talents.offer_size == 0 {
            return Err(EngineError::Config(
                "talents.offer_size must be at least 1".to_string(),
            ));
        }
        if !self.initial.time.is_finite() || self.initial.time < 0.0 {
            return Err(EngineError::Config(
                "initial.time must be a non-negative number of hours".to_string(),
            ));
        }
        Ok(())
    }
}

/// Talent offer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentConfig {
    /// Number of talents drawn for the player to pick from.
    #[serde(default = "default_offer_size")]
    pub offer_size: usize,
    /// How many times the offer may be re-drawn per run.
    #[serde(default = "default_refreshes")]
    pub refreshes: u32,
}

fn default_offer_size() -> usize {
    3
}

fn default_refreshes() -> u32 {
    1
}

impl Default for TalentConfig {
    fn default() -> Self {
        Self {
            offer_size: default_offer_size(),
            refreshes: default_refreshes(),
        }
    }
}

/// Presentation pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Real-time pause between a result and the next event.
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,
}

fn default_transition_delay_ms() -> u64 {
    3500
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: default_transition_delay_ms(),
        }
    }
}

impl PacingConfig {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}
