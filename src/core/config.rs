//! Session configuration.
//!
//! `GameConfig` is plain data: build it with the `with_*` methods or load it
//! from a JSON document. Missing fields fall back to the defaults.
//!
//! ```
//! use aces_up::core::GameConfig;
//!
//! let config = GameConfig::default().with_seed(7).with_hint_duration_ms(500);
//! assert_eq!(config.seed, Some(7));
//!
//! let loaded = GameConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
//! assert_eq!(loaded.hint_duration_ms, 3000);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Number of tableau stacks.
pub const STACK_COUNT: usize = 4;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// How long a hint stays highlighted.
    pub hint_duration_ms: u64,

    /// Deal one card to every stack when a game starts.
    pub deal_initial_row: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hint_duration_ms: 3000,
            deal_initial_row: true,
        }
    }
}

impl GameConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the hint highlight duration.
    #[must_use]
    pub fn with_hint_duration_ms(mut self, ms: u64) -> Self {
        self.hint_duration_ms = ms;
        self
    }

    /// Enable or disable the opening deal.
    #[must_use]
    pub fn with_initial_row(mut self, deal: bool) -> Self {
        self.deal_initial_row = deal;
        self
    }

    #[must_use]
    pub fn hint_duration(&self) -> Duration {
        Duration::from_millis(self.hint_duration_ms)
    }

    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::Config {
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.hint_duration(), Duration::from_secs(3));
        assert!(config.deal_initial_row);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_hint_duration_ms(250)
            .with_initial_row(false);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.hint_duration_ms, 250);
        assert!(!config.deal_initial_row);
    }

    #[test]
    fn test_partial_json() {
        let config = GameConfig::from_json(r#"{ "hint_duration_ms": 10 }"#).unwrap();
        assert_eq!(config.hint_duration_ms, 10);
        assert_eq!(config.seed, None);
        assert!(config.deal_initial_row);
    }

    #[test]
    fn test_bad_json() {
        let err = GameConfig::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
