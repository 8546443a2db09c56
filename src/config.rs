//! Engine tuning knobs. Every field has a default so a partial JSON object (or
//! none at all) is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vocabulary::Difficulty;

/// Lowest option count any question may have: the answer plus one distractor.
pub const MIN_OPTIONS: usize = 2;

/// Highest option count any tier may ask for.
pub const MAX_OPTIONS: usize = 8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub easy_options: usize,
    pub medium_options: usize,
    pub hard_options: usize,
    /// Used when the requested difficulty is not one of the known tiers.
    pub fallback_options: usize,
    /// Padding text when the vocabulary cannot supply enough distractors.
    pub placeholder: String,
    pub xp_per_correct: u32,
    /// Pass over entries tagged with a tier other than the requested one.
    /// They stay in the pool for later calls at their own tier. Off by default.
    pub match_entry_difficulty: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            easy_options: 2,
            medium_options: 3,
            hard_options: 4,
            fallback_options: 2,
            placeholder: "(other)".to_string(),
            xp_per_correct: 10,
            match_entry_difficulty: false,
        }
    }
}

impl EngineConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = [
            ("easyOptions", self.easy_options),
            ("mediumOptions", self.medium_options),
            ("hardOptions", self.hard_options),
            ("fallbackOptions", self.fallback_options),
        ];
        for (name, count) in counts {
            if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be between {MIN_OPTIONS} and {MAX_OPTIONS}, got {count}"
                )));
            }
        }
        if self.placeholder.trim().is_empty() {
            return Err(ConfigError::Validation("placeholder must not be blank".into()));
        }
        Ok(())
    }

    /// Number of options (answer included) for a tier; `None` means the
    /// caller asked for a difficulty we do not recognize.
    pub fn option_count(&self, difficulty: Option<Difficulty>) -> usize {
        let count = match difficulty {
            Some(Difficulty::Easy) => self.easy_options,
            Some(Difficulty::Medium) => self.medium_options,
            Some(Difficulty::Hard) => self.hard_options,
            None => self.fallback_options,
        };
        count.clamp(MIN_OPTIONS, MAX_OPTIONS)
    }
}
