use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::classifier::{DEFAULT_NEGATIVE_WORDS, DEFAULT_POSITIVE_WORDS, DEFAULT_URGENT_PHRASES};
use crate::error::{Result, TriageError};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub classification: ClassificationConfig,
    #[serde(default)]
    pub draft: DraftConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    #[serde(default = "default_negative_words")]
    pub negative_words: Vec<String>,
    #[serde(default = "default_positive_words")]
    pub positive_words: Vec<String>,
    #[serde(default = "default_urgent_phrases")]
    pub urgent_phrases: Vec<String>,
    #[serde(default = "default_summary_max_chars")]
    pub summary_max_chars: usize,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            negative_words: default_negative_words(),
            positive_words: default_positive_words(),
            urgent_phrases: default_urgent_phrases(),
            summary_max_chars: default_summary_max_chars(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    #[serde(default = "default_signature")]
    pub signature: String,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            signature: default_signature(),
        }
    }
}

fn default_negative_words() -> Vec<String> {
    DEFAULT_NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_positive_words() -> Vec<String> {
    DEFAULT_POSITIVE_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_urgent_phrases() -> Vec<String> {
    DEFAULT_URGENT_PHRASES.iter().map(|w| w.to_string()).collect()
}

fn default_summary_max_chars() -> usize {
    200
}

fn default_signature() -> String {
    "Support Team".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        // If file doesn't exist, return default config with warning
        if !path.exists() {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| TriageError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| TriageError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        // Validate the loaded config
        config.validate()?;

        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TriageError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TriageError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| TriageError::ConfigError(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Matching lowercases the input text only, so configured keywords
        // must already be lowercase or they can never match
        for (section, words) in [
            ("classification.negative_words", &self.classification.negative_words),
            ("classification.positive_words", &self.classification.positive_words),
            ("classification.urgent_phrases", &self.classification.urgent_phrases),
        ] {
            for word in words {
                if word.is_empty() {
                    return Err(TriageError::ConfigError(format!(
                        "{} cannot contain empty strings",
                        section
                    )));
                }
                if word.chars().any(|c| c.is_uppercase()) {
                    return Err(TriageError::ConfigError(format!(
                        "{} entries must be lowercase: '{}'",
                        section, word
                    )));
                }
            }
        }

        if self.classification.summary_max_chars == 0 {
            return Err(TriageError::ConfigError(
                "classification.summary_max_chars must be at least 1".to_string(),
            ));
        }

        if self.draft.signature.is_empty() {
            return Err(TriageError::ConfigError(
                "draft.signature cannot be empty".to_string(),
            ));
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }

    /// Create an example configuration file
    pub fn create_example(path: &Path) -> Result<()> {
        let config = Self::default();
        config.save(path)
    }
}
