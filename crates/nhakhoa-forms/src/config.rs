// File: src/config.rs
// Purpose: Configuration parsing from nhakhoa.toml

use anyhow::{Context, Result};
use nhakhoa_validation::{Locale, MessageKey, Messages, Validator};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::session::FileSessionSource;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Per-key message text, e.g. `required = "Bắt buộc"`
    #[serde(default)]
    pub messages: MessageOverrides,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Validation settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    #[serde(default)]
    pub locale: Locale,
}

/// Replacement texts for violation messages; `{n}` stands for the bound
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MessageOverrides {
    pub required: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub pattern: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub future_birth_date: Option<String>,
    pub negative_price: Option<String>,
    pub invalid_working_hours: Option<String>,
}

impl MessageOverrides {
    pub fn into_map(self) -> HashMap<MessageKey, String> {
        [
            (MessageKey::Required, self.required),
            (MessageKey::MinLength, self.min_length),
            (MessageKey::MaxLength, self.max_length),
            (MessageKey::Pattern, self.pattern),
            (MessageKey::Email, self.email),
            (MessageKey::Phone, self.phone),
            (MessageKey::Date, self.date),
            (MessageKey::FutureBirthDate, self.future_birth_date),
            (MessageKey::NegativePrice, self.negative_price),
            (MessageKey::InvalidWorkingHours, self.invalid_working_hours),
        ]
        .into_iter()
        .filter_map(|(key, text)| text.map(|t| (key, t)))
        .collect()
    }
}

/// Where the signed-in user is persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    #[serde(default = "default_session_key")]
    pub key: String,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".nhakhoa/session")
}

fn default_session_key() -> String {
    "user".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            key: default_session_key(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            debug!(?path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!(?path, locale = ?config.validation.locale, "loaded config");
        Ok(config)
    }

    /// Load configuration from default path (./nhakhoa.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("nhakhoa.toml")
    }

    /// Message catalog for the configured locale and overrides
    pub fn messages(&self) -> Messages {
        Messages::new(self.validation.locale).with_overrides(self.messages.clone().into_map())
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.messages())
    }

    pub fn session_source(&self) -> FileSessionSource {
        FileSessionSource::new(&self.session.storage_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.validation.locale, Locale::Vi);
        assert_eq!(config.session.key, "user");
        assert_eq!(config.session.storage_dir, PathBuf::from(".nhakhoa/session"));
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<AppConfig>("").unwrap_or_default();
        assert_eq!(config.session.key, "user");
        assert!(config.messages.into_map().is_empty());
    }

    #[test]
    fn test_locale_and_overrides() {
        let toml = r#"
            [validation]
            locale = "en"

            [messages]
            min_length = "At least {n} characters please"

            [session]
            key = "currentUser"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        let messages = config.messages();
        assert_eq!(messages.locale(), Locale::En);
        assert_eq!(messages.min_length(3), "At least 3 characters please");
        assert_eq!(messages.required(), "This field is required");
        assert_eq!(config.session.key, "currentUser");
    }

    #[test]
    fn test_unknown_message_key_rejected() {
        let toml = r#"
            [messages]
            requried = "typo"
        "#;
        assert!(toml::from_str::<AppConfig>(toml).is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load("/definitely/not/here/nhakhoa.toml").unwrap();
        assert_eq!(config.validation.locale, Locale::Vi);
    }
}
