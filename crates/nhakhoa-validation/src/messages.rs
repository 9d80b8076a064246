//! Localized violation messages

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display language for violation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Vi,
    En,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" | "vi-vn" => Ok(Locale::Vi),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Every message the engine and the predefined schemas can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    Required,
    MinLength,
    MaxLength,
    Pattern,
    Email,
    Phone,
    Date,
    FutureBirthDate,
    NegativePrice,
    InvalidWorkingHours,
}

impl MessageKey {
    fn template(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (MessageKey::Required, Locale::Vi) => "Trường này là bắt buộc",
            (MessageKey::Required, Locale::En) => "This field is required",
            (MessageKey::MinLength, Locale::Vi) => "Tối thiểu {n} ký tự",
            (MessageKey::MinLength, Locale::En) => "Must be at least {n} characters",
            (MessageKey::MaxLength, Locale::Vi) => "Tối đa {n} ký tự",
            (MessageKey::MaxLength, Locale::En) => "Must be at most {n} characters",
            (MessageKey::Pattern, Locale::Vi) => "Định dạng không hợp lệ",
            (MessageKey::Pattern, Locale::En) => "Invalid format",
            (MessageKey::Email, Locale::Vi) => "Email không hợp lệ",
            (MessageKey::Email, Locale::En) => "Invalid email address",
            (MessageKey::Phone, Locale::Vi) => "Số điện thoại không hợp lệ",
            (MessageKey::Phone, Locale::En) => "Invalid phone number",
            (MessageKey::Date, Locale::Vi) => "Ngày không hợp lệ",
            (MessageKey::Date, Locale::En) => "Invalid date",
            (MessageKey::FutureBirthDate, Locale::Vi) => "Ngày sinh không được ở tương lai",
            (MessageKey::FutureBirthDate, Locale::En) => "Birth date cannot be in the future",
            (MessageKey::NegativePrice, Locale::Vi) => "Giá phải là số không âm",
            (MessageKey::NegativePrice, Locale::En) => "Price must be non-negative",
            (MessageKey::InvalidWorkingHours, Locale::Vi) => {
                "Giờ làm việc phải có dạng HH:MM - HH:MM"
            }
            (MessageKey::InvalidWorkingHours, Locale::En) => {
                "Working hours must look like HH:MM - HH:MM"
            }
        }
    }
}

/// Message catalog for one locale, with optional per-key overrides
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages {
    locale: Locale,
    overrides: HashMap<MessageKey, String>,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: HashMap::new(),
        }
    }

    /// Replace the text for one key; `{n}` is substituted with the rule bound
    pub fn with_override(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        self.overrides.insert(key, text.into());
        self
    }

    pub fn with_overrides(mut self, overrides: HashMap<MessageKey, String>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render a message without a bound
    pub fn get(&self, key: MessageKey) -> String {
        self.template(key).to_string()
    }

    /// Render a message that mentions a length bound
    pub fn with_bound(&self, key: MessageKey, n: usize) -> String {
        self.template(key).replace("{n}", &n.to_string())
    }

    pub fn required(&self) -> String {
        self.get(MessageKey::Required)
    }

    pub fn min_length(&self, n: usize) -> String {
        self.with_bound(MessageKey::MinLength, n)
    }

    pub fn max_length(&self, n: usize) -> String {
        self.with_bound(MessageKey::MaxLength, n)
    }

    fn template(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.template(self.locale))
    }
}
