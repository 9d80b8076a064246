// File: src/errors.rs
// Purpose: Field -> message map returned by form validation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Validation errors for one submission attempt
///
/// A field is listed only when one of its rules failed. The map is rebuilt on
/// every validation call; callers keep it until the next edit or submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: HashMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get the error for a specific field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Drop the message of a field the user just edited
    pub fn clear_field(&mut self, field: &str) -> Option<String> {
        self.errors.remove(field)
    }

    /// Errors sorted by field name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<_> = self
            .errors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.iter().map(|(field, _)| field).collect()
    }

    /// `Ok(())` when no field failed, otherwise the errors themselves
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.errors
    }
}

impl From<HashMap<String, String>> for ValidationErrors {
    fn from(errors: HashMap<String, String>) -> Self {
        Self { errors }
    }
}

impl FromIterator<(String, String)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_iter_sorted_by_field() {
        let mut errors = ValidationErrors::new();
        errors.insert("matKhau", "b");
        errors.insert("eMail", "a");
        errors.insert("hoTen", "c");
        assert_eq!(errors.fields(), vec!["eMail", "hoTen", "matKhau"]);
    }

    #[test]
    fn test_clear_field_after_edit() {
        let mut errors = ValidationErrors::new();
        errors.insert("eMail", "Email không hợp lệ");
        assert_eq!(errors.clear_field("eMail").as_deref(), Some("Email không hợp lệ"));
        assert!(errors.is_empty());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = ValidationErrors::new();
        errors.insert("donGia", "Giá phải là số không âm");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"donGia": "Giá phải là số không âm"}));
    }

    #[test]
    fn test_display_joins_sorted_entries() {
        let errors: ValidationErrors = vec![
            ("b".to_string(), "two".to_string()),
            ("a".to_string(), "one".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors.to_string(), "a: one; b: two");
    }
}
