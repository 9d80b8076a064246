// File: src/value.rs
// Purpose: Loosely-typed form values as they arrive from form state

use std::collections::HashMap;

// 2^63: beyond this an integral f64 no longer fits an i64
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A single form value
///
/// Form state is untyped: the same field may hold text typed by the user,
/// a number from a select, or nothing at all. `Absent` is a field that was
/// never set, `Null` one that was explicitly cleared.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Absent,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
    Object(HashMap<String, FieldValue>),
}

impl FieldValue {
    /// Whether the value counts as filled in
    ///
    /// Absent, null, `false`, zero, NaN and the empty string are not present.
    /// Lists and objects always are, even when empty.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Absent | FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::List(_) | FieldValue::Object(_) => true,
        }
    }

    /// Whether a `required` rule is satisfied: present and not blank after trimming
    pub fn is_filled(&self) -> bool {
        self.is_present() && !self.to_form_string().trim().is_empty()
    }

    /// String form used by length, pattern and format checks
    pub fn to_form_string(&self) -> String {
        match self {
            FieldValue::Absent | FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => {
                // Integral numbers render without the trailing .0
                if n.fract() == 0.0 && n.abs() < I64_LIMIT {
                    format!("{}", *n as i64)
                } else if n.fract() == 0.0 && n.is_finite() {
                    format!("{:.0}", n)
                } else {
                    n.to_string()
                }
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items
                .iter()
                .map(|v| v.to_form_string())
                .collect::<Vec<_>>()
                .join(","),
            FieldValue::Object(_) => "[object Object]".to_string(),
        }
    }

    /// Finite numeric reading of the value, if it has one
    ///
    /// `"inf"`, `"NaN"` and literals overflowing to infinity have none.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::Text(s.clone())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Absent)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(items: Vec<FieldValue>) -> Self {
        FieldValue::List(items)
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(json: &serde_json::Value) -> Self {
        use serde_json::Value;

        match json {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null),
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Array(items) => FieldValue::List(items.iter().map(FieldValue::from).collect()),
            Value::Object(map) => FieldValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(json: serde_json::Value) -> Self {
        FieldValue::from(&json)
    }
}
