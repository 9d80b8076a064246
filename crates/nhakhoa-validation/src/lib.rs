//! nhakhoa validation engine
//!
//! Declarative per-field validation for clinic forms. A [`Schema`] maps field
//! names to a [`RuleSet`]; a [`Validator`] applies it to a record and returns
//! a [`ValidationErrors`] map holding the first failing rule's message for
//! each rejected field. Pure and synchronous: no I/O, no shared state.
//!
//! ```rust
//! use nhakhoa_validation::{validate_form, FieldValue, RuleSet, Schema};
//! use std::collections::HashMap;
//!
//! let schema = Schema::new()
//!     .field("eMail", RuleSet::new().required().email())
//!     .field("soDienThoai", RuleSet::new().phone());
//!
//! let mut data = HashMap::new();
//! data.insert("eMail".to_string(), FieldValue::from("bad-email"));
//! data.insert("soDienThoai".to_string(), FieldValue::from("0912345678"));
//!
//! let errors = validate_form(&data, &schema);
//! assert_eq!(errors.get("eMail"), Some("Email không hợp lệ"));
//! assert!(!errors.contains("soDienThoai"));
//! ```

pub mod errors;
pub mod messages;
pub mod rule;
pub mod schema;
pub mod validator;
pub mod validators;
pub mod value;

pub use errors::ValidationErrors;
pub use messages::{Locale, MessageKey, Messages};
pub use rule::{CustomCheck, Rule, RuleSet};
pub use schema::{FieldLookup, Schema, TypedField, TypedSchema};
pub use validator::{validate_field, validate_form, Validator};
pub use value::FieldValue;

// Re-export for callers building pattern rules
pub use regex::Regex;
