// File: src/validator.rs
// Purpose: Apply rule sets to values and schemas to records

use tracing::{debug, trace};

use crate::errors::ValidationErrors;
use crate::messages::Messages;
use crate::rule::RuleSet;
use crate::schema::{FieldLookup, Schema, TypedSchema};
use crate::value::FieldValue;

/// Applies rules using one message catalog
#[derive(Debug, Clone, Default)]
pub struct Validator {
    messages: Messages,
}

impl Validator {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Check one value against its rules
    ///
    /// 1. `required` fails on absent or blank values.
    /// 2. Otherwise, a present value runs the format rules in order and the
    ///    first failure wins. Values that are not present skip them.
    /// 3. Custom checks then always run, and their answer replaces whatever
    ///    steps 1-2 produced. A custom check returning `None` therefore clears
    ///    an earlier `required` or format failure.
    pub fn validate_field(&self, value: &FieldValue, rules: &RuleSet) -> Option<String> {
        let mut outcome = if rules.is_required() && !value.is_filled() {
            Some(self.messages.required())
        } else if value.is_present() {
            rules
                .format_rules()
                .find_map(|rule| rule.check(value, &self.messages))
        } else {
            None
        };

        let mut customs = rules.custom_checks().peekable();
        if customs.peek().is_some() {
            outcome = customs.find_map(|check| check(value));
        }

        outcome
    }

    /// Check every field declared in the schema against the data
    ///
    /// Fields present in the data but not in the schema are ignored.
    pub fn validate_form<D>(&self, data: &D, schema: &Schema) -> ValidationErrors
    where
        D: FieldLookup + ?Sized,
    {
        let mut errors = ValidationErrors::new();

        for (field, rules) in schema.iter() {
            let value = data.lookup(field);
            if let Some(message) = self.validate_field(&value, rules) {
                trace!(field, %message, "field rejected");
                errors.insert(field, message);
            }
        }

        debug!(
            fields = schema.len(),
            failed = errors.len(),
            "validated form"
        );
        errors
    }

    /// Check a typed record against its typed schema
    pub fn validate_record<T>(&self, record: &T, schema: &TypedSchema<T>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for field in schema.fields() {
            let value = (field.read)(record);
            if let Some(message) = self.validate_field(&value, &field.rules) {
                trace!(field = field.name, %message, "field rejected");
                errors.insert(field.name, message);
            }
        }

        debug!(
            record = std::any::type_name::<T>(),
            fields = schema.fields().len(),
            failed = errors.len(),
            "validated record"
        );
        errors
    }
}

/// `Validator::validate_field` with the default catalog
pub fn validate_field(value: &FieldValue, rules: &RuleSet) -> Option<String> {
    Validator::default().validate_field(value, rules)
}

/// `Validator::validate_form` with the default catalog
pub fn validate_form<D>(data: &D, schema: &Schema) -> ValidationErrors
where
    D: FieldLookup + ?Sized,
{
    Validator::default().validate_form(data, schema)
}
