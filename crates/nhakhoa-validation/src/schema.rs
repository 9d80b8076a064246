// File: src/schema.rs
// Purpose: Field-name -> rule set tables, dynamic and typed

use std::collections::HashMap;

use crate::rule::RuleSet;
use crate::value::FieldValue;

/// Source of field values for validation
///
/// Missing fields resolve to `FieldValue::Absent`.
pub trait FieldLookup {
    fn lookup(&self, field: &str) -> FieldValue;
}

impl FieldLookup for HashMap<String, FieldValue> {
    fn lookup(&self, field: &str) -> FieldValue {
        self.get(field).cloned().unwrap_or_default()
    }
}

impl FieldLookup for HashMap<&str, FieldValue> {
    fn lookup(&self, field: &str) -> FieldValue {
        self.get(field).cloned().unwrap_or_default()
    }
}

impl FieldLookup for serde_json::Map<String, serde_json::Value> {
    fn lookup(&self, field: &str) -> FieldValue {
        self.get(field).map(FieldValue::from).unwrap_or_default()
    }
}

impl FieldLookup for serde_json::Value {
    /// Non-object JSON has no fields
    fn lookup(&self, field: &str) -> FieldValue {
        self.get(field).map(FieldValue::from).unwrap_or_default()
    }
}

/// Rules for loosely-typed form data, one rule set per field name
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: HashMap<String, RuleSet>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field; declaring it again replaces its rules
    pub fn field(mut self, name: impl Into<String>, rules: RuleSet) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    pub fn rules(&self, field: &str) -> Option<&RuleSet> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// Field names, sorted
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<(S, RuleSet)> for Schema {
    fn from_iter<I: IntoIterator<Item = (S, RuleSet)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// One entry of a typed schema: the field name, how to read it, its rules
pub struct TypedField<T> {
    pub name: &'static str,
    pub read: fn(&T) -> FieldValue,
    pub rules: RuleSet,
}

impl<T> Clone for TypedField<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            read: self.read,
            rules: self.rules.clone(),
        }
    }
}

/// Rules bound to the fields of a concrete record type
///
/// Each entry pairs a field name with an accessor, so the rule table and the
/// record shape are checked together by the compiler.
pub struct TypedSchema<T> {
    fields: Vec<TypedField<T>>,
}

impl<T> TypedSchema<T> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn field(mut self, name: &'static str, read: fn(&T) -> FieldValue, rules: RuleSet) -> Self {
        self.fields.retain(|f| f.name != name);
        self.fields.push(TypedField { name, read, rules });
        self
    }

    pub fn fields(&self) -> &[TypedField<T>] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Drop the accessors, keeping the rules for loosely-typed data
    pub fn untyped(&self) -> Schema {
        self.fields
            .iter()
            .map(|f| (f.name, f.rules.clone()))
            .collect()
    }
}

impl<T> Default for TypedSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedSchema<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T> std::fmt::Debug for TypedSchema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|field| (field.name, &field.rules)))
            .finish()
    }
}
