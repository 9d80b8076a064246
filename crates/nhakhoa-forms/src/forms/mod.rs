// File: src/forms/mod.rs
// Purpose: Typed form records and their predefined schemas

use nhakhoa_validation::{Messages, Schema, TypedSchema, ValidationErrors, Validator};
use serde::{Deserialize, Deserializer};

pub mod account;
pub mod appointment;
pub mod clinic;
pub mod service;

pub use account::AccountForm;
pub use appointment::AppointmentForm;
pub use clinic::ClinicForm;
pub use service::ServiceForm;

/// A form record with a fixed rule table
pub trait FormRecord: Sized {
    /// Schema name, as used on the command line
    const NAME: &'static str;

    fn schema(messages: &Messages) -> TypedSchema<Self>;

    /// Validates the record; `Err` carries every rejected field
    fn validate(&self, validator: &Validator) -> Result<(), ValidationErrors> {
        let schema = Self::schema(validator.messages());
        validator.validate_record(self, &schema).into_result()
    }
}

/// The predefined schemas, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Account,
    Clinic,
    Service,
    Appointment,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::Account,
        SchemaKind::Clinic,
        SchemaKind::Service,
        SchemaKind::Appointment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchemaKind::Account => AccountForm::NAME,
            SchemaKind::Clinic => ClinicForm::NAME,
            SchemaKind::Service => ServiceForm::NAME,
            SchemaKind::Appointment => AppointmentForm::NAME,
        }
    }

    /// Rules for loosely-typed data of this kind
    pub fn schema(self, messages: &Messages) -> Schema {
        match self {
            SchemaKind::Account => AccountForm::schema(messages).untyped(),
            SchemaKind::Clinic => ClinicForm::schema(messages).untyped(),
            SchemaKind::Service => ServiceForm::schema(messages).untyped(),
            SchemaKind::Appointment => AppointmentForm::schema(messages).untyped(),
        }
    }

    /// Wire field names in declaration order
    pub fn field_names(self, messages: &Messages) -> Vec<&'static str> {
        match self {
            SchemaKind::Account => AccountForm::schema(messages).field_names(),
            SchemaKind::Clinic => ClinicForm::schema(messages).field_names(),
            SchemaKind::Service => ServiceForm::schema(messages).field_names(),
            SchemaKind::Appointment => AppointmentForm::schema(messages).field_names(),
        }
    }
}

impl std::str::FromStr for SchemaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "account" | "user" | "taikhoan" => Ok(SchemaKind::Account),
            "clinic" | "phongkham" => Ok(SchemaKind::Clinic),
            "service" | "dichvu" => Ok(SchemaKind::Service),
            "appointment" | "lichkham" => Ok(SchemaKind::Appointment),
            other => Err(format!("Unknown schema: {}", other)),
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Form inputs arrive as text, but ids and prices are often sent as numbers
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_or_number(deserializer)?.unwrap_or_default())
}

pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}
