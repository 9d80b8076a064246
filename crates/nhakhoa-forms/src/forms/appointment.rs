// File: src/forms/appointment.rs
// Purpose: Appointment booking form

use nhakhoa_validation::{FieldValue, Messages, RuleSet, TypedSchema};
use serde::{Deserialize, Serialize};

use super::{string_or_number, FormRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trieu_chung: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub ma_ca_kham: String,
    #[serde(deserialize_with = "string_or_number")]
    pub ma_benh_nhan: String,
}

impl FormRecord for AppointmentForm {
    const NAME: &'static str = "appointment";

    fn schema(_messages: &Messages) -> TypedSchema<Self> {
        TypedSchema::<Self>::new()
            .field(
                "trieuChung",
                |f| FieldValue::from(f.trieu_chung.as_deref()),
                RuleSet::new().min_length(10).max_length(500),
            )
            .field(
                "maCaKham",
                |f| FieldValue::from(&f.ma_ca_kham),
                RuleSet::new().required(),
            )
            .field(
                "maBenhNhan",
                |f| FieldValue::from(&f.ma_benh_nhan),
                RuleSet::new().required(),
            )
    }
}
