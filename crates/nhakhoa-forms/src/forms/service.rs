// File: src/forms/service.rs
// Purpose: Dental service (treatment) form

use nhakhoa_validation::{FieldValue, MessageKey, Messages, RuleSet, TypedSchema};
use serde::{Deserialize, Serialize};

use super::{string_or_number, FormRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceForm {
    pub ten_dich_vu: String,
    #[serde(deserialize_with = "string_or_number")]
    pub don_gia: String,
    #[serde(deserialize_with = "string_or_number")]
    pub ma_loai_dich_vu: String,
}

impl FormRecord for ServiceForm {
    const NAME: &'static str = "service";

    fn schema(messages: &Messages) -> TypedSchema<Self> {
        TypedSchema::<Self>::new()
            .field(
                "tenDichVu",
                |f| FieldValue::from(&f.ten_dich_vu),
                RuleSet::new().required().min_length(3).max_length(100),
            )
            .field(
                "donGia",
                |f| FieldValue::from(&f.don_gia),
                price_rules(messages),
            )
            .field(
                "maLoaiDichVu",
                |f| FieldValue::from(&f.ma_loai_dich_vu),
                RuleSet::new().required(),
            )
    }
}

/// Required, numeric, at least zero
///
/// The custom check decides the field on its own, so a missing price is
/// reported there too. A price of 0 is allowed.
fn price_rules(messages: &Messages) -> RuleSet {
    let required = messages.required();
    let negative = messages.get(MessageKey::NegativePrice);

    RuleSet::new().required().custom(move |value| {
        if value.to_form_string().trim().is_empty() {
            return Some(required.clone());
        }
        match value.as_number() {
            Some(price) if price >= 0.0 => None,
            _ => Some(negative.clone()),
        }
    })
}
