// File: src/forms/clinic.rs
// Purpose: Clinic profile form

use nhakhoa_validation::{FieldValue, MessageKey, Messages, Regex, RuleSet, TypedSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{string_or_number, FormRecord};

// "08:00 - 17:30", spaces around the dash optional
static WORKING_HOURS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01]\d|2[0-3]):[0-5]\d\s*-\s*([01]\d|2[0-3]):[0-5]\d$")
        .expect("working hours pattern compiles")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClinicForm {
    pub ten_phong_kham: String,
    pub dia_chi: String,
    #[serde(deserialize_with = "string_or_number")]
    pub so_dien_thoai: String,
    pub gio_lam_viec: String,
}

impl FormRecord for ClinicForm {
    const NAME: &'static str = "clinic";

    fn schema(messages: &Messages) -> TypedSchema<Self> {
        TypedSchema::<Self>::new()
            .field(
                "tenPhongKham",
                |f| FieldValue::from(&f.ten_phong_kham),
                RuleSet::new().required().min_length(3).max_length(100),
            )
            .field(
                "diaChi",
                |f| FieldValue::from(&f.dia_chi),
                RuleSet::new().required().min_length(5).max_length(255),
            )
            .field(
                "soDienThoai",
                |f| FieldValue::from(&f.so_dien_thoai),
                RuleSet::new().required().phone(),
            )
            .field(
                "gioLamViec",
                |f| FieldValue::from(&f.gio_lam_viec),
                RuleSet::new().required().pattern_with_message(
                    WORKING_HOURS.clone(),
                    messages.get(MessageKey::InvalidWorkingHours),
                ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nhakhoa_validation::Validator;
    use rstest::rstest;

    fn clinic(hours: &str) -> ClinicForm {
        ClinicForm {
            ten_phong_kham: "Nha khoa Sài Gòn".to_string(),
            dia_chi: "12 Lê Lợi, Quận 1".to_string(),
            so_dien_thoai: "0283456789".to_string(),
            gio_lam_viec: hours.to_string(),
        }
    }

    #[rstest]
    #[case("08:00 - 17:00", true)]
    #[case("07:30-20:45", true)]
    #[case("8h - 17h", false)]
    #[case("25:00 - 17:00", false)]
    fn test_working_hours(#[case] hours: &str, #[case] valid: bool) {
        let mut form = clinic(hours);
        // 028 is a landline prefix, not a mobile one
        form.so_dien_thoai = "0912345678".to_string();
        let result = form.validate(&Validator::default());
        assert_eq!(result.is_ok(), valid, "{:?}", result);
    }

    #[test]
    fn test_landline_rejected() {
        let errors = clinic("08:00 - 17:00")
            .validate(&Validator::default())
            .unwrap_err();
        assert_eq!(errors.fields(), vec!["soDienThoai"]);
    }
}
