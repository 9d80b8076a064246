// File: src/forms/account.rs
// Purpose: User account form (registration and staff accounts)

use chrono::{Local, NaiveDate};
use nhakhoa_validation::validators::parse_date;
use nhakhoa_validation::{FieldValue, MessageKey, Messages, RuleSet, TypedSchema};
use serde::{Deserialize, Serialize};

use super::{opt_string_or_number, FormRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountForm {
    pub ten_tai_khoan: String,
    pub mat_khau: String,
    pub ho_ten: String,
    pub e_mail: String,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub so_dien_thoai: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngay_sinh: Option<String>,
}

impl AccountForm {
    /// Account rules with birth dates judged against `today`
    pub fn schema_on(messages: &Messages, today: NaiveDate) -> TypedSchema<Self> {
        TypedSchema::<Self>::new()
            .field(
                "tenTaiKhoan",
                |f| FieldValue::from(&f.ten_tai_khoan),
                RuleSet::new().required().min_length(3).max_length(50),
            )
            .field(
                "matKhau",
                |f| FieldValue::from(&f.mat_khau),
                RuleSet::new().required().min_length(6),
            )
            .field(
                "hoTen",
                |f| FieldValue::from(&f.ho_ten),
                RuleSet::new().required().min_length(2).max_length(100),
            )
            .field(
                "eMail",
                |f| FieldValue::from(&f.e_mail),
                RuleSet::new().required().email(),
            )
            .field(
                "soDienThoai",
                |f| FieldValue::from(f.so_dien_thoai.as_deref()),
                RuleSet::new().required().phone(),
            )
            .field(
                "ngaySinh",
                |f| FieldValue::from(f.ngay_sinh.as_deref()),
                birth_date_rules(messages, today),
            )
    }
}

impl FormRecord for AccountForm {
    const NAME: &'static str = "account";

    fn schema(messages: &Messages) -> TypedSchema<Self> {
        Self::schema_on(messages, Local::now().date_naive())
    }
}

/// Optional date, not after `today`
///
/// The custom check has the final say over the field, so it reports
/// unparseable dates itself as well.
fn birth_date_rules(messages: &Messages, today: NaiveDate) -> RuleSet {
    let invalid = messages.get(MessageKey::Date);
    let future = messages.get(MessageKey::FutureBirthDate);

    RuleSet::new().date().custom(move |value| {
        if !value.is_present() {
            return None;
        }
        match parse_date(value) {
            None => Some(invalid.clone()),
            Some(date) if date > today => Some(future.clone()),
            Some(_) => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nhakhoa_validation::Validator;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn valid_form() -> AccountForm {
        AccountForm {
            ten_tai_khoan: "letan01".to_string(),
            mat_khau: "123456".to_string(),
            ho_ten: "Trần Thị B".to_string(),
            e_mail: "letan01@nhakhoa.vn".to_string(),
            so_dien_thoai: Some("0987654321".to_string()),
            ngay_sinh: Some("1995-04-12".to_string()),
        }
    }

    fn check(form: &AccountForm) -> nhakhoa_validation::ValidationErrors {
        let validator = Validator::default();
        let schema = AccountForm::schema_on(validator.messages(), today());
        validator.validate_record(form, &schema)
    }

    #[test]
    fn test_valid_account() {
        assert!(check(&valid_form()).is_empty());
    }

    #[rstest]
    #[case("2024-06-01", None)]
    #[case("2024-06-02", Some("Ngày sinh không được ở tương lai"))]
    #[case("khong-phai-ngay", Some("Ngày không hợp lệ"))]
    fn test_birth_date(#[case] input: &str, #[case] expected: Option<&str>) {
        let form = AccountForm {
            ngay_sinh: Some(input.to_string()),
            ..valid_form()
        };
        assert_eq!(check(&form).get("ngaySinh"), expected);
    }

    #[test]
    fn test_birth_date_is_optional() {
        let form = AccountForm {
            ngay_sinh: None,
            ..valid_form()
        };
        assert!(check(&form).is_empty());
    }

    #[test]
    fn test_missing_phone_is_required() {
        let form = AccountForm {
            so_dien_thoai: None,
            ..valid_form()
        };
        assert_eq!(
            check(&form).get("soDienThoai"),
            Some("Trường này là bắt buộc")
        );
    }

    #[test]
    fn test_deserializes_wire_names() {
        let form: AccountForm = serde_json::from_value(serde_json::json!({
            "tenTaiKhoan": "bn_hoa",
            "eMail": "hoa@example.com",
            "soDienThoai": 912345678,
        }))
        .unwrap();
        assert_eq!(form.ten_tai_khoan, "bn_hoa");
        assert_eq!(form.e_mail, "hoa@example.com");
        assert_eq!(form.so_dien_thoai.as_deref(), Some("912345678"));
        assert_eq!(form.mat_khau, "");
    }
}
