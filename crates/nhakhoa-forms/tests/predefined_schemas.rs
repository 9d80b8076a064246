/// End-to-end checks of the predefined schemas against loosely-typed data
use nhakhoa_forms::{AccountForm, FormRecord, SchemaKind, ServiceForm};
use nhakhoa_validation::{validate_form, Messages, Validator};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn account_scenario_reports_name_email_and_future_birth_date() {
    let schema = SchemaKind::Account.schema(&Messages::default());
    let data = json!({
        "tenTaiKhoan": "ab",
        "matKhau": "123456",
        "hoTen": "Nguyen Van A",
        "eMail": "bad-email",
        "soDienThoai": "0912345678",
        "ngaySinh": "2099-01-01",
    });

    let errors = validate_form(&data, &schema);

    assert_eq!(errors.fields(), vec!["eMail", "ngaySinh", "tenTaiKhoan"]);
    assert_eq!(errors.get("tenTaiKhoan"), Some("Tối thiểu 3 ký tự"));
    assert_eq!(errors.get("eMail"), Some("Email không hợp lệ"));
    assert_eq!(errors.get("ngaySinh"), Some("Ngày sinh không được ở tương lai"));
}

#[test]
fn account_scenario_matches_typed_record() {
    let data = json!({
        "tenTaiKhoan": "ab",
        "matKhau": "123456",
        "hoTen": "Nguyen Van A",
        "eMail": "bad-email",
        "soDienThoai": "0912345678",
        "ngaySinh": "2099-01-01",
    });
    let record: AccountForm = serde_json::from_value(data.clone()).unwrap();
    let validator = Validator::default();

    let typed = record.validate(&validator).unwrap_err();
    let untyped = validator.validate_form(&data, &AccountForm::schema(validator.messages()).untyped());
    assert_eq!(typed, untyped);
}

#[test]
fn service_scenario_reports_negative_price_only() {
    let schema = SchemaKind::Service.schema(&Messages::default());
    let data = json!({"tenDichVu": "X-ray", "donGia": "-50", "maLoaiDichVu": "2"});

    let errors = validate_form(&data, &schema);

    assert_eq!(errors.fields(), vec!["donGia"]);
    assert_eq!(errors.get("donGia"), Some("Giá phải là số không âm"));
}

#[test]
fn service_scenario_in_english() {
    let validator = Validator::new(Messages::new(nhakhoa_validation::Locale::En));
    let form = ServiceForm {
        ten_dich_vu: "X-ray".to_string(),
        don_gia: "-50".to_string(),
        ma_loai_dich_vu: "2".to_string(),
    };
    let errors = form.validate(&validator).unwrap_err();
    assert_eq!(errors.get("donGia"), Some("Price must be non-negative"));
}

#[test]
fn clinic_and_appointment_reject_empty_submissions() {
    let messages = Messages::default();

    let clinic = validate_form(&json!({}), &SchemaKind::Clinic.schema(&messages));
    assert_eq!(
        clinic.fields(),
        vec!["diaChi", "gioLamViec", "soDienThoai", "tenPhongKham"]
    );

    let appointment = validate_form(&json!({}), &SchemaKind::Appointment.schema(&messages));
    assert_eq!(appointment.fields(), vec!["maBenhNhan", "maCaKham"]);
}
