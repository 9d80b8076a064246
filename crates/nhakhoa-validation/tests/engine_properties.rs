/// Behavioural tests for the validation engine
///
/// Covers the evaluation order of a single field and the per-field
/// independence of whole-form validation.
use nhakhoa_validation::{validate_field, validate_form, FieldValue, RuleSet, Schema};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use std::collections::HashMap;

fn data(pairs: &[(&str, FieldValue)]) -> HashMap<String, FieldValue> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn required_rejects_blank_strings(#[case] input: &str) {
    let rules = RuleSet::new().required().min_length(3);
    assert_eq!(
        validate_field(&input.into(), &rules).as_deref(),
        Some("Trường này là bắt buộc")
    );
}

#[test]
fn required_rejects_null_and_missing() {
    let rules = RuleSet::new().required();
    assert!(validate_field(&FieldValue::Null, &rules).is_some());
    assert!(validate_field(&FieldValue::Absent, &rules).is_some());
}

#[rstest]
#[case("a@b.co", true)]
#[case("abc", false)]
#[case("a@b", false)]
#[case("@b.co", false)]
fn email_rule(#[case] input: &str, #[case] valid: bool) {
    let rules = RuleSet::new().email();
    assert_eq!(validate_field(&input.into(), &rules).is_none(), valid);
}

#[rstest]
#[case("0912345678", true)]
#[case("123456789", false)]
#[case("08123", false)]
fn phone_rule(#[case] input: &str, #[case] valid: bool) {
    let rules = RuleSet::new().phone();
    assert_eq!(validate_field(&input.into(), &rules).is_none(), valid);
}

#[test]
fn custom_returning_none_clears_required_failure() {
    // The custom check always has the last word, even over `required`
    let rules = RuleSet::new().required().custom(|_| None);
    assert_eq!(validate_field(&"".into(), &rules), None);
    assert_eq!(validate_field(&FieldValue::Absent, &rules), None);
}

#[test]
fn validate_form_is_idempotent() {
    let schema = Schema::new()
        .field("hoTen", RuleSet::new().required().min_length(2))
        .field("eMail", RuleSet::new().email());
    let record = data(&[("hoTen", "A".into()), ("eMail", "x@y".into())]);

    let first = validate_form(&record, &schema);
    let second = validate_form(&record, &schema);
    assert_eq!(first, second);
    assert_eq!(first.fields(), vec!["eMail", "hoTen"]);
}

#[test]
fn unrelated_fields_do_not_affect_others() {
    let schema = Schema::new()
        .field("hoTen", RuleSet::new().required())
        .field("eMail", RuleSet::new().email());
    let base = data(&[("hoTen", "".into()), ("eMail", "a@b.co".into())]);

    let mut extended = base.clone();
    extended.insert("ghiChu".to_string(), "not in schema".into());
    extended.insert("soDienThoai".to_string(), "0912345678".into());

    assert_eq!(validate_form(&base, &schema), validate_form(&extended, &schema));
}

#[test]
fn fields_outside_schema_are_never_checked() {
    let schema = Schema::new().field("eMail", RuleSet::new().email());
    let errors = validate_form(&json!({"eMail": "a@b.co", "matKhau": ""}), &schema);
    assert!(errors.is_empty());
}

#[test]
fn missing_schema_field_counts_as_absent() {
    let schema = Schema::new().field("maCaKham", RuleSet::new().required());
    let errors = validate_form(&json!({}), &schema);
    assert_eq!(errors.get("maCaKham"), Some("Trường này là bắt buộc"));
}

#[test]
fn empty_schema_and_data_yield_no_errors() {
    let errors = validate_form(&HashMap::<String, FieldValue>::new(), &Schema::new());
    assert!(errors.is_empty());
    assert!(errors.into_result().is_ok());
}
