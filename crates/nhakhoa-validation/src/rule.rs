// File: src/rule.rs
// Purpose: Field rules and the ordered rule set attached to one field

use regex::Regex;
use std::fmt;
use std::sync::Arc;

use crate::messages::{MessageKey, Messages};
use crate::validators::{is_valid_email, is_valid_phone, parse_date, trimmed_len};
use crate::value::FieldValue;

/// A caller-supplied check: returns a message when the value is rejected
pub type CustomCheck = Arc<dyn Fn(&FieldValue) -> Option<String> + Send + Sync>;

/// One constraint on a single field
#[derive(Clone)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Pattern {
        regex: Regex,
        message: Option<String>,
    },
    Email,
    Phone,
    Date,
    Custom(CustomCheck),
}

impl Rule {
    /// Position in the evaluation order
    fn rank(&self) -> u8 {
        match self {
            Rule::Required => 0,
            Rule::MinLength(_) => 1,
            Rule::MaxLength(_) => 2,
            Rule::Pattern { .. } => 3,
            Rule::Email => 4,
            Rule::Phone => 5,
            Rule::Date => 6,
            Rule::Custom(_) => 7,
        }
    }

    /// Run a format rule against a present value
    ///
    /// `Required` and `Custom` are handled by the evaluator and always pass here.
    pub(crate) fn check(&self, value: &FieldValue, messages: &Messages) -> Option<String> {
        let text = value.to_form_string();

        match self {
            Rule::Required | Rule::Custom(_) => None,
            Rule::MinLength(min) => {
                (trimmed_len(&text) < *min).then(|| messages.min_length(*min))
            }
            Rule::MaxLength(max) => {
                (trimmed_len(&text) > *max).then(|| messages.max_length(*max))
            }
            Rule::Pattern { regex, message } => (!regex.is_match(&text)).then(|| {
                message
                    .clone()
                    .unwrap_or_else(|| messages.get(MessageKey::Pattern))
            }),
            Rule::Email => (!is_valid_email(&text)).then(|| messages.get(MessageKey::Email)),
            Rule::Phone => (!is_valid_phone(&text)).then(|| messages.get(MessageKey::Phone)),
            Rule::Date => parse_date(value)
                .is_none()
                .then(|| messages.get(MessageKey::Date)),
        }
    }

    /// Short human-readable description, used when listing schemas
    pub fn describe(&self) -> String {
        match self {
            Rule::Required => "required".to_string(),
            Rule::MinLength(n) => format!("min_length({})", n),
            Rule::MaxLength(n) => format!("max_length({})", n),
            Rule::Pattern { regex, .. } => format!("pattern({})", regex.as_str()),
            Rule::Email => "email".to_string(),
            Rule::Phone => "phone".to_string(),
            Rule::Date => "date".to_string(),
            Rule::Custom(_) => "custom".to_string(),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// The rules for one field, kept in evaluation order
///
/// Order: required, min length, max length, pattern, email, phone, date,
/// custom. Rules of the same kind keep the order they were added in.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule at its place in the evaluation order
    pub fn push(&mut self, rule: Rule) {
        let rank = rule.rank();
        let at = self
            .rules
            .iter()
            .position(|r| r.rank() > rank)
            .unwrap_or(self.rules.len());
        self.rules.insert(at, rule);
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    pub fn min_length(self, n: usize) -> Self {
        self.rule(Rule::MinLength(n))
    }

    pub fn max_length(self, n: usize) -> Self {
        self.rule(Rule::MaxLength(n))
    }

    pub fn pattern(self, regex: Regex) -> Self {
        self.rule(Rule::Pattern {
            regex,
            message: None,
        })
    }

    pub fn pattern_with_message(self, regex: Regex, message: impl Into<String>) -> Self {
        self.rule(Rule::Pattern {
            regex,
            message: Some(message.into()),
        })
    }

    pub fn email(self) -> Self {
        self.rule(Rule::Email)
    }

    pub fn phone(self) -> Self {
        self.rule(Rule::Phone)
    }

    pub fn date(self) -> Self {
        self.rule(Rule::Date)
    }

    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        self.rule(Rule::Custom(Arc::new(check)))
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Format rules (everything except `Required` and `Custom`), in order
    pub(crate) fn format_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(|r| !matches!(r, Rule::Required | Rule::Custom(_)))
    }

    pub(crate) fn custom_checks(&self) -> impl Iterator<Item = &CustomCheck> {
        self.rules.iter().filter_map(|r| match r {
            Rule::Custom(check) => Some(check),
            _ => None,
        })
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        rules.into_iter().collect()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.push(rule);
        }
        set
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(set: &RuleSet) -> Vec<String> {
        set.iter().map(Rule::describe).collect()
    }

    #[test]
    fn test_rules_sorted_into_evaluation_order() {
        let set = RuleSet::new()
            .custom(|_| None)
            .phone()
            .max_length(10)
            .required()
            .min_length(3);

        assert_eq!(
            kinds(&set),
            vec!["required", "min_length(3)", "max_length(10)", "phone", "custom"]
        );
    }

    #[test]
    fn test_same_kind_keeps_insertion_order() {
        let set: RuleSet = vec![Rule::MinLength(5), Rule::Email, Rule::MinLength(2)].into();
        assert_eq!(kinds(&set), vec!["min_length(5)", "min_length(2)", "email"]);
    }

    #[test]
    fn test_pattern_uses_custom_message() {
        let messages = Messages::default();
        let rule = Rule::Pattern {
            regex: Regex::new(r"^DV\d+$").unwrap(),
            message: Some("Mã dịch vụ sai".to_string()),
        };
        assert_eq!(
            rule.check(&FieldValue::from("X1"), &messages),
            Some("Mã dịch vụ sai".to_string())
        );
        assert_eq!(rule.check(&FieldValue::from("DV12"), &messages), None);
    }

    #[test]
    fn test_is_required() {
        assert!(RuleSet::new().email().required().is_required());
        assert!(!RuleSet::new().email().is_required());
    }
}
