//! Field rules for the meeting form.
//!
//! Each field is checked against its rules in declaration order: required,
//! then minimum length, then pattern. When several rules fail, the message of
//! the last failing one is the one reported.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use super::state::FieldValues;
use crate::models::meeting::Field;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time pattern"));

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Email,
    /// `YYYY-MM-DD` naming a day that exists.
    Date,
    /// 24-hour `HH:MM`.
    Time,
}

impl Pattern {
    fn matches(self, value: &str) -> bool {
        match self {
            Pattern::Email => EMAIL_RE.is_match(value),
            Pattern::Date => {
                DATE_RE.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
            }
            Pattern::Time => TIME_RE.is_match(value),
        }
    }
}

struct Rule {
    field: Field,
    required: bool,
    min_length: Option<usize>,
    pattern: Option<Pattern>,
}

#[rustfmt::skip]
const RULES: [Rule; 5] = [
    Rule { field: Field::FirstName, required: true, min_length: Some(2), pattern: None },
    Rule { field: Field::LastName,  required: true, min_length: Some(2), pattern: None },
    Rule { field: Field::Email,     required: true, min_length: None,    pattern: Some(Pattern::Email) },
    Rule { field: Field::Date,      required: true, min_length: None,    pattern: Some(Pattern::Date) },
    Rule { field: Field::Time,      required: true, min_length: None,    pattern: Some(Pattern::Time) },
];

impl Rule {
    /// Message of the last failing check, if any.
    fn check(&self, value: &str) -> Option<String> {
        let label = self.field.label();
        let mut error = None;

        if self.required && value.trim().is_empty() {
            error = Some(format!("{label} is required."));
        }
        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                error = Some(format!("{label} should be at least {min} characters long."));
            }
        }
        if let Some(pattern) = self.pattern {
            if !pattern.matches(value) {
                error = Some(format!("{label} is not in the correct format."));
            }
        }
        error
    }
}

/// Per-field validation messages. Empty means the form may be accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok` when there is nothing to report.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Check every field of the form. Pure; never touches form state.
pub fn validate(values: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in &RULES {
        if let Some(message) = rule.check(values.get(rule.field)) {
            errors.insert(rule.field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(first: &str, last: &str, email: &str, date: &str, time: &str) -> FieldValues {
        let mut v = FieldValues::default();
        v.set(Field::FirstName, first);
        v.set(Field::LastName, last);
        v.set(Field::Email, email);
        v.set(Field::Date, date);
        v.set(Field::Time, time);
        v
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = validate(&values("Ada", "Lovelace", "ada@example.com", "2024-02-29", "23:59"));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn short_first_name_and_impossible_date_are_reported() {
        let errors = validate(&values("A", "Bo", "a@b.co", "2024-13-01", "10:00"));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(Field::FirstName),
            Some("First name should be at least 2 characters long.")
        );
        assert_eq!(errors.get(Field::Date), Some("Date is not in the correct format."));
    }

    #[test]
    fn empty_name_reports_length_because_last_failure_wins() {
        let errors = validate(&values("", "Bo", "a@b.co", "2024-01-01", "10:00"));
        assert_eq!(
            errors.get(Field::FirstName),
            Some("First name should be at least 2 characters long.")
        );
    }

    #[test]
    fn blank_but_long_name_reports_required() {
        let errors = validate(&values("   ", "Bo", "a@b.co", "2024-01-01", "10:00"));
        assert_eq!(errors.get(Field::FirstName), Some("First name is required."));
    }

    #[test]
    fn empty_patterned_field_reports_format() {
        let errors = validate(&values("Al", "Bo", "", "", ""));
        assert_eq!(errors.get(Field::Email), Some("Email is not in the correct format."));
        assert_eq!(errors.get(Field::Date), Some("Date is not in the correct format."));
        assert_eq!(errors.get(Field::Time), Some("Time is not in the correct format."));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last+tag@mail.example.org", "x_y%z@host-1.io"] {
            assert!(Pattern::Email.matches(ok), "{ok} should pass");
        }
        for bad in ["plain", "a@b", "a@b.c", "@b.co", "a b@c.de", "a@b.c0m", "a@b.c|m"] {
            assert!(!Pattern::Email.matches(bad), "{bad} should fail");
        }
    }

    #[test]
    fn date_requires_shape_and_real_day() {
        assert!(Pattern::Date.matches("2023-12-31"));
        assert!(!Pattern::Date.matches("2023-02-29"));
        assert!(!Pattern::Date.matches("2023-1-05"));
        assert!(!Pattern::Date.matches("05-01-2023"));
    }

    #[test]
    fn time_is_24_hour_minutes() {
        for ok in ["00:00", "09:30", "19:59", "23:59"] {
            assert!(Pattern::Time.matches(ok), "{ok} should pass");
        }
        for bad in ["24:00", "12:60", "9:30", "09:30:00", "ab:cd"] {
            assert!(!Pattern::Time.matches(bad), "{bad} should fail");
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let errors = validate(&values("Åø", "Bo", "a@b.co", "2024-01-01", "10:00"));
        assert!(!errors.contains(Field::FirstName));
    }

    #[test]
    fn errors_serialize_keyed_by_wire_name() {
        let errors = validate(&values("A", "Bo", "a@b.co", "2024-01-01", "10:00"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["firstName"], "First name should be at least 2 characters long.");
        assert!(json.get("lastName").is_none());
    }
}
