//! Form validation and submission, driven through the public controller.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use meetbook::form::{FieldValues, FormController, FormState, validate};
use meetbook::models::meeting::{Field, MeetingId, random_ids};
use common::*;

fn values(v: [&str; 5]) -> FieldValues {
    let mut values = FieldValues::default();
    for (field, value) in Field::ALL.into_iter().zip(v) {
        values.set(field, value);
    }
    values
}

#[test]
fn test_known_invalid_form_reports_exactly_two_fields() {
    let errors = validate(&values(["A", "Bo", "a@b.co", "2024-13-01", "10:00"]));

    let fields: Vec<Field> = errors.fields().collect();
    assert_eq!(fields, vec![Field::FirstName, Field::Date]);
    assert!(errors.get(Field::FirstName).unwrap().contains("at least 2"));
    assert!(errors.get(Field::Date).unwrap().ends_with("not in the correct format."));
}

#[test]
fn test_each_field_fails_alone() {
    let cases: [(Field, &str); 8] = [
        (Field::FirstName, "J"),
        (Field::LastName, ""),
        (Field::Email, "ada.example.com"),
        (Field::Email, "ada@example"),
        (Field::Date, "2024/06/01"),
        (Field::Date, "2023-02-29"),
        (Field::Time, "24:00"),
        (Field::Time, "9:30"),
    ];
    for (field, bad) in cases {
        let mut v = values(VALID_FORM);
        v.set(field, bad);
        let errors = validate(&v);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field], "{field}={bad:?}");
    }
}

#[test]
fn test_valid_form_has_no_errors() {
    assert!(validate(&values(VALID_FORM)).is_empty());
}

#[tokio::test]
async fn test_invalid_submit_preserves_values() {
    let provider = Arc::new(GatedProvider::new());
    let mut form = FormController::new(provider).with_id_generator(sequential_ids());
    let entered = ["A", "Bo", "a@b.co", "2024-13-01", "10:00"];
    fill(&mut form, entered);

    let mut accepted = 0;
    let errors = form.handle_submit(|_| accepted += 1).unwrap_err();

    assert_eq!(accepted, 0);
    assert_eq!(errors.len(), 2);
    for (field, value) in Field::ALL.into_iter().zip(entered) {
        assert_eq!(form.state().value(field), value);
    }
    assert_eq!(form.state().error(Field::FirstName), errors.get(Field::FirstName));
    assert_eq!(form.state().error(Field::Email), None);
}

#[tokio::test]
async fn test_valid_submit_resets_form_and_uses_generated_id() {
    let provider = Arc::new(GatedProvider::new());
    let mut form = FormController::new(provider).with_id_generator(sequential_ids());

    let mut ids = Vec::new();
    fill(&mut form, VALID_FORM);
    form.handle_submit(|m| ids.push(m.id)).unwrap();
    fill(&mut form, ["Grace", "Hopper", "grace@navy.mil", "1985-12-09", "08:00"]);
    form.handle_submit(|m| ids.push(m.id)).unwrap();

    assert_eq!(ids, vec![MeetingId::new("m1"), MeetingId::new("m2")]);
    assert_eq!(form.state(), &FormState::new());
}

#[tokio::test]
async fn test_random_ids_never_repeat() {
    let provider = Arc::new(GatedProvider::new());
    let mut form = FormController::new(provider).with_id_generator(random_ids());

    let mut ids = HashSet::new();
    for _ in 0..20 {
        fill(&mut form, VALID_FORM);
        form.handle_submit(|m| {
            ids.insert(m.id);
        })
        .unwrap();
    }
    assert_eq!(ids.len(), 20);
}
