// Askama view models. Views only read; nothing here touches form state.

use askama::Template;

use crate::form::FormState;
use crate::models::meeting::{Field, Meeting};

/// One line of the meeting list.
pub struct MeetingRow {
    pub id: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
}

impl From<&Meeting> for MeetingRow {
    fn from(m: &Meeting) -> Self {
        Self {
            id: m.id.to_string(),
            date: m.value_of(Field::Date),
            time: m.value_of(Field::Time),
            name: m.full_name(),
            email: m.email.clone(),
        }
    }
}

/// One form input with whatever the form currently says about it.
pub struct FormFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    /// Empty when the field has no error.
    pub error: String,
    pub suggestions: Vec<String>,
}

impl FormFieldView {
    pub fn all(state: &FormState) -> Vec<Self> {
        Field::ALL
            .into_iter()
            .map(|field| Self {
                name: field.name(),
                label: field.label(),
                input_type: match field {
                    Field::FirstName | Field::LastName => "text",
                    Field::Email => "email",
                    Field::Date => "date",
                    Field::Time => "time",
                },
                value: state.value(field).to_string(),
                error: state.error(field).unwrap_or_default().to_string(),
                suggestions: state.suggestions(field).iter().map(|s| s.value.clone()).collect(),
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "meetings/list.html")]
pub struct MeetingsPageTemplate {
    pub meetings: Vec<MeetingRow>,
    pub fields: Vec<FormFieldView>,
}

impl MeetingsPageTemplate {
    pub fn build(meetings: &[Meeting], state: &FormState) -> Self {
        Self {
            meetings: meetings.iter().map(MeetingRow::from).collect(),
            fields: FormFieldView::all(state),
        }
    }
}
