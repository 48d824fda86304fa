use serde::Serialize;

use super::validate::FieldErrors;
use crate::models::meeting::{Field, Suggestion};

/// Raw text of every form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: String,
    pub time: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Date => &self.date,
            Field::Time => &self.time,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
        };
        *slot = value.into();
    }
}

/// Suggestion list per suggestible field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionLists {
    pub first_name: Vec<Suggestion>,
    pub last_name: Vec<Suggestion>,
    pub email: Vec<Suggestion>,
}

impl SuggestionLists {
    /// The list for `field`; non-suggestible fields always read as empty.
    pub fn get(&self, field: Field) -> &[Suggestion] {
        match field {
            Field::FirstName => self.first_name.as_slice(),
            Field::LastName => self.last_name.as_slice(),
            Field::Email => self.email.as_slice(),
            Field::Date | Field::Time => &[],
        }
    }

    fn slot(&mut self, field: Field) -> Option<&mut Vec<Suggestion>> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Date | Field::Time => None,
        }
    }

    pub fn any(&self) -> bool {
        Field::SUGGESTIBLE.into_iter().any(|f| !self.get(f).is_empty())
    }
}

/// Where the form is in its edit, suggest, select and submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormMode {
    #[default]
    Editing,
    Suggesting,
    Selected,
    Submitting,
}

/// Everything the form shows. Transitions consume the current state and
/// return the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub values: FieldValues,
    pub errors: FieldErrors,
    pub suggestions: SuggestionLists,
    pub mode: FormMode,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn suggestions(&self, field: Field) -> &[Suggestion] {
        self.suggestions.get(field)
    }

    /// A keystroke: the value changes, everything else stays.
    pub fn with_value(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.set(field, value);
        self.mode = self.resting_mode();
        self
    }

    /// A lookup result replaces the field's list.
    pub fn with_suggestions(mut self, field: Field, suggestions: Vec<Suggestion>) -> Self {
        if let Some(slot) = self.suggestions.slot(field) {
            *slot = suggestions;
        }
        self.mode = self.resting_mode();
        self
    }

    /// A chosen suggestion sets the value and closes the field's list.
    pub fn with_selection(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.set(field, value);
        if let Some(slot) = self.suggestions.slot(field) {
            slot.clear();
        }
        self.mode = FormMode::Selected;
        self
    }

    pub fn submitting(mut self) -> Self {
        self.mode = FormMode::Submitting;
        self
    }

    /// A rejected submit keeps every value and attaches the messages.
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = errors;
        self.mode = self.resting_mode();
        self
    }

    /// Mode once nothing is in progress.
    fn resting_mode(&self) -> FormMode {
        if self.suggestions.any() {
            FormMode::Suggesting
        } else {
            FormMode::Editing
        }
    }
}
