use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tokio::sync::mpsc;

use super::state::{FieldValues, FormMode, FormState};
use super::suggest::{LookupCompletion, Resolution, SuggestionEngine};
use super::validate::{self, FieldErrors};
use crate::models::meeting::{Field, IdGenerator, Meeting, random_ids};
use crate::provider::MeetingProvider;

/// Owns one form session: its state, its lookups and the id source for the
/// meetings it accepts.
pub struct FormController<P> {
    state: FormState,
    suggestions: SuggestionEngine<P>,
    completions: mpsc::UnboundedReceiver<LookupCompletion>,
    next_id: IdGenerator,
}

impl<P: MeetingProvider> FormController<P> {
    pub fn new(provider: Arc<P>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: FormState::new(),
            suggestions: SuggestionEngine::new(provider, tx),
            completions: rx,
            next_id: random_ids(),
        }
    }

    pub fn with_id_generator(mut self, next_id: IdGenerator) -> Self {
        self.next_id = next_id;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn mode(&self) -> FormMode {
        self.state.mode
    }

    /// Record a keystroke and, for name and email fields, start a lookup.
    pub fn handle_input_change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if field.is_suggestible() {
            self.suggestions.on_field_change(field, &value);
        }
        self.state = std::mem::take(&mut self.state).with_value(field, value);
    }

    /// Take a picked suggestion. Picks on date or time are ignored.
    pub fn handle_suggestion_click(&mut self, field: Field, value: &str) {
        let state = std::mem::take(&mut self.state);
        self.state = self.suggestions.on_suggestion_select(state, field, value);
    }

    /// Validate and, if clean, hand the new meeting to `on_submit`, reset the
    /// form and return what `on_submit` returned. On failure the values stay
    /// and the errors are returned.
    pub fn handle_submit<T>(
        &mut self,
        on_submit: impl FnOnce(Meeting) -> T,
    ) -> Result<T, FieldErrors> {
        let state = std::mem::take(&mut self.state).submitting();
        let accepted = validate::validate(&state.values)
            .into_result()
            .and_then(|()| build_meeting(&mut self.next_id, &state.values));

        match accepted {
            Ok(meeting) => {
                log::info!("Meeting {} accepted for {}", meeting.id, meeting.full_name());
                let outcome = on_submit(meeting);
                self.suggestions.supersede_all();
                self.state = FormState::new();
                Ok(outcome)
            }
            Err(errors) => {
                log::debug!("Submit rejected: {} field(s) invalid", errors.len());
                self.state = state.with_errors(errors.clone());
                Err(errors)
            }
        }
    }

    /// Apply a finished lookup. Stale and failed lookups leave the state as is.
    pub fn apply_completion(&mut self, completion: LookupCompletion) -> Resolution {
        let state = std::mem::take(&mut self.state);
        let (state, resolution) = self.suggestions.resolve(state, completion);
        self.state = state;
        resolution
    }

    /// Wait for the next finished lookup without applying it.
    pub async fn recv_completion(&mut self) -> Option<LookupCompletion> {
        self.completions.recv().await
    }

    /// Wait for the next finished lookup and apply it.
    pub async fn next_completion(&mut self) -> Option<Resolution> {
        let completion = self.completions.recv().await?;
        Some(self.apply_completion(completion))
    }

    /// Apply every lookup that has already finished. Returns how many were
    /// handled.
    pub fn drain_completions(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(completion) = self.completions.try_recv() {
            self.apply_completion(completion);
            handled += 1;
        }
        handled
    }
}

fn build_meeting(
    next_id: &mut IdGenerator,
    values: &FieldValues,
) -> Result<Meeting, FieldErrors> {
    let format_error = |field: Field| {
        let mut errors = FieldErrors::new();
        errors.insert(field, format!("{} is not in the correct format.", field.label()));
        errors
    };
    let date = NaiveDate::parse_from_str(&values.date, "%Y-%m-%d")
        .map_err(|_| format_error(Field::Date))?;
    let time = NaiveTime::parse_from_str(&values.time, "%H:%M")
        .map_err(|_| format_error(Field::Time))?;

    Ok(Meeting {
        id: next_id(),
        first_name: values.first_name.clone(),
        last_name: values.last_name.clone(),
        email: values.email.clone(),
        date,
        time,
    })
}
