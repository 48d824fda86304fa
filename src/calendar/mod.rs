//! Top-level controller: the list of accepted meetings plus the form that
//! adds to it.

pub mod service;

use std::sync::Arc;

use crate::form::{FieldErrors, FormController, FormState};
use crate::models::meeting::{Field, IdGenerator, Meeting, MeetingList};
use crate::provider::MeetingProvider;

pub struct Calendar<P> {
    provider: Arc<P>,
    meetings: MeetingList,
    form: FormController<P>,
}

impl<P: MeetingProvider> Calendar<P> {
    /// An empty calendar. Use [`Calendar::load`] to start from stored meetings.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            form: FormController::new(Arc::clone(&provider)),
            provider,
            meetings: MeetingList::new(),
        }
    }

    /// Seed the meeting list from the provider. A failing load is logged and
    /// leaves the list empty; the form works either way.
    pub async fn load(provider: Arc<P>) -> Self {
        let mut calendar = Self::new(provider);
        match calendar.provider.load().await {
            Ok(meetings) => {
                log::info!("Loaded {} meetings", meetings.len());
                calendar.meetings = MeetingList::from_loaded(meetings);
            }
            Err(e) => log::warn!("Failed to load meetings: {e}"),
        }
        calendar
    }

    pub fn with_id_generator(mut self, next_id: IdGenerator) -> Self {
        self.form = self.form.with_id_generator(next_id);
        self
    }

    pub fn meetings(&self) -> &MeetingList {
        &self.meetings
    }

    pub fn form(&self) -> &FormController<P> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController<P> {
        &mut self.form
    }

    pub fn form_state(&self) -> &FormState {
        self.form.state()
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.form.handle_input_change(field, value);
    }

    pub fn select_suggestion(&mut self, field: Field, value: &str) {
        self.form.handle_suggestion_click(field, value);
    }

    /// Submit the form. An accepted meeting is appended to the list and the
    /// provider is told about it in the background.
    pub fn submit(&mut self) -> Result<Meeting, FieldErrors> {
        let meetings = &mut self.meetings;
        let provider = &self.provider;
        self.form.handle_submit(|meeting| {
            meetings.append(meeting.clone());
            notify_provider(Arc::clone(provider), meeting.clone());
            meeting
        })
    }
}

fn notify_provider<P: MeetingProvider>(provider: Arc<P>, meeting: Meeting) {
    tokio::spawn(async move {
        if let Err(e) = provider.update(&meeting).await {
            log::warn!("Provider did not store meeting {}: {e}", meeting.id);
        }
    });
}
