//! Autocomplete lookups for the name and email fields.
//!
//! Every keystroke on a suggestible field starts a provider lookup right away.
//! Lookups are never debounced or cancelled, so several may be in flight for
//! one field and they can finish in any order. Each lookup carries the
//! sequence number it was issued with; a finished lookup only reaches the form
//! if no newer lookup has been issued for its field since. Selecting a
//! suggestion or accepting the form also advances the sequence, which retires
//! whatever is still in flight.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::state::FormState;
use crate::models::meeting::{Field, Suggestion};
use crate::provider::{MeetingProvider, ProviderError};

/// Identifies one issued lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    pub field: Field,
    pub sequence: u64,
}

/// A finished lookup, posted back to the form's owner.
#[derive(Debug)]
pub struct LookupCompletion {
    pub ticket: LookupTicket,
    pub result: Result<Vec<Suggestion>, ProviderError>,
}

/// What happened to a completion handed to [`SuggestionEngine::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Latest lookup for its field; the list was replaced.
    Applied,
    /// A newer lookup was issued (or the cycle was closed); dropped.
    Superseded,
    /// Latest lookup, but the provider failed; list left as it was.
    Failed,
}

/// Latest issued sequence per suggestible field.
#[derive(Debug, Clone, Copy, Default)]
struct IssueCounters {
    first_name: u64,
    last_name: u64,
    email: u64,
}

impl IssueCounters {
    fn slot(&mut self, field: Field) -> Option<&mut u64> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Date | Field::Time => None,
        }
    }

    fn latest(&self, field: Field) -> Option<u64> {
        match field {
            Field::FirstName => Some(self.first_name),
            Field::LastName => Some(self.last_name),
            Field::Email => Some(self.email),
            Field::Date | Field::Time => None,
        }
    }

    fn advance(&mut self, field: Field) -> Option<u64> {
        let slot = self.slot(field)?;
        *slot += 1;
        Some(*slot)
    }
}

pub struct SuggestionEngine<P> {
    provider: Arc<P>,
    issued: IssueCounters,
    completions: mpsc::UnboundedSender<LookupCompletion>,
}

impl<P: MeetingProvider> SuggestionEngine<P> {
    /// Finished lookups are sent to `completions`.
    pub fn new(provider: Arc<P>, completions: mpsc::UnboundedSender<LookupCompletion>) -> Self {
        Self {
            provider,
            issued: IssueCounters::default(),
            completions,
        }
    }

    /// Start a lookup for the new value of `field`. No-op for fields without
    /// suggestions. Must be called from within a tokio runtime.
    pub fn on_field_change(&mut self, field: Field, value: &str) -> Option<LookupTicket> {
        let sequence = self.issued.advance(field)?;
        let ticket = LookupTicket { field, sequence };
        log::debug!("Lookup {field}#{sequence} issued for {value:?}");

        let provider = Arc::clone(&self.provider);
        let completions = self.completions.clone();
        let value = value.to_string();
        tokio::spawn(async move {
            let result = provider.filter(field, &value).await;
            // Receiver gone means the form was dropped; nothing left to update.
            let _ = completions.send(LookupCompletion { ticket, result });
        });
        Some(ticket)
    }

    /// Whether `ticket` is still the newest lookup for its field.
    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.issued.latest(ticket.field) == Some(ticket.sequence)
    }

    /// Merge a finished lookup into `state` if it is still current.
    pub fn resolve(
        &self,
        state: FormState,
        completion: LookupCompletion,
    ) -> (FormState, Resolution) {
        let LookupCompletion { ticket, result } = completion;
        if !self.is_current(ticket) {
            log::debug!("Lookup {}#{} superseded; dropped", ticket.field, ticket.sequence);
            return (state, Resolution::Superseded);
        }
        match result {
            Ok(suggestions) => {
                log::debug!(
                    "Lookup {}#{} applied with {} suggestions",
                    ticket.field,
                    ticket.sequence,
                    suggestions.len()
                );
                (state.with_suggestions(ticket.field, suggestions), Resolution::Applied)
            }
            Err(e) => {
                log::warn!("Error fetching suggestions for {}: {e}", ticket.field);
                (state, Resolution::Failed)
            }
        }
    }

    /// Take a suggestion: set the value, clear the list and retire pending
    /// lookups for the field. Date and time never offer suggestions, so a
    /// selection there leaves the state as it was.
    pub fn on_suggestion_select(
        &mut self,
        state: FormState,
        field: Field,
        value: &str,
    ) -> FormState {
        if !field.is_suggestible() {
            log::debug!("Ignoring suggestion pick on {field}");
            return state;
        }
        self.issued.advance(field);
        state.with_selection(field, value)
    }

    /// Retire every pending lookup, e.g. once the form has been reset.
    pub fn supersede_all(&mut self) {
        for field in Field::SUGGESTIBLE {
            self.issued.advance(field);
        }
    }
}
