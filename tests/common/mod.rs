//! Shared test infrastructure.
//!
//! - `sequential_ids()` - deterministic id generator (`m1`, `m2`, ...)
//! - `GatedProvider` - provider whose lookups only finish when the test
//!   releases them, so completion order is under test control
//! - `meeting()` / `suggestions()` - fixtures

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{NaiveDate, NaiveTime};
use tokio::sync::oneshot;

use meetbook::form::FormController;
use meetbook::models::meeting::{Field, IdGenerator, Meeting, MeetingId, Suggestion};
use meetbook::provider::{MeetingProvider, ProviderError};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const VALID_FORM: [&str; 5] = ["Ada", "Lovelace", "ada@example.com", "2024-06-01", "09:30"];

// ============================================================================
// FIXTURES
// ============================================================================

pub fn sequential_ids() -> IdGenerator {
    let mut n = 0;
    Box::new(move || {
        n += 1;
        MeetingId::new(format!("m{n}"))
    })
}

pub fn meeting(id: &str, first: &str, last: &str, email: &str) -> Meeting {
    Meeting {
        id: MeetingId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 4, 2).expect("valid date"),
        time: NaiveTime::from_hms_opt(13, 45, 0).expect("valid time"),
    }
}

pub fn suggestions(values: &[&str]) -> Vec<Suggestion> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Suggestion { id: MeetingId::new(format!("s{i}")), value: v.to_string() })
        .collect()
}

pub fn suggestion_values(list: &[Suggestion]) -> Vec<&str> {
    list.iter().map(|s| s.value.as_str()).collect()
}

/// Type every value of `values` into the matching field, in field order.
pub fn fill<P: MeetingProvider>(form: &mut FormController<P>, values: [&str; 5]) {
    for (field, value) in Field::ALL.into_iter().zip(values) {
        form.handle_input_change(field, value);
    }
}

// ============================================================================
// GATED PROVIDER
// ============================================================================

type LookupResult = Result<Vec<Suggestion>, ProviderError>;

/// Lookups registered with [`GatedProvider::gate`] wait until the returned
/// sender fires; all other lookups answer immediately with nothing.
#[derive(Default)]
pub struct GatedProvider {
    stored: Vec<Meeting>,
    fail_load: bool,
    fail_updates: bool,
    gates: Mutex<HashMap<(Field, String), oneshot::Receiver<LookupResult>>>,
    updates: Mutex<Vec<Meeting>>,
}

impl GatedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(meetings: Vec<Meeting>) -> Self {
        Self { stored: meetings, ..Self::default() }
    }

    pub fn failing_load() -> Self {
        Self { fail_load: true, ..Self::default() }
    }

    pub fn failing_updates() -> Self {
        Self { fail_updates: true, ..Self::default() }
    }

    /// Hold the next lookup of `value` on `field` until the sender is used.
    pub fn gate(&self, field: Field, value: &str) -> oneshot::Sender<LookupResult> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .expect("gates lock")
            .insert((field, value.to_string()), rx);
        tx
    }

    pub fn updates(&self) -> Vec<Meeting> {
        self.updates.lock().expect("updates lock").clone()
    }
}

impl MeetingProvider for GatedProvider {
    async fn load(&self) -> Result<Vec<Meeting>, ProviderError> {
        if self.fail_load {
            return Err(ProviderError::Unavailable("load refused".to_string()));
        }
        Ok(self.stored.clone())
    }

    async fn filter(&self, field: Field, partial: &str) -> Result<Vec<Suggestion>, ProviderError> {
        let gate = self
            .gates
            .lock()
            .expect("gates lock")
            .remove(&(field, partial.to_string()));
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ProviderError::Unavailable("gate dropped".to_string()))),
            None => Ok(Vec::new()),
        }
    }

    async fn update(&self, meeting: &Meeting) -> Result<(), ProviderError> {
        if self.fail_updates {
            return Err(ProviderError::Rejected("read-only store".to_string()));
        }
        self.updates.lock().expect("updates lock").push(meeting.clone());
        Ok(())
    }
}
