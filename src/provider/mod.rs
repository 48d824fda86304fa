//! The record provider the form looks meetings up in.
//!
//! Storage and transport belong to the implementation; the form only relies on
//! the three calls below. [`memory::InMemoryProvider`] backs the server and the
//! tests.

pub mod memory;

use std::fmt;
use std::future::Future;

use crate::models::meeting::{Field, Meeting, Suggestion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The backing store could not be reached.
    Unavailable(String),
    /// The store answered but refused the request.
    Rejected(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable(e) => write!(f, "Provider unavailable: {e}"),
            ProviderError::Rejected(e) => write!(f, "Provider rejected request: {e}"),
        }
    }
}

impl std::error::Error for ProviderError {}

pub trait MeetingProvider: Send + Sync + 'static {
    /// All previously stored meetings, in the provider's order.
    fn load(&self) -> impl Future<Output = Result<Vec<Meeting>, ProviderError>> + Send;

    /// Suggestions for a partially typed value of a suggestible field.
    /// Matching and ordering are up to the provider.
    fn filter(
        &self,
        field: Field,
        partial: &str,
    ) -> impl Future<Output = Result<Vec<Suggestion>, ProviderError>> + Send;

    /// Notify the store of a newly accepted meeting.
    fn update(&self, meeting: &Meeting) -> impl Future<Output = Result<(), ProviderError>> + Send;
}
