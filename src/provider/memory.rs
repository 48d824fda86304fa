use std::path::Path;
use std::sync::RwLock;
use std::time::Duration;

use super::{MeetingProvider, ProviderError};
use crate::errors::AppError;
use crate::models::meeting::{Field, Meeting, Suggestion};

/// Keeps meetings in process memory. An optional delay is applied before every
/// call to mimic a remote store.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    meetings: RwLock<Vec<Meeting>>,
    delay: Duration,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_meetings(meetings: Vec<Meeting>) -> Self {
        Self {
            meetings: RwLock::new(meetings),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Read a JSON array of meetings from `path`.
    pub fn from_seed_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Seed(format!("{}: {e}", path.display())))?;
        let meetings: Vec<Meeting> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Seed(format!("{}: {e}", path.display())))?;
        log::info!("Seeded {} meetings from {}", meetings.len(), path.display());
        Ok(Self::with_meetings(meetings))
    }

    pub fn len(&self) -> usize {
        self.meetings.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Case-insensitive prefix match. An empty partial matches nothing.
fn is_prefix_match(value: &str, partial: &str) -> bool {
    !partial.is_empty() && value.to_lowercase().starts_with(&partial.to_lowercase())
}

impl MeetingProvider for InMemoryProvider {
    async fn load(&self) -> Result<Vec<Meeting>, ProviderError> {
        self.pause().await;
        let meetings = self
            .meetings
            .read()
            .map_err(|_| ProviderError::Unavailable("meeting store lock poisoned".to_string()))?;
        Ok(meetings.clone())
    }

    async fn filter(&self, field: Field, partial: &str) -> Result<Vec<Suggestion>, ProviderError> {
        if !field.is_suggestible() {
            return Err(ProviderError::Rejected(format!("{field} is not suggestible")));
        }
        self.pause().await;
        let meetings = self
            .meetings
            .read()
            .map_err(|_| ProviderError::Unavailable("meeting store lock poisoned".to_string()))?;
        Ok(meetings
            .iter()
            .filter(|m| is_prefix_match(&m.value_of(field), partial))
            .map(|m| Suggestion::from_meeting(m, field))
            .collect())
    }

    async fn update(&self, meeting: &Meeting) -> Result<(), ProviderError> {
        self.pause().await;
        let mut meetings = self
            .meetings
            .write()
            .map_err(|_| ProviderError::Unavailable("meeting store lock poisoned".to_string()))?;
        meetings.push(meeting.clone());
        Ok(())
    }
}
