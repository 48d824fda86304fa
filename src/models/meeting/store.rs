use super::types::{Meeting, MeetingId};

/// Insertion-ordered, append-only list of accepted meetings.
#[derive(Debug, Clone, Default)]
pub struct MeetingList {
    meetings: Vec<Meeting>,
}

impl MeetingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from provider records, keeping the order they were returned in.
    pub fn from_loaded(meetings: Vec<Meeting>) -> Self {
        Self { meetings }
    }

    pub fn append(&mut self, meeting: Meeting) {
        self.meetings.push(meeting);
    }

    pub fn as_slice(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Meeting> {
        self.meetings.iter()
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    pub fn contains_id(&self, id: &MeetingId) -> bool {
        self.meetings.iter().any(|m| &m.id == id)
    }
}

impl<'a> IntoIterator for &'a MeetingList {
    type Item = &'a Meeting;
    type IntoIter = std::slice::Iter<'a, Meeting>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
