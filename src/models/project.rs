//! A named, colored collection of sessions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Session;


/// Sessions are kept in append order, so under normal use the list is
/// chronological and only the last session can be open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub sessions: Vec<Session>,
}


impl Project {
    pub fn new(name: &str, color: String) -> Self {
        Self {
            name: name.to_string(),
            color,
            sessions: Vec::new(),
        }
    }

    pub fn add_session(&mut self, session: Session) {
        self.sessions.push(session);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// The last session, only while it is still open.
    pub fn active_session(&self) -> Option<&Session> {
        self.sessions.last().filter(|s| s.is_open())
    }

    pub fn active_session_mut(&mut self) -> Option<&mut Session> {
        self.sessions.last_mut().filter(|s| s.is_open())
    }

    /// All-time total across every session, in seconds.
    pub fn total_duration(&self, now: NaiveDateTime) -> i64 {
        self.sessions.iter().map(|s| s.duration(now)).sum()
    }
}
