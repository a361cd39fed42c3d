//! A single contiguous span of tracked work.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::util::format_duration;


/// One work session. `end` is `None` while the session is still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub start: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}


impl Session {
    /// Create a new open session starting at the given time.
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            start,
            end: None,
            comment: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Duration in seconds; open sessions run until `now`.
    pub fn duration(&self, now: NaiveDateTime) -> i64 {
        (self.end.unwrap_or(now) - self.start).num_seconds()
    }

    pub fn duration_str(&self, now: NaiveDateTime) -> String {
        format_duration(self.duration(now))
    }
}
