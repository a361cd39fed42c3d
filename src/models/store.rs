//! The aggregate root: all projects plus the single active pointer.

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Project, Session, StoreError};
use crate::util::random_color;


/// Current schema version of the persisted data file.
pub const DATA_VERSION: u32 = 1;


/// Summary of a session closed by [`Store::stop_session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedSession {
    pub project: String,
    pub duration: i64,
}


/// All tracked projects and which one, if any, currently holds an open
/// session. Invariant: `active_project` is `Some(name)` iff that project's
/// last session has no end; no other project ever has an open session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub version: u32,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub active_project: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}


impl Default for Store {
    fn default() -> Self {
        Self {
            version: DATA_VERSION,
            active_project: None,
            projects: Vec::new(),
        }
    }
}


impl Store {
    pub fn has_project(&self, name: &str) -> bool {
        self.projects.iter().any(|p| p.name == name)
    }

    /// Add a project, drawing a random color when none is given.
    /// Duplicate names are a caller error; check [`Store::has_project`] first.
    pub fn add_project(&mut self, name: &str, color: Option<String>, rng: &mut impl Rng) {
        let color = color.unwrap_or_else(|| random_color(rng));
        self.projects.push(Project::new(name, color));
    }

    /// Remove a project and all its sessions. Clears the active pointer if
    /// it named the removed project.
    pub fn remove_project(&mut self, name: &str) {
        self.projects.retain(|p| p.name != name);
        if self.active_project.as_deref() == Some(name) {
            self.active_project = None;
        }
    }

    /// Rename a project, re-pointing the active pointer if needed.
    pub fn rename_project(&mut self, old: &str, new: &str) -> Result<(), StoreError> {
        if self.has_project(new) {
            return Err(StoreError::ProjectExists(new.to_string()));
        }
        let project = self.get_project_mut(old)?;
        project.name = new.to_string();
        if self.active_project.as_deref() == Some(old) {
            self.active_project = Some(new.to_string());
        }
        Ok(())
    }

    pub fn get_project(&self, name: &str) -> Result<&Project, StoreError> {
        self.projects
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| StoreError::ProjectNotFound(name.to_string()))
    }

    pub fn get_project_mut(&mut self, name: &str) -> Result<&mut Project, StoreError> {
        self.projects
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| StoreError::ProjectNotFound(name.to_string()))
    }

    pub fn is_active(&self) -> bool {
        self.active_project.is_some()
    }

    pub fn get_active(&self) -> Result<&Project, StoreError> {
        let name = self
            .active_project
            .as_deref()
            .ok_or(StoreError::NoActiveSession)?;
        self.get_project(name)
    }

    /// Begin a session on the named project. Only one session may run at a
    /// time, across all projects.
    pub fn start_session(&mut self, name: &str, at: NaiveDateTime) -> Result<(), StoreError> {
        if let Some(active) = &self.active_project {
            return Err(StoreError::AlreadyActive(active.clone()));
        }
        let project = self.get_project_mut(name)?;
        project.add_session(Session::new(at));
        self.active_project = Some(name.to_string());
        Ok(())
    }

    /// Close the active session, attaching a comment when given.
    pub fn stop_session(
        &mut self,
        at: NaiveDateTime,
        comment: Option<String>,
    ) -> Result<ClosedSession, StoreError> {
        let name = self
            .active_project
            .clone()
            .ok_or(StoreError::NoActiveSession)?;
        let project = self.get_project_mut(&name)?;
        let session = project
            .active_session_mut()
            .ok_or(StoreError::NoActiveSession)?;

        session.end = Some(at);
        if comment.is_some() {
            session.comment = comment;
        }
        let duration = session.duration(at);

        self.active_project = None;
        Ok(ClosedSession {
            project: name,
            duration,
        })
    }
}


/// The previous schema stored "" for "nothing active"; fold it into `None`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|name| !name.is_empty()))
}
