//! Typed errors surfaced by the tracking store.

use thiserror::Error;


#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("project \"{0}\" not found")]
    ProjectNotFound(String),

    #[error("a project named \"{0}\" already exists")]
    ProjectExists(String),

    /// Starting while another session runs; names the active project so
    /// the user knows what to stop.
    #[error("project \"{0}\" is already active")]
    AlreadyActive(String),

    #[error("no active session")]
    NoActiveSession,
}
