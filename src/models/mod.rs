//! Core tracking data model.

mod error;
mod project;
mod session;
mod store;

pub use error::StoreError;
pub use project::Project;
pub use session::Session;
pub use store::{ClosedSession, Store, DATA_VERSION};
