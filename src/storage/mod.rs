//! Persistence layer for the tracking store.

mod json_file;

pub use json_file::{load_store, save_store};
