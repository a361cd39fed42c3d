//! Configuration for ttrack.

mod settings;

pub use settings::default_data_path;
