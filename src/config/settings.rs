//! Data file location.

use std::path::PathBuf;


/// Default data file under the user's home directory.
///
/// Overridable with `--file` or the `TTRACK_FILE` environment variable.
pub fn default_data_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ttrack.json")
}
