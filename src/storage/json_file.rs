//! JSON file persistence for the tracking store.
//!
//! The file is read and written whole; there is no locking, so concurrent
//! invocations sharing one file are last-writer-wins. Acceptable for a
//! single-user local tool.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::{Store, DATA_VERSION};


/// Load the store from disk. A missing file yields an empty store;
/// malformed content or an outdated schema version is a fatal error.
pub fn load_store(path: &Path) -> Result<Store> {
    if !path.exists() {
        return Ok(Store::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;

    let store: Store = serde_json::from_str(&contents)
        .with_context(|| format!("Could not parse data file: {}", path.display()))?;

    if store.version < DATA_VERSION {
        bail!(
            "Data file version {} is too old (current is {}); no automatic migration",
            store.version,
            DATA_VERSION
        );
    }

    Ok(store)
}


/// Overwrite the data file with the full store, pretty-printed.
pub fn save_store(store: &Store, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(store).context("Failed to serialize data")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write data file: {}", path.display()))?;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_store(&dir.path().join("absent.json")).unwrap();
        assert!(store.projects.is_empty());
        assert!(!store.is_active());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let mut rng = StdRng::seed_from_u64(7);
        let mut store = Store::default();
        store.add_project("writing", None, &mut rng);
        store.start_session("writing", dt("2024-01-08 09:00:00")).unwrap();

        save_store(&store, &path).unwrap();
        let loaded = load_store(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_outdated_version_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"version": 0, "projects": []}"#).unwrap();

        let err = load_store(&path).unwrap_err();
        assert!(err.to_string().contains("too old"));
    }

    #[test]
    fn test_missing_version_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"projects": []}"#).unwrap();

        assert!(load_store(&path).is_err());
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_store(&path).is_err());
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        save_store(&Store::default(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains('\n'));
        assert!(contents.contains("\"version\": 1"));
    }
}
