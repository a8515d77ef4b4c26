use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::Result;

/// Writes `data` as indented UTF-8 JSON, creating parent directories.
///
/// Non-ASCII text is written as-is rather than `\u` escaped.
pub fn try_save_json<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let body = serde_json::to_string_pretty(data)?;
    fs::write(path, body)?;
    Ok(())
}

/// Like [`try_save_json`], reporting the outcome as a flag.
///
/// Failures are logged, never returned.
pub fn save_json<T, P>(data: &T, path: P) -> bool
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match try_save_json(data, path) {
        Ok(()) => {
            #[cfg(feature = "tracing")]
            tracing::info!(path = %path.display(), "saved JSON");
            true
        }
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::error!(path = %path.display(), "failed to save JSON: {_err}");
            false
        }
    }
}

/// Reads JSON from `path`.
///
/// Returns `None` when the file is missing, unreadable or not valid JSON for
/// `T`. Invalid content is logged.
pub fn load_json<T, P>(path: P) -> Option<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path.display(), "failed to read JSON: {_err}");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path.display(), "invalid JSON: {_err}");
            None
        }
    }
}

/// [`load_json`] falling back to `default`.
pub fn load_json_or<T, P>(path: P, default: T) -> T
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    load_json(path).unwrap_or(default)
}

/// Creates `dir` (and parents) if missing and returns it.
pub fn ensure_data_dir(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, fs};

    use serde_json::{json, Value};

    use super::{ensure_data_dir, load_json, load_json_or, save_json, try_save_json};

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/deeper/prices.json");
        let mut data = BTreeMap::new();
        data.insert("bitcoin".to_owned(), 67123.5);
        data.insert("ethereum".to_owned(), 3456.25);

        assert!(save_json(&data, &path));
        let loaded: BTreeMap<String, f64> = load_json(&path).expect("file was just written");
        assert_eq!(loaded, data);
    }

    #[test]
    fn non_ascii_is_written_unescaped_and_indented() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kr.json");
        try_save_json(&json!({"name": "비트코인"}), &path).expect("save must succeed");

        let raw = fs::read_to_string(&path).expect("read back");
        assert!(raw.contains("비트코인"));
        assert!(raw.contains("\n  \"name\""));
    }

    #[test]
    fn missing_file_loads_as_none_or_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        assert!(load_json::<Value, _>(&path).is_none());
        assert_eq!(load_json_or(&path, json!([])), json!([]));
    }

    #[test]
    fn invalid_json_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").expect("write");
        assert!(load_json::<Value, _>(&path).is_none());
    }

    #[test]
    fn save_into_a_file_path_reports_false() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").expect("write");
        assert!(!save_json(&json!({}), blocker.join("child.json")));
    }

    #[test]
    fn ensure_data_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("data/2024");
        let created = ensure_data_dir(&target).expect("create");
        assert!(created.is_dir());
        ensure_data_dir(&target).expect("idempotent");
    }
}
