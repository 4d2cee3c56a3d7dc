//! File collaborators. Every failure is reported with the offending path.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{IoError, Result};

/// Reads a UTF-8 text file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        IoError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Reads and parses a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn read_json(path: &Path) -> Result<Value> {
    let text = read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Creates `path` and its parents if they do not exist yet.
///
/// # Errors
///
/// Returns an error if a directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| {
        IoError::CreateDir {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Writes `contents` to a sibling temporary file, then renames it over `path`.
///
/// A failed write never leaves a partial file at `path`.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be written or moved.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp = temp_sibling(path)?;
    if let Err(source) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(IoError::Write { path: tmp, source }.into());
    }
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(IoError::Rename {
            from: tmp,
            to: path.to_path_buf(),
            source,
        }
        .into());
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let Some(file_name) = path.file_name() else {
        return Err(IoError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        }
        .into());
    };
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LiftupError;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("liftup-io-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn write_atomic_replaces_contents() {
        let dir = scratch_dir();
        ensure_dir(&dir).unwrap();
        let path = dir.join("a.track");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "second");
        assert!(!dir.join("a.track.tmp").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = scratch_dir().join("nested").join("deeper");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        fs::remove_dir_all(dir.parent().unwrap().parent().unwrap()).unwrap();
    }

    #[test]
    fn missing_file_reports_path() {
        let path = scratch_dir().join("missing.json");
        let err = read_json(&path).unwrap_err();
        match err {
            LiftupError::Io(IoError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let path = scratch_dir().join("no-such-dir").join("x.track");
        assert!(write_atomic(&path, b"data").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn invalid_json_is_a_format_error() {
        let dir = scratch_dir();
        ensure_dir(&dir).unwrap();
        let path = dir.join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_json(&path), Err(LiftupError::Format(_))));
        fs::remove_dir_all(&dir).unwrap();
    }
}
