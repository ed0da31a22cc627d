//! Data directory resolution and small file helpers.

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "astro-stats";

/// File name of the SQLite database inside the data directory.
pub const SQLITE_FILE_NAME: &str = "astro-stats.db";

/// Path: ~/.local/share/astro-stats (or the platform equivalent)
///
/// `None` when neither a platform data directory nor a home directory is known.
pub fn default_data_dir() -> Option<PathBuf> {
    let base = dirs::data_dir().or_else(|| {
        let mut home = dirs::home_dir()?;
        home.push(".local");
        home.push("share");
        Some(home)
    })?;
    Some(base.join(APP_DIR_NAME))
}

/// Path of the SQLite database for a data directory.
pub fn sqlite_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SQLITE_FILE_NAME)
}

/// Read a file into a String; a missing file is `Ok(None)`.
pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
    let mut f = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let mut s = String::new();

    f.read_to_string(&mut s)?;

    Ok(Some(s))
}

/// Write a string to file, creating parent directories.
///
/// The contents go to a sibling temp file first and are renamed into place,
/// so a failed write never leaves a truncated document behind. The temp file
/// is removed when any step fails.
pub fn write_string(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    let result = write_synced(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_synced(path: &Path, contents: &str) -> io::Result<()> {
    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())?;
    f.sync_all()
}

/// Remove a file; a missing file is not an error.
pub fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_data_dir_ends_with_app_name() {
        if let Some(dir) = default_data_dir() {
            assert!(dir.ends_with(APP_DIR_NAME));
        }
    }

    #[test]
    fn test_sqlite_path() {
        let path = sqlite_path(Path::new("/tmp/roster"));
        assert_eq!(path, PathBuf::from("/tmp/roster/astro-stats.db"));
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        assert!(read_optional(&path).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_with_nested_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("doc.json");

        write_string(&path, "{\"teams\":[]}").unwrap();
        assert_eq!(
            read_optional(&path).unwrap().as_deref(),
            Some("{\"teams\":[]}")
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        assert!(write_string(&path, "{}").is_err());
        assert!(!path.with_extension("tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");

        write_string(&path, "first").unwrap();
        write_string(&path, "second").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");

        remove_if_exists(&path).unwrap();
        write_string(&path, "x").unwrap();
        remove_if_exists(&path).unwrap();
        assert!(!path.exists());
    }
}
