//! Append-only trace file with a single rotated backup.
//!
//! When the file grows past the size limit it is renamed to `<file>.1`,
//! replacing any earlier backup, and a fresh file is started.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the trace file is rotated (5 MiB).
pub const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;

/// Line writer shared by the span exporter.
pub struct RotatingFile {
    path: PathBuf,
    limit: u64,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, ROTATE_AT_BYTES)
    }

    #[must_use]
    pub const fn with_limit(path: PathBuf, limit: u64) -> Self {
        Self {
            path,
            limit,
            handle: Mutex::new(None),
        }
    }

    /// Path of the rotated backup.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".1");
        PathBuf::from(name)
    }

    /// Appends `line` and a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Any I/O failure while rotating, opening, or writing.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.is_over_limit() {
            *handle = None;
            fs::rename(&self.path, self.backup_path())?;
        }

        let file = match handle.take() {
            Some(file) => file,
            None => open_append(&self.path)?,
        };
        let file = handle.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_over_limit(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.limit)
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone());

        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_single_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limit(path.clone(), 8);

        file.append_line("first-line").unwrap();
        file.append_line("second-line").unwrap();
        assert_eq!(fs::read_to_string(file.backup_path()).unwrap(), "first-line\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "second-line\n");

        file.append_line("third-line").unwrap();
        assert_eq!(fs::read_to_string(file.backup_path()).unwrap(), "second-line\n");

        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 2);
    }

    #[test]
    fn backup_sits_next_to_file() {
        let file = RotatingFile::new(PathBuf::from("/tmp/shelfscout-otlp.json"));
        assert_eq!(file.backup_path(), PathBuf::from("/tmp/shelfscout-otlp.json.1"));
    }
}
