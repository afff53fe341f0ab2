//! Append-only line writer with size-based rotation.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold for the live trace file (10 MB).
const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
const DEFAULT_MAX_BACKUPS: usize = 3;

/// Thread-safe writer that appends lines to `file_path`.
///
/// Before each write the file size is checked; once it exceeds `max_bytes`
/// the file is renamed to `<file>.<timestamp>` and a fresh one is started.
/// Only the newest `max_backups` rotated files are kept.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits. The file is opened lazily.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error when rotation, opening or writing fails, or when the
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }
        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.6f");
        let backup = backup_prefix(&self.file_path)?;
        fs::rename(&self.file_path, PathBuf::from(format!("{}{stamp}", backup.display())))?;
        self.prune_backups()
    }

    /// Deletes rotated files beyond `max_backups`. Timestamps sort
    /// lexicographically, so the newest backups have the greatest names.
    fn prune_backups(&self) -> io::Result<()> {
        let prefix = backup_prefix(&self.file_path)?;
        let dir = prefix.parent().unwrap_or_else(|| Path::new("."));
        let Some(prefix_name) = prefix.file_name().and_then(|n| n.to_str()) else {
            return Err(io::Error::new(io::ErrorKind::Other, "Invalid file name"));
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(prefix_name))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));

        for stale in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(stale);
        }

        Ok(())
    }
}

/// `<file>.` : every backup name starts with this.
fn backup_prefix(file_path: &Path) -> io::Result<PathBuf> {
    let name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
    Ok(file_path.with_file_name(format!("{name}.")))
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups_in(dir: &Path) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.file_name().unwrap().to_str().unwrap().starts_with("trace.json."))
            .collect();
        found.sort();
        found
    }

    #[test]
    fn test_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
        assert!(backups_in(dir.path()).is_empty());
    }

    #[test]
    fn test_rotates_when_file_exceeds_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        let backups = backups_in(dir.path());
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "0123456789\n");
    }

    #[test]
    fn test_keeps_only_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        for stamp in ["20240101T000000", "20240102T000000", "20240103T000000"] {
            fs::write(dir.path().join(format!("trace.json.{stamp}")), "old\n").unwrap();
        }

        let writer = FileWriter::with_limits(path, 4, 2);
        writer.write_line("overflow").unwrap();
        writer.write_line("fresh").unwrap();

        let backups = backups_in(dir.path());
        assert_eq!(backups.len(), 2);
        assert!(!backups.iter().any(|p| p.ends_with("trace.json.20240101T000000")));
        assert!(!backups.iter().any(|p| p.ends_with("trace.json.20240102T000000")));
    }
}
