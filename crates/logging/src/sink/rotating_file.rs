use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::warn;

use crate::error::{Error, Result};
use crate::sink::Sink;

/// A sink that appends lines to a file, rotating it when its size reaches a
/// threshold.
///
/// Rotation shifts existing backups up by one index (`<path>.1` becomes
/// `<path>.2` and so on), renames the live file to `<path>.1`, drops the
/// backup beyond `backup_count`, and reopens a fresh empty file at the
/// original path. With `backup_count = 0` the live file is simply recreated
/// and no backups are kept. A `max_bytes` of zero disables rotation.
pub struct RotatingFileSink {
    path: PathBuf,
    max_bytes: u64,
    backup_count: u32,
    state: Mutex<State>,
}

struct State {
    // None after a failed reopen; the next write retries the open.
    file: Option<File>,
    size: u64,
}

impl RotatingFileSink {
    /// Opens the file at `path` in append mode, creating its parent directory
    /// if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be opened. The sink is unusable in that case, so this is the one fatal
    /// failure mode; everything after construction is fire-and-forget.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backup_count: u32) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::Io("failed to create log directory", e))?;
            }
        }

        let file = open_append(&path).map_err(|e| Error::Io("failed to open log file", e))?;
        let size = file.metadata().map_or(0, |m| m.len());

        Ok(Self {
            path,
            max_bytes,
            backup_count,
            state: Mutex::new(State {
                file: Some(file),
                size,
            }),
        })
    }

    /// Returns the path of the live log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self, index: u32) -> PathBuf {
        let mut os: OsString = self.path.clone().into_os_string();
        os.push(format!(".{index}"));
        PathBuf::from(os)
    }

    /// Shifts backups up by one index and moves the live file to `<path>.1`.
    fn shift_backups(&self) -> std::io::Result<()> {
        if self.backup_count == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.backup_count);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.backup_count).rev() {
            let src = self.backup_path(index);
            if src.exists() {
                fs::rename(src, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }

    fn rotate(&self, state: &mut State) {
        // Release the handle before the rename so the live file is closed.
        state.file = None;

        if let Err(e) = self.shift_backups() {
            warn!(path = %self.path.display(), error = %e, "log rotation failed");
        }

        match File::create(&self.path) {
            Ok(file) => {
                state.file = Some(file);
                state.size = 0;
            }
            Err(e) => {
                // Lines are dropped until a later write reopens the file.
                warn!(path = %self.path.display(), error = %e, "failed to reopen log file");
            }
        }
    }
}

impl Sink for RotatingFileSink {
    fn write(&self, line: &str) {
        let mut state = self.state.lock();

        if state.file.is_none() {
            match open_append(&self.path) {
                Ok(file) => {
                    state.size = file.metadata().map_or(0, |m| m.len());
                    state.file = Some(file);
                }
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "failed to reopen log file");
                    return;
                }
            }
        }

        let Some(file) = state.file.as_mut() else {
            return;
        };

        if let Err(e) = file
            .write_all(line.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
        {
            warn!(path = %self.path.display(), error = %e, "failed to write log line");
            return;
        }
        state.size += line.len() as u64 + 1;

        if self.max_bytes > 0 && state.size >= self.max_bytes {
            self.rotate(&mut state);
        }
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_write_appends_lines_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let sink = RotatingFileSink::open(&path, 1024, 2).unwrap();
        assert_eq!(sink.path(), path);

        sink.write("first");
        sink.write("second");

        assert_eq!(read(&path), "first\nsecond\n");
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/logs/app.log");

        let sink = RotatingFileSink::open(&path, 1024, 0).unwrap();
        sink.write("hello");

        assert_eq!(read(&path), "hello\n");
    }

    #[test]
    fn test_open_seeds_size_from_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "x".repeat(90)).unwrap();

        // 90 existing bytes plus one 11-byte line crosses the threshold.
        let sink = RotatingFileSink::open(&path, 100, 1).unwrap();
        sink.write("0123456789");

        assert!(dir.path().join("app.log.1").exists());
        assert_eq!(read(&path), "");
    }

    #[test]
    fn test_open_fails_when_directory_cannot_be_created() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = RotatingFileSink::open(blocker.join("sub/app.log"), 1024, 1);
        assert!(matches!(result, Err(Error::Io(_, _))));
    }

    #[test]
    fn test_rotation_retains_bounded_backups() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        // Every 10-byte line triggers a rotation.
        let sink = RotatingFileSink::open(&path, 10, 2).unwrap();

        sink.write("line-one-"); // rotated into .1
        sink.write("line-two-"); // .1 shifts to .2, this becomes .1
        sink.write("line-three"); // .2 (line-one) evicted

        assert_eq!(read(&path), "");
        assert_eq!(read(&dir.path().join("app.log.1")), "line-three\n");
        assert_eq!(read(&dir.path().join("app.log.2")), "line-two-\n");
        assert!(!dir.path().join("app.log.3").exists());
    }

    #[test]
    fn test_backup_count_zero_recreates_without_backups() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let sink = RotatingFileSink::open(&path, 10, 0).unwrap();

        sink.write("aaaaaaaaaa");
        sink.write("bbbb");

        assert_eq!(read(&path), "bbbb\n");
        assert!(!dir.path().join("app.log.1").exists());
    }

    #[test]
    fn test_max_bytes_zero_never_rotates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let sink = RotatingFileSink::open(&path, 0, 3).unwrap();

        for _ in 0..50 {
            sink.write("a long enough line to matter");
        }

        assert!(!dir.path().join("app.log.1").exists());
        assert_eq!(read(&path).lines().count(), 50);
    }

    #[test]
    fn test_every_line_lands_exactly_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let sink = RotatingFileSink::open(&path, 100, 3).unwrap();

        let lines: Vec<String> = (0..40).map(|i| format!("message number {i:02}")).collect();
        for line in &lines {
            sink.write(line);
        }

        let mut found = String::new();
        for index in (1..=3).rev() {
            let backup = dir.path().join(format!("app.log.{index}"));
            if backup.exists() {
                found.push_str(&read(&backup));
            }
        }
        found.push_str(&read(&path));

        let found: Vec<&str> = found.lines().collect();
        // Early lines may have been evicted with their backup; the survivors
        // must be the most recent ones, in order, each exactly once.
        assert!(!found.is_empty());
        let expected: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .skip(lines.len() - found.len())
            .collect();
        assert_eq!(found, expected);
    }
}
