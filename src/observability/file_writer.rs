//! Rotating log file writer with size-based rotation and backup retention.
//!
//! The writer plugs into `tracing-subscriber`'s `fmt` layer as a
//! [`MakeWriter`], so every formatted event lands in a file that is rotated
//! before it grows past a size threshold.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Digits in a backup suffix; nanosecond timestamps are zero-padded to this.
const TIMESTAMP_WIDTH: usize = 20;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds the size threshold it is renamed to
/// `<name>.<timestamp>` and a fresh file is started. Only the newest
/// [`MAX_BACKUP_FILES`] backups are kept.
pub struct RotatingFileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    max_bytes: u64,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Creates a writer for `file_path`. The file is opened on first write.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_bytes(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer that rotates once the file exceeds `max_bytes`.
    pub const fn with_max_bytes(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            writer: Mutex::new(None),
        }
    }

    /// Path of the active log file.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `buf` to the file, rotating first if it has grown too large.
    ///
    /// # Errors
    ///
    /// Fails on file system errors or a poisoned lock.
    pub fn write_bytes(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);

        let mut backup_name = self.file_path.as_os_str().to_owned();
        backup_name.push(format!(".{timestamp:0width$}", width = TIMESTAMP_WIDTH));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_name))?;
        }

        self.cleanup_old_backups()
    }

    /// Deletes backups beyond the retention limit, newest kept.
    ///
    /// Individual deletion failures are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
        let backup_prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&backup_prefix))
            })
            .collect();

        // Suffixes are fixed-width timestamps: reverse lexical order is newest first.
        backups.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

impl Write for &RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = &'a RotatingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}
