use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::error::AppendError;

/// Permission bits of a newly created log file (`rw-r--r--`).
pub const FILE_MODE: u32 = 0o644;

/// Append-only log file, opened and closed on every write.
///
/// No descriptor is held between calls, so the file can be moved or
/// truncated by another process between two records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file (creating it if needed), writes `line` in a single call and closes it.
    ///
    /// `File` is unbuffered and reports nothing when closed, so a failure
    /// surfaces from the open or from the write.
    pub fn append(&self, line: &str) -> Result<(), AppendError> {
        let mut file = open_append(&self.path).map_err(AppendError::Open)?;
        file.write_all(line.as_bytes()).map_err(AppendError::Write)?;
        drop(file);
        Ok(())
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path)
}
