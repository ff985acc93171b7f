//! Append-mode log file sink.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// An open log file, exclusively owned by one logger
#[derive(Debug)]
pub(crate) struct LogFile {
    path: PathBuf,
    file: File,
}

impl LogFile {
    pub(crate) fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Append `prefix + message + '\n'` with a single write
    pub(crate) fn append_line(&mut self, prefix: &str, message: &str) -> io::Result<()> {
        let mut line = String::with_capacity(prefix.len() + message.len() + 1);
        line.push_str(prefix);
        line.push_str(message);
        line.push('\n');
        self.file.write_all(line.as_bytes())
    }

    pub(crate) fn close(mut self) -> io::Result<()> {
        self.file.flush()?;
        self.file.sync_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lines_are_appended() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").expect("seed file");

        let mut file = LogFile::open(&path).expect("open log file");
        file.append_line("[INFO]     ", "first").expect("append");
        file.append_line("[ERROR]    ", "second").expect("append");
        file.close().expect("close");

        let content = fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "existing\n[INFO]     first\n[ERROR]    second\n");
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("no/such/dir/app.log");
        let err = LogFile::open(&path).expect_err("parent directory does not exist");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
