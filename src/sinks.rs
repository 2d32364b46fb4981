use std::{
    fs::File,
    io::{LineWriter, Stdout, Write},
    path::{Path, PathBuf},
};

use eyre::Context;

use crate::LogSink;

/// Returned by sink configuration when the requested log file cannot be
/// opened. The router guarantees the previous sink configuration is still
/// active when this error is returned.
#[derive(Debug, thiserror::Error)]
#[error("failed opening or creating log file {}", path.display())]
pub struct SinkOpenError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Writes formatted lines to the process's standard output stream.
pub struct ConsoleSink {
    handle: Stdout,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            handle: std::io::stdout(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> eyre::Result<()> {
        let mut writer = self.handle.lock();
        writeln!(writer, "{}", line)?;
        writer.flush().context("Can't flush stdout")
    }

    fn flush(&mut self) {
        let _ = self.handle.lock().flush();
    }
}

/// Append-mode file sink.
///
/// The file is opened once, in create+append mode, and the handle is kept
/// open until the sink is dropped. Append rather than truncate: re-enabling
/// a sink on the same path must not destroy lines already written there.
/// Dropping the sink flushes and closes the handle.
#[derive(Debug)]
pub struct FileSink {
    file: LineWriter<File>,
    path: PathBuf,
}

impl FileSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkOpenError> {
        let path = path.as_ref();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkOpenError {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file: LineWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn write_line(&mut self, line: &str) -> eyre::Result<()> {
        writeln!(self.file, "{}", line)?;
        self.file.flush().context("Can't flush log file")
    }

    fn flush(&mut self) {
        let _ = self.file.flush();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn file_sink_appends_across_generations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        {
            let mut sink = FileSink::open(&path).unwrap();
            sink.write_line("first").unwrap();
        }
        {
            let mut sink = FileSink::open(&path).unwrap();
            sink.write_line("second").unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn file_sink_remembers_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let sink = FileSink::open(&path).unwrap();
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn open_fails_with_the_offending_path_in_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("run.log");

        let err = FileSink::open(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert!(err.to_string().contains("no-such-dir"));
    }

    #[test]
    fn console_sink_write_is_ok() {
        let mut sink = ConsoleSink::new();
        assert!(sink.write_line("console check").is_ok());
    }
}
