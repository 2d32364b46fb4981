use std::{
    path::Path,
    sync::{
        atomic::{AtomicU8, Ordering},
        Mutex, MutexGuard, OnceLock,
    },
};

use crate::{
    formatters::LineFormatter,
    sinks::{ConsoleSink, FileSink, SinkOpenError},
    Level, LogFormatter, LogSink, Record,
};

/// Routes severity-tagged messages to the enabled sinks, safely under
/// concurrent use from many threads.
///
/// One mutex guards the whole sink configuration and write path, so records
/// appear in every sink in lock-acquisition order and a record's console and
/// file writes always see the same sink snapshot. The severity threshold
/// lives outside the lock in an atomic so suppressed records return without
/// contending on it.
///
/// A `Router` is an ordinary value; construct and share one per component if
/// you want isolation, or use [`global()`] for the process-wide instance the
/// crate macros and the `log` facade write to.
pub struct Router {
    min_level: AtomicU8,
    sinks: Mutex<Sinks>,
    formatter: LineFormatter,
}

struct Sinks {
    console_enabled: bool,
    console: ConsoleSink,
    file: Option<FileSink>,
}

impl Sinks {
    /// Write failures are swallowed: logging must never take the host
    /// application down. The next call simply tries again.
    fn write(&mut self, line: &str) {
        if self.console_enabled {
            let _ = self.console.write_line(line);
        }
        if let Some(file) = self.file.as_mut() {
            let _ = file.write_line(line);
        }
    }
}

impl Router {
    /// Defaults: threshold `Info`, console on, file off.
    pub fn new() -> Self {
        Self {
            min_level: AtomicU8::new(Level::Info as u8),
            sinks: Mutex::new(Sinks {
                console_enabled: true,
                console: ConsoleSink::new(),
                file: None,
            }),
            formatter: LineFormatter,
        }
    }

    pub fn min_level(&self) -> Level {
        // The atomic only ever holds a valid discriminant.
        Level::from_raw(self.min_level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// Replaces the severity threshold.
    ///
    /// Takes effect for subsequent `log` calls on all threads. A record
    /// racing the change may be filtered by either the old or the new
    /// threshold; that is deliberate, the filter read stays off the lock.
    pub fn set_min_level(&self, level: Level) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    /// Atomically swaps the sink configuration.
    ///
    /// `Some(path)` opens the file in append mode; `None` closes any current
    /// file sink. The change is all-or-nothing: the replacement file is
    /// opened before the current configuration is touched, so on
    /// [`SinkOpenError`] the previous sinks, including any prior file sink,
    /// stay fully active. On success the previous handle is flushed and
    /// closed inside the same critical section that installs the new one, so
    /// no write ever lands on a half-swapped generation.
    pub fn configure_sinks(
        &self,
        to_console: bool,
        file_path: Option<&Path>,
    ) -> Result<(), SinkOpenError> {
        let file = match file_path {
            Some(path) => Some(FileSink::open(path)?),
            None => None,
        };

        let mut sinks = self.lock_sinks();
        sinks.console_enabled = to_console;
        // Overwriting drops the old FileSink, which flushes and closes it.
        sinks.file = file;
        Ok(())
    }

    /// Core entry point: filter, format, write.
    ///
    /// Records below the threshold return immediately without taking the
    /// write lock or formatting anything. Everything else is serialized:
    /// timestamp capture, formatting and both sink writes happen under one
    /// lock hold. Sink I/O failures never propagate to the caller.
    pub fn log<S: Into<String>>(&self, level: Level, message: S, file: &str, line: u32) {
        if (level as u8) < self.min_level.load(Ordering::Relaxed) {
            return;
        }

        let mut sinks = self.lock_sinks();
        let record = Record::now(level, message, file, line);
        let rendered = self.formatter.format(&record);
        sinks.write(&rendered);
    }

    /// Flushes every enabled sink.
    pub fn flush(&self) {
        let mut sinks = self.lock_sinks();
        sinks.console.flush();
        if let Some(file) = sinks.file.as_mut() {
            file.flush();
        }
    }

    /// Explicit teardown: flushes the console and closes any open file sink.
    ///
    /// Dropping the router (or just the file sink, on reconfiguration) also
    /// flushes and closes the handle; `close` exists so shutdown does not
    /// have to rely on drop order.
    pub fn close(&self) {
        let mut sinks = self.lock_sinks();
        sinks.console.flush();
        sinks.file = None;
    }

    fn lock_sinks(&self) -> MutexGuard<'_, Sinks> {
        // A thread that panicked while logging poisons the mutex; the sink
        // state itself is still sound, so keep logging with it.
        match self.sinks.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<Router> = OnceLock::new();

/// The process-wide router.
///
/// Lazily constructed with the defaults on first use. The crate macros and
/// the [`crate::facade`] bridge both log through this instance; components
/// that want their own isolated router can construct [`Router`] directly.
pub fn global() -> &'static Router {
    GLOBAL.get_or_init(Router::new)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn defaults_are_info_console_no_file() {
        let router = Router::new();
        assert_eq!(router.min_level(), Level::Info);

        let sinks = router.lock_sinks();
        assert!(sinks.console_enabled);
        assert!(sinks.file.is_none());
    }

    #[test]
    fn set_min_level_is_visible_to_later_reads() {
        let router = Router::new();
        router.set_min_level(Level::Error);
        assert_eq!(router.min_level(), Level::Error);
        router.set_min_level(Level::Trace);
        assert_eq!(router.min_level(), Level::Trace);
    }

    #[test]
    fn global_returns_the_same_instance() {
        let a = global() as *const Router;
        let b = global() as *const Router;
        assert_eq!(a, b);
    }

    #[test]
    fn suppressed_record_skips_the_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiet.log");

        let router = Router::new();
        router.configure_sinks(false, Some(&path)).unwrap();
        router.set_min_level(Level::Warning);
        router.log(Level::Debug, "x", "a.txt", 1);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn close_drops_the_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        let router = Router::new();
        router.configure_sinks(false, Some(&path)).unwrap();
        router.set_min_level(Level::Trace);
        router.log(Level::Info, "before close", "a.rs", 1);
        router.close();
        router.log(Level::Info, "after close", "a.rs", 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("before close"));
    }
}
