use core::fmt;

/// Severity of a log record.
///
/// The ordering is total and is what the router filters on:
/// `Trace < Debug < Info < Warning < Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Very fine-grained events, usually only wanted when chasing a bug.
    Trace = 0,
    /// Fine-grained events useful while developing.
    Debug = 1,
    /// Progress of the application at a coarse-grained level.
    Info = 2,
    /// Potentially harmful situations.
    Warning = 3,
    /// Errors that still allow the application to continue running.
    Error = 4,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    /// Decodes a raw severity byte, e.g. one read back from the router's
    /// atomic threshold.
    pub fn from_raw(raw: u8) -> Option<Level> {
        match raw {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warning),
            4 => Some(Level::Error),
            _ => None,
        }
    }

    /// Label for a raw severity byte. Values outside the enumeration map to
    /// `"UNKNOWN"` rather than failing; a bad byte from a foreign source must
    /// never take the logging path down.
    pub fn name_of(raw: u8) -> &'static str {
        match Level::from_raw(raw) {
            Some(level) => level.as_str(),
            None => "UNKNOWN",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warning,
            log::Level::Error => Level::Error,
        }
    }
}
