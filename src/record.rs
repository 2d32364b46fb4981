use chrono::{DateTime, Utc};

use crate::Level;

/// One logged event: severity, message, call site and the wall-clock time the
/// event was captured.
///
/// Records are built transiently per `log` call and consumed immediately by
/// the formatter; nothing keeps them around.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub message: String,
    /// Source file of the call site, as captured by `file!()` or supplied by
    /// the caller.
    pub file: String,
    pub line: u32,
    pub timestamp: DateTime<Utc>,
}

impl Record {
    /// Builds a record stamped with the current time.
    ///
    /// Timestamps are UTC. Local time would make log files from different
    /// hosts impossible to collate, so the router does not offer it.
    pub fn now(
        level: Level,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            file: file.into(),
            line,
            timestamp: Utc::now(),
        }
    }
}
