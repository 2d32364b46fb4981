//! Process-wide, thread-safe log routing.
//!
//! Severity-tagged messages from arbitrary call sites are filtered against a
//! runtime-adjustable threshold and delivered, in a single total order, to
//! the enabled sinks (console and/or file). Configuration can change while
//! other threads are logging.

pub mod facade;
mod formatters;
mod level;
mod macros;
mod record;
mod router;
mod sinks;

pub use formatters::LineFormatter;
pub use level::Level;
pub use record::Record;
pub use router::{global, Router};
pub use sinks::{ConsoleSink, FileSink, SinkOpenError};

pub trait LogFormatter: Sync + Send {
    fn format(&self, record: &Record) -> String;
}

pub trait LogSink: Send {
    fn write_line(&mut self, line: &str) -> eyre::Result<()>;
    fn flush(&mut self);
}
