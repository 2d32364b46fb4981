use crate::{LogFormatter, Record};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a record as one line of text:
///
/// ```text
/// 2026-08-30 14:07:31 | ERROR | a.txt:10 -> y
/// ```
///
/// This shape is the external contract for anything parsing the log files, so
/// it is fixed rather than templated.
pub struct LineFormatter;

impl LogFormatter for LineFormatter {
    fn format(&self, record: &Record) -> String {
        format!(
            "{} | {} | {}:{} -> {}",
            record.timestamp.format(DATETIME_FORMAT),
            record.level.as_str(),
            record.file,
            record.line,
            record.message,
        )
    }
}
