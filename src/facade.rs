//! Bridge from the `log` crate macros into the global router.
//!
//! After [`init`], `log::info!` and friends are forwarded to
//! [`crate::global()`] with the call site the facade captured.

use eyre::Context;
use log::LevelFilter;

use crate::Level;

struct FacadeLogger;

impl log::Log for FacadeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Level::from(metadata.level()) >= crate::global().min_level()
    }

    fn log(&self, record: &log::Record) {
        crate::global().log(
            Level::from(record.level()),
            record.args().to_string(),
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
        );
    }

    fn flush(&self) {
        crate::global().flush();
    }
}

static FACADE: FacadeLogger = FacadeLogger;

/// Registers the global router as the `log` crate's logger.
///
/// `filter` is handed to `log::set_max_level` so the facade's own fast path
/// works; the router still applies its own threshold on top. Fails if
/// another logger was already registered for this process.
pub fn init(filter: LevelFilter) -> eyre::Result<()> {
    log::set_max_level(filter);
    log::set_logger(&FACADE).context("Failed registering logger")?;

    Ok(())
}
