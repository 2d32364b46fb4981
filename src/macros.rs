//! Leveled logging macros.
//!
//! The `router_log!` worker routes one record through an explicit
//! [`crate::Router`]; the per-level shorthands (`trace!` .. `error!`) go
//! through [`crate::global()`]. All of them capture the call site with
//! `file!()` / `line!()` and accept `format!`-style arguments.

#[macro_export]
macro_rules! router_log {
    ($router:expr, $lvl:expr, $($arg:tt)*) => {{
        let __router = $router;
        // Pre-filter so suppressed levels skip the format! allocation too.
        if $lvl >= __router.min_level() {
            __router.log($lvl, format!($($arg)*), file!(), line!());
        }
    }};
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { $crate::router_log!($crate::global(), $crate::Level::Trace, $($arg)*) };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::router_log!($crate::global(), $crate::Level::Debug, $($arg)*) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::router_log!($crate::global(), $crate::Level::Info, $($arg)*) };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => { $crate::router_log!($crate::global(), $crate::Level::Warning, $($arg)*) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::router_log!($crate::global(), $crate::Level::Error, $($arg)*) };
}
