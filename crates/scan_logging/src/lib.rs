#![deny(missing_docs)]
//! Logging macros shared by the scanner crates.
//!
//! Every `scan_*!` macro forwards to the `log` facade re-exported here, so a
//! crate only needs `scan_logging` as a dependency to emit records. Which
//! logger receives them is decided by the binary (or by
//! [`initialize_for_tests`]).

#[doc(hidden)]
pub use log as __log;

/// Emits a record at the named [`log::Level`] variant.
///
/// `scan_log!(Warn, "scan {} stalled", id)` is the same as `scan_warn!`.
#[macro_export]
macro_rules! scan_log {
    ($level:ident, $($arg:tt)+) => {
        $crate::__log::log!($crate::__log::Level::$level, $($arg)+)
    };
}

/// Trace-level record.
#[macro_export]
macro_rules! scan_trace {
    ($($arg:tt)+) => { $crate::scan_log!(Trace, $($arg)+) };
}

/// Debug-level record.
#[macro_export]
macro_rules! scan_debug {
    ($($arg:tt)+) => { $crate::scan_log!(Debug, $($arg)+) };
}

/// Info-level record.
#[macro_export]
macro_rules! scan_info {
    ($($arg:tt)+) => { $crate::scan_log!(Info, $($arg)+) };
}

/// Warn-level record.
#[macro_export]
macro_rules! scan_warn {
    ($($arg:tt)+) => { $crate::scan_log!(Warn, $($arg)+) };
}

/// Error-level record.
#[macro_export]
macro_rules! scan_error {
    ($($arg:tt)+) => { $crate::scan_log!(Error, $($arg)+) };
}

/// Routes records to the test harness's captured output.
///
/// Safe to call at the top of every test: only the first call installs a
/// logger. Debug builds log at debug level, release builds at info.
pub fn initialize_for_tests() {
    use simplelog::{Config, TestLogger};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = TestLogger::init(level, Config::default());
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_format_arguments() {
        super::initialize_for_tests();
        let scan_id = 4;
        scan_trace!("trace {}", scan_id);
        scan_debug!("debug {scan_id}");
        scan_info!("info");
        scan_warn!("warn {} {}", scan_id, "x");
        scan_error!("error {:?}", Some(scan_id));
        scan_log!(Info, "direct {}", scan_id);
    }
}
