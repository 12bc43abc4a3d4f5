//! Logging macros for ergonomic log message formatting.
//!
//! Each level macro has two forms:
//!
//! - `info!(logger, "format {}", args...)` renders a format string, like
//!   `format!`;
//! - `info!(logger; a, b, c)` concatenates the `Display` output of each
//!   value with no separator.
//!
//! Both expand to a call on the logger, so the recorded caller location
//! is the macro call site and the expression evaluates to the call's
//! `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::{info, warn};
//!
//! let capture = MemorySink::new();
//! let logger = Logger::builder("svc").output(capture.clone()).build();
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port).unwrap();
//! warn!(logger; "disk", " ", "full").unwrap();
//!
//! assert!(capture.contents_string().contains("[W][svc] disk full\n"));
//! ```

/// Log at an explicit level.
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::builder("").output(MemorySink::new()).build();
/// use leveled_log::log;
/// log!(logger, Level::Info, "Simple message").unwrap();
/// log!(logger, Level::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, ::core::format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::builder("").output(MemorySink::new()).build();
/// use leveled_log::error;
/// error!(logger, "Connection failed: {}", "timeout").unwrap();
/// error!(logger; "code=", 500).unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $logger.error_all(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::builder("").output(MemorySink::new()).build();
/// use leveled_log::warn;
/// warn!(logger, "Retry {} of {}", 1, 3).unwrap();
/// warn!(logger; "disk", " ", "full").unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $logger.warn_all(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::core::format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::builder("").output(MemorySink::new()).build();
/// use leveled_log::info;
/// info!(logger, "Server started on port {}", 8080).unwrap();
/// info!(logger; "users=", 42).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $logger.info_all(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// Nothing is written unless the threshold is `Level::Debug`.
///
/// ```
/// # use leveled_log::prelude::*;
/// let capture = MemorySink::new();
/// let logger = Logger::builder("").level(Level::Debug).output(capture.clone()).build();
/// use leveled_log::debug;
/// debug!(logger, "Cache size: {}", 128).unwrap();
/// assert!(capture.contents_string().contains("[D]"));
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $logger.debug_all(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
}

/// Log at error level and exit the process with status 1.
///
/// ```no_run
/// # use leveled_log::prelude::*;
/// # let logger = Logger::default();
/// use leveled_log::fatal;
/// fatal!(logger, "exit code {}", 2);
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $logger.fatal_all(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger};
    use crate::sinks::MemorySink;

    fn capture(level: Level) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder("").level(level).output(sink.clone()).build();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = capture(Level::Info);
        log!(logger, Level::Info, "Test message").unwrap();
        log!(logger, Level::Warning, "Formatted: {}", 42).unwrap();

        let lines = sink.lines();
        assert!(lines[0].ends_with("[I]Test message"));
        assert!(lines[1].ends_with("[W]Formatted: 42"));
    }

    #[test]
    fn test_level_macros_formatted() {
        let (logger, sink) = capture(Level::Debug);
        error!(logger, "Code: {}", 500).unwrap();
        warn!(logger, "Retry {} of {}", 1, 3).unwrap();
        info!(logger, "Items: {}", 100).unwrap();
        debug!(logger, "Count: {}", 5).unwrap();

        let out = sink.contents_string();
        assert!(out.contains("[E]"));
        assert!(out.contains("Retry 1 of 3"));
        assert!(out.contains("Items: 100"));
        assert!(out.contains("Count: 5"));
    }

    #[test]
    fn test_level_macros_concatenated() {
        let (logger, sink) = capture(Level::Info);
        let free = 3;
        warn!(logger; "disk", " ", "full").unwrap();
        info!(logger; "free=", free, "GB",).unwrap();

        let lines = sink.lines();
        assert!(lines[0].ends_with("[W]disk full"));
        assert!(lines[1].ends_with("[I]free=3GB"));
    }

    #[test]
    fn test_macro_records_call_site() {
        let (logger, sink) = capture(Level::Debug);
        let line = line!() + 1;
        debug!(logger, "here").unwrap();

        assert!(sink
            .contents_string()
            .contains(&format!("macros.rs:{} here", line)));
    }
}
