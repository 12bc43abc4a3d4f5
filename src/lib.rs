//! # Leveled Log
//!
//! A small leveled logger. Each line is timestamped, tagged with its level
//! and optional logger name, filtered against a threshold and written in
//! one piece to every configured sink:
//!
//! ```text
//! 2025/01/08 10:30:45.123 [W][svc] disk full
//! ```
//!
//! - **Levels**: error, warning, info, debug; a message is written iff it is
//!   at least as severe as the logger's threshold
//! - **Thread safe**: concurrent lines never interleave; setters may be
//!   called while other threads log
//! - **Caller location**: optional `file:line`, always on at debug threshold
//! - **Default logger**: process-wide instance behind free functions
//!
//! Sink write failures are returned to the caller of the logging method.
//! The `fatal*` family logs at error level and exits with status 1.
//!
//! ```
//! use leveled_log::prelude::*;
//!
//! let capture = MemorySink::new();
//! let logger = Logger::builder("svc").output(capture.clone()).build();
//!
//! logger.warn_all(&[&"disk", &" ", &"full"]).unwrap();
//! logger.debug("filtered out").unwrap();
//!
//! assert!(capture.contents_string().ends_with(" [W][svc] disk full\n"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Caller, Level, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerOption,
        OutputTarget, Result, Sink,
    };
    pub use crate::sinks::{ConsoleSink, ConsoleTarget, FileSink, MemorySink, WriterSink};
}

pub use self::core::{
    should_emit, Caller, Level, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerOption,
    OutputTarget, Result, Sink, FATAL_EXIT_CODE,
};
pub use global::{
    debug, debug_all, debugf, default_logger, error, error_all, errorf, fatal, fatal_all, fatalf,
    info, info_all, infof, set_colors, set_file_line, set_level, set_level_str, set_name,
    set_output, set_outputs, warn, warn_all, warnf, with_file_line, with_level, with_name,
    with_output,
};
pub use sinks::{ConsoleSink, ConsoleTarget, FileSink, MemorySink, WriterSink};
