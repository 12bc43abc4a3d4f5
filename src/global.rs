//! Process-wide default logger
//!
//! The default logger is created on first use (unnamed, [`Level::Info`],
//! writing to stderr) and lives for the rest of the process. The free
//! functions below forward to it; the setters reconfigure it in place and
//! are safe to call while other threads are logging.

use crate::core::{Level, Logger, Result, Sink};
use std::fmt;
use std::sync::LazyLock;

static DEFAULT: LazyLock<Logger> = LazyLock::new(Logger::default);

/// The process-wide default logger
#[inline]
pub fn default_logger() -> &'static Logger {
    &DEFAULT
}

pub fn set_level(level: Level) {
    DEFAULT.set_level(level);
}

/// Set the default threshold from a token; unknown tokens are ignored
pub fn set_level_str(token: &str) -> bool {
    DEFAULT.set_level_str(token)
}

/// Set the default logger's display tag
pub fn set_name(name: impl Into<String>) {
    DEFAULT.set_name(name);
}

pub fn set_output<S: Sink + 'static>(sink: S) {
    DEFAULT.set_output(sink);
}

pub fn set_outputs(sinks: Vec<Box<dyn Sink>>) {
    DEFAULT.set_outputs(sinks);
}

pub fn set_file_line(included: bool) {
    DEFAULT.set_file_line(included);
}

pub fn set_colors(enabled: bool) {
    DEFAULT.set_colors(enabled);
}

/// Logger derived from the default one, sharing its sinks
pub fn with_name(name: impl Into<String>) -> Logger {
    DEFAULT.with_name(name)
}

pub fn with_level(level: Level) -> Logger {
    DEFAULT.with_level(level)
}

pub fn with_file_line(included: bool) -> Logger {
    DEFAULT.with_file_line(included)
}

pub fn with_output<S: Sink + 'static>(sink: S) -> Logger {
    DEFAULT.with_output(sink)
}

#[track_caller]
pub fn error(message: impl fmt::Display) -> Result<()> {
    DEFAULT.error(message)
}

#[track_caller]
pub fn error_all(values: &[&dyn fmt::Display]) -> Result<()> {
    DEFAULT.error_all(values)
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT.errorf(args)
}

#[track_caller]
pub fn warn(message: impl fmt::Display) -> Result<()> {
    DEFAULT.warn(message)
}

#[track_caller]
pub fn warn_all(values: &[&dyn fmt::Display]) -> Result<()> {
    DEFAULT.warn_all(values)
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT.warnf(args)
}

#[track_caller]
pub fn info(message: impl fmt::Display) -> Result<()> {
    DEFAULT.info(message)
}

#[track_caller]
pub fn info_all(values: &[&dyn fmt::Display]) -> Result<()> {
    DEFAULT.info_all(values)
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT.infof(args)
}

#[track_caller]
pub fn debug(message: impl fmt::Display) -> Result<()> {
    DEFAULT.debug(message)
}

#[track_caller]
pub fn debug_all(values: &[&dyn fmt::Display]) -> Result<()> {
    DEFAULT.debug_all(values)
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT.debugf(args)
}

/// Log at error level through the default logger, then exit with status 1
#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    DEFAULT.fatal(message)
}

#[track_caller]
pub fn fatal_all(values: &[&dyn fmt::Display]) -> ! {
    DEFAULT.fatal_all(values)
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    DEFAULT.fatalf(args)
}
