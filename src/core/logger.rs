//! Main logger implementation

use super::{
    buffer_pool::BufferPool,
    error::{LoggerError, Result},
    header::{format_header, ByteWriter, Caller, HeaderStyle},
    level::{should_emit, Level},
    sink::{Sink, SinkSet},
};
use chrono::Local;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicI8, Ordering};
use std::sync::Arc;

/// Exit status used by the `fatal*` family
pub const FATAL_EXIT_CODE: i32 = 1;

/// A named, independently configurable logging endpoint.
///
/// Every method takes `&self`; a `Logger` can be shared between threads
/// (e.g. behind an `Arc` or in a `static`) and reconfigured while other
/// threads are logging through it. Setters are visible to every emission
/// that starts after the setter returns.
///
/// Lines are rendered into a pooled scratch buffer without holding any
/// lock, then written to each sink in order while the sink lock is held,
/// so concurrent lines never interleave.
///
/// Emission methods return the first sink failure, if any. Nothing is
/// retried and nothing is silently dropped.
pub struct Logger {
    threshold: AtomicI8,
    file_line: AtomicBool,
    colors: AtomicBool,
    name: RwLock<Arc<str>>,
    sinks: RwLock<SinkSet>,
    buffers: BufferPool,
}

/// Deferred configuration applied to a logger at construction time.
///
/// Options apply in order; a later option touching the same field wins.
pub enum LoggerOption {
    Level(Level),
    Name(String),
    /// Replace all sinks with this one
    Output(Box<dyn Sink>),
    /// Append a sink after the ones already configured
    AddOutput(Box<dyn Sink>),
    FileLine(bool),
    Colors(bool),
}

impl LoggerOption {
    pub fn output<S: Sink + 'static>(sink: S) -> Self {
        LoggerOption::Output(Box::new(sink))
    }

    pub fn add_output<S: Sink + 'static>(sink: S) -> Self {
        LoggerOption::AddOutput(Box::new(sink))
    }
}

/// Concatenates values using their `Display` impls, with no separator
struct Concat<'a, 'b>(&'a [&'b dyn fmt::Display]);

impl fmt::Display for Concat<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl Logger {
    /// Create a logger named `name`, applying `options` in order.
    ///
    /// Without options the logger filters at [`Level::Info`] and writes to
    /// stderr.
    pub fn new(name: impl Into<String>, options: impl IntoIterator<Item = LoggerOption>) -> Self {
        options
            .into_iter()
            .fold(LoggerBuilder::new(name), LoggerBuilder::option)
            .build()
    }

    fn from_parts(
        name: Arc<str>,
        level: Level,
        file_line: bool,
        colors: bool,
        sinks: SinkSet,
    ) -> Self {
        Self {
            threshold: AtomicI8::new(level as i8),
            file_line: AtomicBool::new(file_line),
            colors: AtomicBool::new(colors),
            name: RwLock::new(name),
            sinks: RwLock::new(sinks),
            buffers: BufferPool::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------

    pub fn level(&self) -> Level {
        Level::from_i8(self.threshold.load(Ordering::SeqCst))
    }

    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as i8, Ordering::SeqCst);
    }

    /// Set the threshold from a token such as `"debug"`, `"W"` or `"Error"`.
    ///
    /// Unrecognized tokens leave the threshold unchanged and return `false`.
    pub fn set_level_str(&self, token: &str) -> bool {
        match Level::from_token(token) {
            Some(level) => {
                self.set_level(level);
                true
            }
            None => false,
        }
    }

    pub fn name(&self) -> String {
        self.name.read().to_string()
    }

    /// Replace the display tag. An empty name disables the tag.
    pub fn set_name(&self, name: impl Into<String>) {
        let name: String = name.into();
        *self.name.write() = Arc::from(name);
    }

    pub fn file_line(&self) -> bool {
        self.file_line.load(Ordering::SeqCst)
    }

    /// Include the caller's `file:line` in every header.
    ///
    /// The location is also included whenever the threshold is
    /// [`Level::Debug`], regardless of this flag.
    pub fn set_file_line(&self, included: bool) {
        self.file_line.store(included, Ordering::SeqCst);
    }

    pub fn colors(&self) -> bool {
        self.colors.load(Ordering::SeqCst)
    }

    /// Color the level marker with ANSI codes (off by default)
    pub fn set_colors(&self, enabled: bool) {
        self.colors.store(enabled, Ordering::SeqCst);
    }

    /// Replace every sink with `sink`
    pub fn set_output<S: Sink + 'static>(&self, sink: S) {
        self.set_outputs(vec![Box::new(sink)]);
    }

    /// Replace every sink. An empty list falls back to stderr.
    pub fn set_outputs(&self, sinks: Vec<Box<dyn Sink>>) {
        *self.sinks.write() = SinkSet::new(sinks);
    }

    /// Append a sink after the configured ones.
    ///
    /// Loggers sharing this logger's sinks (see [`Logger::with_name`]) see
    /// the new sink too.
    pub fn add_output<S: Sink + 'static>(&self, sink: S) {
        self.sinks.read().push(Box::new(sink));
    }

    /// Names of the configured sinks in write order
    pub fn output_names(&self) -> Vec<String> {
        self.sinks.read().names()
    }

    /// Whether a message at `level` would currently be written
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        should_emit(self.level(), level)
    }

    pub fn flush(&self) -> Result<()> {
        let sinks = self.sinks.read().clone();
        sinks.flush()
    }

    // ---------------------------------------------------------------------
    // Derived loggers
    // ---------------------------------------------------------------------

    fn derive(&self) -> Self {
        Self::from_parts(
            Arc::clone(&self.name.read()),
            self.level(),
            self.file_line(),
            self.colors(),
            self.sinks.read().clone(),
        )
    }

    /// New logger with a different name, sharing this logger's sinks
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let logger = self.derive();
        logger.set_name(name);
        logger
    }

    /// New logger with a different threshold, sharing this logger's sinks
    #[must_use]
    pub fn with_level(&self, level: Level) -> Self {
        let logger = self.derive();
        logger.set_level(level);
        logger
    }

    /// New logger with a different file:line setting, sharing this logger's sinks
    #[must_use]
    pub fn with_file_line(&self, included: bool) -> Self {
        let logger = self.derive();
        logger.set_file_line(included);
        logger
    }

    /// New logger with the same settings writing only to `sink`
    #[must_use]
    pub fn with_output<S: Sink + 'static>(&self, sink: S) -> Self {
        let logger = self.derive();
        logger.set_output(sink);
        logger
    }

    // ---------------------------------------------------------------------
    // Emission
    // ---------------------------------------------------------------------

    fn location_enabled(&self, threshold: Level) -> bool {
        threshold == Level::Debug || self.file_line()
    }

    #[track_caller]
    fn dispatch(&self, level: Level, message: &dyn fmt::Display) -> Result<()> {
        let threshold = self.level();
        if !should_emit(threshold, level) {
            return Ok(());
        }

        let caller = if self.location_enabled(threshold) {
            Some(Caller::here())
        } else {
            None
        };

        self.write_record(level, caller, message)
    }

    fn write_record(
        &self,
        level: Level,
        caller: Option<Caller>,
        message: &dyn fmt::Display,
    ) -> Result<()> {
        let now = Local::now().naive_local();
        let name = Arc::clone(&self.name.read());
        let style = HeaderStyle {
            colors: self.colors(),
        };

        let mut buf = self.buffers.take();
        if format_header(&mut buf, &now, level, &name, caller, style).is_err() {
            self.buffers.give(buf);
            return Err(LoggerError::Format);
        }

        let start = buf.len();
        if fmt::write(&mut ByteWriter(&mut buf), format_args!("{}", message)).is_err() {
            self.buffers.give(buf);
            return Err(LoggerError::Format);
        }
        if buf.len() == start || buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }

        let sinks = self.sinks.read().clone();
        let result = sinks.write_all(&buf);
        self.buffers.give(buf);
        result
    }

    /// Log `message` at `level`
    #[track_caller]
    pub fn log(&self, level: Level, message: impl fmt::Display) -> Result<()> {
        self.dispatch(level, &message)
    }

    /// Log pre-built format arguments at `level`
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        self.dispatch(level, &args)
    }

    /// Log with an explicitly supplied caller location.
    ///
    /// When location output is active and `caller` is `None`, the header
    /// carries the `???:0` marker.
    pub fn log_at(
        &self,
        level: Level,
        caller: Option<Caller>,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        let threshold = self.level();
        if !should_emit(threshold, level) {
            return Ok(());
        }
        let caller = if self.location_enabled(threshold) {
            Some(caller.unwrap_or(Caller::UNKNOWN))
        } else {
            None
        };
        self.write_record(level, caller, &args)
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) -> Result<()> {
        self.dispatch(Level::Error, &message)
    }

    /// Log the concatenation of `values` at error level
    #[track_caller]
    pub fn error_all(&self, values: &[&dyn fmt::Display]) -> Result<()> {
        self.dispatch(Level::Error, &Concat(values))
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.dispatch(Level::Error, &args)
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) -> Result<()> {
        self.dispatch(Level::Warning, &message)
    }

    #[track_caller]
    pub fn warn_all(&self, values: &[&dyn fmt::Display]) -> Result<()> {
        self.dispatch(Level::Warning, &Concat(values))
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.dispatch(Level::Warning, &args)
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) -> Result<()> {
        self.dispatch(Level::Info, &message)
    }

    #[track_caller]
    pub fn info_all(&self, values: &[&dyn fmt::Display]) -> Result<()> {
        self.dispatch(Level::Info, &Concat(values))
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.dispatch(Level::Info, &args)
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) -> Result<()> {
        self.dispatch(Level::Debug, &message)
    }

    #[track_caller]
    pub fn debug_all(&self, values: &[&dyn fmt::Display]) -> Result<()> {
        self.dispatch(Level::Debug, &Concat(values))
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.dispatch(Level::Debug, &args)
    }

    /// Log at error level, then exit the process with [`FATAL_EXIT_CODE`].
    ///
    /// The process exits even if the line could not be written.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        let result = self.dispatch(Level::Error, &message);
        self.terminate(result)
    }

    #[track_caller]
    pub fn fatal_all(&self, values: &[&dyn fmt::Display]) -> ! {
        let result = self.dispatch(Level::Error, &Concat(values));
        self.terminate(result)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let result = self.dispatch(Level::Error, &args);
        self.terminate(result)
    }

    fn terminate(&self, result: Result<()>) -> ! {
        if let Err(e) = result {
            eprintln!("[LOGGER ERROR] fatal log line not written: {}", e);
        }
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] flush before exit failed: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::default().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.level())
            .field("file_line", &self.file_line())
            .field("colors", &self.colors())
            .field("outputs", &self.output_names())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] flush on drop failed: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_log::prelude::*;
///
/// let capture = MemorySink::new();
/// let logger = Logger::builder("svc")
///     .level(Level::Debug)
///     .output(capture.clone())
///     .build();
///
/// logger.info("ready").unwrap();
/// assert!(capture.contents_string().contains("[I][svc] "));
/// ```
pub struct LoggerBuilder {
    name: String,
    level: Level,
    file_line: bool,
    colors: bool,
    outputs: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Level::Info,
            file_line: false,
            colors: false,
            outputs: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the threshold from a token; unrecognized tokens are ignored
    #[must_use = "builder methods return a new value"]
    pub fn level_str(mut self, token: &str) -> Self {
        if let Some(level) = Level::from_token(token) {
            self.level = level;
        }
        self
    }

    /// Replace the configured sinks with `sink`
    #[must_use = "builder methods return a new value"]
    pub fn output<S: Sink + 'static>(self, sink: S) -> Self {
        self.outputs(vec![Box::new(sink)])
    }

    /// Replace the configured sinks
    #[must_use = "builder methods return a new value"]
    pub fn outputs(mut self, sinks: Vec<Box<dyn Sink>>) -> Self {
        self.outputs = sinks;
        self
    }

    /// Append a sink
    #[must_use = "builder methods return a new value"]
    pub fn add_output<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.outputs.push(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_line(mut self, included: bool) -> Self {
        self.file_line = included;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Apply a deferred [`LoggerOption`]
    #[must_use = "builder methods return a new value"]
    pub fn option(self, option: LoggerOption) -> Self {
        match option {
            LoggerOption::Level(level) => self.level(level),
            LoggerOption::Name(name) => self.name(name),
            LoggerOption::Output(sink) => self.outputs(vec![sink]),
            LoggerOption::AddOutput(sink) => {
                let mut builder = self;
                builder.outputs.push(sink);
                builder
            }
            LoggerOption::FileLine(included) => self.file_line(included),
            LoggerOption::Colors(enabled) => self.colors(enabled),
        }
    }

    /// Build the Logger. With no sinks configured it writes to stderr.
    pub fn build(self) -> Logger {
        Logger::from_parts(
            Arc::from(self.name),
            self.level,
            self.file_line,
            self.colors,
            SinkSet::new(self.outputs),
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new("")
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}
