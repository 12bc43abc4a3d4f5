//! Sink trait for log output destinations

use super::error::{LoggerError, Result};
use crate::sinks::ConsoleSink;
use parking_lot::Mutex;
use std::sync::Arc;

/// A destination for formatted log records.
///
/// `write` receives one complete line (header, message and trailing
/// newline) and must either accept all of it or report why not.
pub trait Sink: Send {
    fn write(&mut self, record: &[u8]) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Ordered list of sinks behind one lock.
///
/// Cloning shares the same sinks; loggers derived from one another write
/// through the same `SinkSet` and therefore serialize on the same lock.
#[derive(Clone)]
pub struct SinkSet {
    sinks: Arc<Mutex<Vec<Box<dyn Sink>>>>,
}

impl SinkSet {
    /// Build a set from `sinks`, falling back to stderr when empty
    pub fn new(mut sinks: Vec<Box<dyn Sink>>) -> Self {
        if sinks.is_empty() {
            sinks.push(Box::new(ConsoleSink::stderr()));
        }
        Self {
            sinks: Arc::new(Mutex::new(sinks)),
        }
    }

    pub fn stderr() -> Self {
        Self::new(Vec::new())
    }

    /// Write `record` to every sink in order while holding the lock.
    ///
    /// A failing sink does not stop the remaining ones from receiving the
    /// record; the first failure is returned.
    pub fn write_all(&self, record: &[u8]) -> Result<()> {
        let mut sinks = self.sinks.lock();
        let mut first_error = None;

        for sink in sinks.iter_mut() {
            if let Err(e) = sink.write(record) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        let mut first_error = None;

        for sink in sinks.iter_mut() {
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn push(&self, sink: Box<dyn Sink>) {
        self.sinks.lock().push(sink);
    }

    /// Names of the sinks, in write order
    pub fn names(&self) -> Vec<String> {
        self.sinks.lock().iter().map(|s| s.name().to_string()).collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sinks.lock().len()
    }

    /// True if both handles share the same underlying sinks
    #[cfg(test)]
    fn same_as(&self, other: &SinkSet) -> bool {
        Arc::ptr_eq(&self.sinks, &other.sinks)
    }
}

/// Wrap an io error from `sink` into a [`LoggerError::SinkWrite`]
pub(crate) fn write_error(sink: &str, source: std::io::Error) -> LoggerError {
    LoggerError::sink_write(sink, source)
}
