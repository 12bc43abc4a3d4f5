//! Adapter turning any `io::Write` into a sink

use crate::core::sink::write_error;
use crate::core::{Result, Sink};
use std::io::Write;

/// Sink over an arbitrary writer (socket, pipe, cursor, ...).
pub struct WriterSink<W> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&mut self, record: &[u8]) -> Result<()> {
        self.writer
            .write_all(record)
            .map_err(|e| write_error(&self.name, e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| write_error(&self.name, e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
