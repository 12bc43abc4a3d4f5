//! In-memory sink, mostly useful for capturing output in tests

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures every record in a shared byte buffer.
///
/// Clones share the buffer: keep one handle to read what a logger wrote
/// through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    /// Captured output as (lossy) UTF-8
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Captured output split into lines, terminators removed
    pub fn lines(&self) -> Vec<String> {
        self.contents_string().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.buf.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, record: &[u8]) -> Result<()> {
        self.buf.lock().extend_from_slice(record);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
