//! Scratch buffers for formatting log lines
//!
//! Each emission borrows a buffer, fills it outside of the sink lock and
//! hands it back once written, so formatting never blocks other writers.

use parking_lot::Mutex;

const INITIAL_CAPACITY: usize = 1024;
const MAX_IDLE: usize = 16;
const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

#[derive(Debug, Default)]
pub struct BufferPool {
    idle: Mutex<Vec<Vec<u8>>>,
}

impl BufferPool {
    pub const fn new() -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Borrow an empty buffer
    pub fn take(&self) -> Vec<u8> {
        match self.idle.lock().pop() {
            Some(buf) => buf,
            None => Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Return a buffer to the pool.
    ///
    /// Buffers that grew past the retention limit, or that arrive while the
    /// pool is full, are dropped.
    pub fn give(&self, mut buf: Vec<u8>) {
        if buf.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        buf.clear();
        let mut idle = self.idle.lock();
        if idle.len() < MAX_IDLE {
            idle.push(buf);
        }
    }

    #[cfg(test)]
    fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }
}
