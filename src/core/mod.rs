//! Core logger types and traits

pub mod buffer_pool;
pub mod config;
pub mod error;
pub mod header;
pub mod level;
pub mod logger;
pub mod sink;

pub use buffer_pool::BufferPool;
pub use config::{LoggerConfig, OutputTarget};
pub use error::{LoggerError, Result};
pub use header::{format_header, Caller, HeaderStyle, TIMESTAMP_FORMAT};
pub use level::{should_emit, Level};
pub use logger::{Logger, LoggerBuilder, LoggerOption, FATAL_EXIT_CODE};
pub use sink::{Sink, SinkSet};
