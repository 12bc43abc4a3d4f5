//! Basic usage of the leveled logger

use leveled_log::prelude::*;
use leveled_log::{debug, info, warn};

fn main() -> Result<()> {
    // Process-wide default logger, writing to stderr
    leveled_log::set_name("demo");
    leveled_log::info("default logger ready")?;
    leveled_log::set_level_str("debug");
    leveled_log::debugf(format_args!("debug lines carry {}", "file:line"))?;
    leveled_log::set_level(Level::Info);

    // A dedicated logger writing to stdout and an in-memory capture
    let capture = MemorySink::new();
    let logger = Logger::builder("worker")
        .level(Level::Info)
        .output(ConsoleSink::stdout())
        .add_output(capture.clone())
        .build();

    info!(logger, "processing {} items", 3)?;
    warn!(logger; "disk", " ", "full")?;
    debug!(logger, "filtered out at info")?;

    let db = logger.with_name("db");
    db.error("connection refused")?;

    println!("captured {} lines", capture.lines().len());
    Ok(())
}
