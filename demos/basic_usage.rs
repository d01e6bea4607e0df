//! Basic logger usage example
//!
//! Demonstrates building loggers, the two call shapes, context extractors and
//! the human-readable console writer.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_facade::prelude::*;
use rust_logger_facade::{error, info, warn};

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Basic Usage Example ===\n");

    // JSON lines on stderr with every default
    println!("1. Default logger (JSON on stderr):");
    let logger = Logger::builder().build();
    logger.trace(None, "This is a trace message");
    logger.debug(None, "This is a debug message");
    info!(logger, None, "This is an info message");
    warn!(logger, None, "This is a warning message");
    error!(logger, None, "This is an error message");

    println!("\n2. Minimum level and static fields:");
    let logger = Logger::builder()
        .set_level(LogLevel::Warn)
        .add_static_fields([("service", "basic_usage"), ("version", "1.0")])
        .include_caller()
        .build();
    logger.info(None, "This info is filtered out");
    logger.warn(None, "This warning carries the static fields and the caller");

    println!("\n3. Fields and errors on one call:");
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml not found");
    logger
        .with_field("attempt", 3)
        .with_field("path", "/etc/app/config.toml")
        .with_error(&err)
        .error(None, "Failed to load configuration");

    println!("\n4. Context extractors:");
    let logger = Logger::builder()
        .set_writer(ConsoleWriter::stderr())
        .add_context_extractors([extractor(|ctx| {
            let request_id = ctx.value::<String>("request_id").cloned();
            [("request_id".to_string(), FieldValue::from(request_id))]
                .into_iter()
                .collect()
        })])
        .build();
    let ctx = Context::background().with_value("request_id", "req-42".to_string());
    info!(logger, Some(&ctx), "Handled request in {}ms", 12);
    logger
        .with_field("user", "alice")
        .info(Some(&ctx), "User logged in");

    println!("\n5. Settings from JSON:");
    let settings = LoggerSettings::from_json(
        r#"{"level": "debug", "time_format": "Iso8601", "static_fields": {"env": "demo"}}"#,
    )?;
    let logger = Logger::builder().apply_settings(&settings).build();
    logger.debug(None, "Configured from settings");
    logger.trace(None, "Below the configured level, not shown");
    logger.flush()?;

    println!("\n=== Example completed successfully ===");
    Ok(())
}
