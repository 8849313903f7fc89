//! Example demonstrating the msgfmt logging infrastructure.

use std::path::PathBuf;
use msgfmt_common_log::{
    debug, error, info, init, spans::format_span, timed, trace, warn, LogConfig, LogFormat,
    LogLevel,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== JSON format with file output ===");
    let config = LogConfig {
        level: LogLevel::Debug,
        format: LogFormat::Json,
        file_path: Some(PathBuf::from("/tmp/msgfmt-demo.log")),
        timestamps: true,
        source_location: true,
        span_events: true,
    };

    init(config)?;

    let span = format_span("en-US", true);
    let _guard = span.enter();

    trace!("trace messages are filtered out at debug level");
    debug!(pattern = "{name} has {count, plural, one{# file} other{# files}}", "rewriting");
    info!("formatted message");
    warn!("placeholder left unresolved");
    error!("engine rejected pattern");

    let total = timed!("sum", (1..=10).sum::<u32>());
    info!(total, "timed block finished");

    println!("\nEnvironment config: {:?}", LogConfig::from_env());
    println!("Log file should be created at: /tmp/msgfmt-demo.log");

    Ok(())
}
