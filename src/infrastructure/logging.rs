//! Logging system configuration and initialization
//!
//! - Console output on stdout (stderr carries the per-entry diagnostics)
//! - Optional file output, plain or JSON
//! - `RUST_LOG` overrides the configured level
//!
//! ```bash
//! # Show the SQL statements issued while writing the search index
//! RUST_LOG="debug,sqlx::query=debug" docset-builder
//! ```

use anyhow::{Result, anyhow};
use chrono::Local;
use once_cell::sync::OnceCell;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

pub const LOG_FILE_NAME: &str = "docset-builder.log";

// Keeps the file writer alive for the life of the process
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Local wall-clock timestamps with millisecond precision
struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the logging system with default configuration
pub fn init_logging() -> Result<()> {
    init_logging_with_config(&LoggingConfig::default())
}

/// Build the level filter; dependencies stay quiet unless TRACE is requested
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let level = config.effective_level();
    let mut filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow!("Invalid log level '{level}': {e}"))?;

    if !level.eq_ignore_ascii_case("trace") {
        for directive in [
            "sqlx::query=warn",
            "sqlx::sqlite=warn",
            "html5ever=warn",
            "selectors=warn",
        ] {
            filter = filter.add_directive(directive.parse()?);
        }
    }
    Ok(filter)
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_env_filter(config)?;

    let console_layer = config.console_output.then(|| {
        fmt::Layer::new()
            .with_writer(std::io::stdout)
            .with_timer(LocalTimeFormatter)
            .with_target(false)
    });

    let file_layer = if config.file_output {
        std::fs::create_dir_all(&config.log_directory).map_err(|e| {
            anyhow!(
                "Failed to create log directory {}: {e}",
                config.log_directory.display()
            )
        })?;
        let (file_writer, guard) =
            non_blocking(rolling::never(&config.log_directory, LOG_FILE_NAME));
        if LOG_GUARD.set(guard).is_err() {
            return Err(anyhow!("Logging has already been initialized"));
        }

        let layer = fmt::Layer::new()
            .with_writer(file_writer)
            .with_timer(LocalTimeFormatter)
            .with_ansi(false);
        Some(if config.json_format {
            layer.json().with_target(true).with_line_number(true).boxed()
        } else {
            layer.with_target(false).boxed()
        })
    } else {
        None
    };

    if console_layer.is_none() && file_layer.is_none() {
        return Err(anyhow!("No logging output configured"));
    }

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logging subscriber: {e}"))?;

    info!("Logging system initialized (level: {})", config.effective_level());
    if config.file_output {
        info!("Log file: {}", config.log_directory.join(LOG_FILE_NAME).display());
    }
    Ok(())
}
