//! Build configuration
//!
//! A docset build is described by a `BuildConfig`, loaded with the `config`
//! crate from an optional TOML file layered under `DOCSET__*` environment
//! variables:
//!
//! ```toml
//! name = "Guava"
//! doc_root = "target/site/apidocs"
//! output_directory = "target/docsets"
//! flavor = "javadoc"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! `DOCSET__LOGGING__LEVEL=debug` overrides the nested logging level.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{BuilderError, BuilderResult, Flavor};

/// Default configuration file stem, looked up as `docset.toml`
pub const DEFAULT_CONFIG_FILE: &str = "docset";
/// Environment variable naming an alternative configuration file
pub const CONFIG_PATH_ENV: &str = "DOCSET_CONFIG";
pub const ENV_PREFIX: &str = "DOCSET";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// File name of the docset to create (without `.docset`)
    pub name: String,

    /// Root directory of the generated documentation
    pub doc_root: PathBuf,

    /// Where the docset is written
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Name shown in the docset viewer; defaults to `name`
    #[serde(default)]
    pub display_name: Option<String>,

    /// Search keyword; defaults to `name`
    #[serde(default)]
    pub keyword: Option<String>,

    /// 32x32 PNG copied into the docset
    #[serde(default)]
    pub icon: Option<PathBuf>,

    #[serde(default)]
    pub flavor: Flavor,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Shortcut for `level = "debug"`
    pub verbose: bool,

    /// Enable JSON formatted file logs
    pub json_format: bool,

    /// Enable console output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for log files when file output is enabled
    pub log_directory: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
            json_format: false,
            console_output: true,
            file_output: false,
            log_directory: PathBuf::from("logs"),
        }
    }
}

impl LoggingConfig {
    /// Level actually applied, honoring `verbose`
    pub fn effective_level(&self) -> &str {
        if self.verbose { "debug" } else { &self.level }
    }
}

impl BuildConfig {
    /// Load from the file named by `DOCSET_CONFIG` (default `docset.toml`, optional)
    /// and the environment
    pub fn load() -> BuilderResult<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_file(&path)
    }

    /// Load from `path` (extension optional, file optional) layered under the environment
    pub fn from_file(path: &str) -> BuilderResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document without consulting the environment
    pub fn from_toml(toml: &str) -> BuilderResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BuilderResult<()> {
        if self.name.trim().is_empty() {
            return Err(BuilderError::InvalidArgument(
                "The docset name must be specified".to_string(),
            ));
        }
        if self.doc_root.as_os_str().is_empty() {
            return Err(BuilderError::InvalidArgument(
                "The documentation root must be specified".to_string(),
            ));
        }
        Ok(())
    }
}
