//! Fatal build errors
//!
//! Anything that aborts a docset build is a `BuilderError`. Per-entry
//! problems never show up here; they are reported through the diagnostic
//! channel and the offending entry is skipped.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::flavor::Flavor;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("{} does not exist, or is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error(
        "Did not find any {flavor} files. Make sure that {} is a directory containing {flavor}",
        .path.display()
    )]
    NoDocumentation { flavor: Flavor, path: PathBuf },

    #[error("{message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Error decoding a link: {href}")]
    LinkDecode {
        href: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write plist file into docset: {source}")]
    Plist {
        #[from]
        source: plist::Error,
    },

    #[error("Error writing to SQLite DB: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    #[error("Failed to load configuration: {source}")]
    Config {
        #[from]
        source: config::ConfigError,
    },

    #[error("{0}")]
    InvalidArgument(String),
}

impl BuilderError {
    /// Wrap an I/O failure with a human readable description of the step that failed
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Documentation root is missing or is a plain file
    pub fn not_a_directory(path: &Path) -> Self {
        Self::NotADirectory {
            path: absolute(path),
        }
    }

    /// Documentation root holds none of the marker files for `flavor`
    pub fn no_documentation(flavor: Flavor, path: &Path) -> Self {
        Self::NoDocumentation {
            flavor,
            path: absolute(path),
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

pub type BuilderResult<T> = Result<T, BuilderError>;
