//! Docset Builder - searchable documentation bundles from generated API docs
//!
//! Reads a Javadoc HTML tree or a JSDoc `index.json`, classifies every
//! documented symbol, and writes a `.docset` bundle with a SQLite search
//! index for offline documentation browsers.

// Module declarations
pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::DocsetCreator;
pub use domain::{BuilderError, BuilderResult, EntryKind, Flavor, IndexEntry, IndexLocation};
pub use infrastructure::{BuildConfig, DocSetParser};
