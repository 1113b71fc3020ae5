//! Infrastructure layer: parsing engines, docset bundle layout, the SQLite
//! search index, configuration and logging.

pub mod config;
pub mod docset_support;
pub mod logging;
pub mod parsing;
pub mod search_index;

// Re-export commonly used items
pub use config::{BuildConfig, LoggingConfig};
pub use logging::{init_logging, init_logging_with_config};
pub use parsing::{
    CollectingSink, Diagnostic, DiagnosticSink, DocSetParser, JavadocParser, JsDocParser,
    StderrSink,
};
pub use search_index::{SearchIndexConnection, create_index};
