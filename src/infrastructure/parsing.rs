//! Documentation parsing engines
//!
//! Each documentation flavor is one implementation of [`DocSetParser`]:
//! a file locator that decides which files to parse and which page is the
//! docset front page, and an extractor that turns those files into
//! [`IndexEntry`] values.

pub mod classifier;
pub mod diagnostics;
pub mod javadoc_parser;
pub mod jsdoc_parser;

pub use classifier::classify;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, StderrSink};
pub use javadoc_parser::JavadocParser;
pub use jsdoc_parser::JsDocParser;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{BuilderResult, Flavor, IndexEntry, IndexLocation};

/// Capability shared by every documentation flavor
pub trait DocSetParser: Send + Sync {
    /// Flavor this parser understands
    fn flavor(&self) -> Flavor;

    /// Find the docset front page and all files that must be indexed under `doc_root`
    fn find_index_file(&self, doc_root: &Path) -> BuilderResult<IndexLocation>;

    /// Extract search index entries from `files_to_index`, in order
    fn find_search_index_values(&self, files_to_index: &[PathBuf])
        -> BuilderResult<Vec<IndexEntry>>;
}

impl Flavor {
    /// Build the parser for this flavor, reporting per-entry problems to `sink`
    pub fn parser(self, sink: Arc<dyn DiagnosticSink>) -> Arc<dyn DocSetParser> {
        match self {
            Self::Javadoc => Arc::new(JavadocParser::with_sink(sink)),
            Self::JsDoc => Arc::new(JsDocParser::new()),
        }
    }

    /// Parser for this flavor writing diagnostics to stderr
    pub fn default_parser(self) -> Arc<dyn DocSetParser> {
        self.parser(Arc::new(StderrSink))
    }
}

/// Reject a documentation root that is missing or is not a directory
pub(crate) fn ensure_directory(doc_root: &Path) -> BuilderResult<()> {
    if doc_root.is_dir() {
        Ok(())
    } else {
        Err(crate::domain::BuilderError::not_a_directory(doc_root))
    }
}
