//! Result of scanning a documentation root

use std::path::PathBuf;

/// Front page and the files that must be parsed for one documentation root.
///
/// Built once by a parser's file locator and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLocation {
    front_page_file: Option<String>,
    files_to_index: Vec<PathBuf>,
}

impl IndexLocation {
    pub const fn new(front_page_file: Option<String>, files_to_index: Vec<PathBuf>) -> Self {
        Self {
            front_page_file,
            files_to_index,
        }
    }

    /// File name the docset viewer opens first, if one was recognized
    pub fn front_page_file(&self) -> Option<&str> {
        self.front_page_file.as_deref()
    }

    /// Files to parse, in discovery order
    pub fn files_to_index(&self) -> &[PathBuf] {
        &self.files_to_index
    }

    pub fn has_files_to_index(&self) -> bool {
        !self.files_to_index.is_empty()
    }
}
