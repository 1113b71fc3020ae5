//! Javadoc parser
//!
//! Locates the index pages of a Javadoc tree (split `index-files/index-N.html`
//! or monolithic `index-all.html`) and extracts one entry per definition
//! term whose lead link names a documented symbol.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use super::classifier::classify;
use super::diagnostics::{Diagnostic, DiagnosticSink, StderrSink};
use super::{DocSetParser, ensure_directory};
use crate::domain::{BuilderError, BuilderResult, Flavor, IndexEntry, IndexLocation};

/// Preferred landing page when the generator produced one
pub const OVERVIEW_SUMMARY: &str = "overview-summary.html";
/// Directory holding one index page per initial letter
pub const INDEX_FILES_DIR: &str = "index-files";
/// Landing page used for split indexes without an overview
pub const SPLIT_INDEX_FRONT_PAGE: &str = "index-1.html";
/// Single-page index
pub const INDEX_ALL: &str = "index-all.html";

const SPLIT_INDEX_PREFIX: &str = "index-";
const HTML_EXTENSION: &str = "html";
const LINK_SELECTOR: &str = "a";

/// Inline elements that may wrap the lead link of a definition term
const INLINE_WRAPPERS: [&str; 4] = ["span", "code", "i", "b"];

/// Parser for Javadoc-style HTML documentation
pub struct JavadocParser {
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for JavadocParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JavadocParser {
    /// Parser reporting diagnostics on stderr
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StderrSink))
    }

    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Extract entries from one HTML document, appending to `values`.
    ///
    /// `values` is the running output of the whole invocation; its last
    /// element is echoed when a malformed link is found.
    pub fn index_html(&self, html: &str, values: &mut Vec<IndexEntry>) -> BuilderResult<()> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(LINK_SELECTOR).map_err(|e| BuilderError::InvalidSelector {
            selector: LINK_SELECTOR.to_string(),
            reason: e.to_string(),
        })?;

        for link in document.select(&selector) {
            let Some(term) = definition_term(link) else {
                continue;
            };

            let text = normalized_text(term);
            let name = normalized_text(link);
            let class_name = term.value().attr("class").unwrap_or_default().trim().to_string();

            let Some(kind) = classify(&text, &class_name) else {
                self.sink.report(Diagnostic::UnknownType {
                    text,
                    name,
                    class_name,
                });
                continue;
            };

            let path = decode_link(link.value().attr("href").unwrap_or_default())?;

            if name.is_empty() || path.is_empty() {
                self.sink.report(Diagnostic::MalformedLink {
                    name,
                    kind: kind.into(),
                    path,
                });
                if let Some(last) = values.last() {
                    self.sink.report(Diagnostic::MostRecentValue {
                        name: last.name.clone(),
                        kind: last.kind,
                        path: last.path.clone(),
                    });
                }
                continue;
            }

            values.push(IndexEntry::new(name, kind, path));
        }

        Ok(())
    }

    fn index_file(&self, file: &Path, values: &mut Vec<IndexEntry>) -> BuilderResult<()> {
        let html = fs::read_to_string(file).map_err(|e| {
            BuilderError::io(format!("Failed to index javadoc file {}", file.display()), e)
        })?;
        let before = values.len();
        self.index_html(&html, values)?;
        debug!("Indexed {} entries from {}", values.len() - before, file.display());
        Ok(())
    }
}

impl DocSetParser for JavadocParser {
    fn flavor(&self) -> Flavor {
        Flavor::Javadoc
    }

    fn find_index_file(&self, doc_root: &Path) -> BuilderResult<IndexLocation> {
        ensure_directory(doc_root)?;
        debug!("Looking for javadoc files");

        let mut front_page = doc_root
            .join(OVERVIEW_SUMMARY)
            .exists()
            .then(|| OVERVIEW_SUMMARY.to_string());
        let mut files_to_index = Vec::new();

        let index_files_dir = doc_root.join(INDEX_FILES_DIR);
        if index_files_dir.is_dir() {
            files_to_index.extend(list_split_index_files(&index_files_dir)?);
            front_page.get_or_insert_with(|| SPLIT_INDEX_FRONT_PAGE.to_string());
        } else if doc_root.join(INDEX_ALL).is_file() {
            files_to_index.push(doc_root.join(INDEX_ALL));
            front_page.get_or_insert_with(|| INDEX_ALL.to_string());
        }

        let location = IndexLocation::new(front_page, files_to_index);
        if !location.has_files_to_index() {
            return Err(BuilderError::no_documentation(Flavor::Javadoc, doc_root));
        }

        debug!("Found javadoc files");
        Ok(location)
    }

    fn find_search_index_values(
        &self,
        files_to_index: &[PathBuf],
    ) -> BuilderResult<Vec<IndexEntry>> {
        let mut values = Vec::new();
        for file in files_to_index {
            self.index_file(file, &mut values)?;
        }
        info!("Found {} javadoc entries in {} files", values.len(), files_to_index.len());
        Ok(values)
    }
}

/// `index-*.html` files directly inside `dir`, in directory enumeration order
fn list_split_index_files(dir: &Path) -> BuilderResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| BuilderError::io(format!("Failed to list {}", dir.display()), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| BuilderError::io(format!("Failed to list {}", dir.display()), e))?
            .path();
        let is_index_page = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(SPLIT_INDEX_PREFIX))
            && path.extension().is_some_and(|ext| ext == HTML_EXTENSION);
        if is_index_page && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// The definition term a link identifies, if the link leads it.
///
/// The link must be the first element child of its parent. When the parent
/// is an inline wrapper (`<span>`, `<code>`, `<i>`, `<b>`) the wrapper must in
/// turn lead its own parent, which becomes the candidate term. Only `dt`
/// elements qualify.
fn definition_term(link: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let parent = link.parent().and_then(ElementRef::wrap)?;
    if !leads(parent, link) {
        return None;
    }

    let term = if is_inline_wrapper(parent) {
        let outer = parent.parent().and_then(ElementRef::wrap)?;
        if !leads(outer, parent) {
            return None;
        }
        outer
    } else {
        parent
    };

    term.value()
        .name()
        .to_ascii_lowercase()
        .contains("dt")
        .then_some(term)
}

fn leads(parent: ElementRef<'_>, child: ElementRef<'_>) -> bool {
    parent
        .children()
        .find_map(ElementRef::wrap)
        .is_some_and(|first| first.id() == child.id())
}

fn is_inline_wrapper(element: ElementRef<'_>) -> bool {
    let name = element.value().name();
    INLINE_WRAPPERS
        .iter()
        .any(|wrapper| wrapper.eq_ignore_ascii_case(name))
}

/// Text content with runs of whitespace collapsed, as a reader sees it
fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Percent-decoding only; a literal `+` is kept as-is, not turned into a space
fn decode_link(href: &str) -> BuilderResult<String> {
    urlencoding::decode(href)
        .map(std::borrow::Cow::into_owned)
        .map_err(|source| BuilderError::LinkDecode {
            href: href.to_string(),
            source,
        })
}
