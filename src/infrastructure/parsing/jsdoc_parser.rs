//! JSDoc parser
//!
//! JSDoc templates that support docsets emit an `index.json` mapping a
//! category name to the symbols in it:
//!
//! ```json
//! { "functions": [{ "name": "foo", "link": "foo.html" }] }
//! ```
//!
//! The category already names the kind, so no heuristics are involved.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::{DocSetParser, ensure_directory};
use crate::domain::{
    BuilderError, BuilderResult, Flavor, IndexEntry, IndexLocation, JsDocMatchType,
};

pub const INDEX_JSON: &str = "index.json";
pub const INDEX_HTML: &str = "index.html";

/// One symbol record inside a category array
#[derive(Debug, Deserialize)]
struct SymbolRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    link: String,
}

/// Parser for JSDoc `index.json` manifests
#[derive(Debug, Default, Clone, Copy)]
pub struct JsDocParser;

impl JsDocParser {
    pub const fn new() -> Self {
        Self
    }

    /// Extract entries from the text of an `index.json`.
    ///
    /// Categories are visited in document order. Values that are not arrays
    /// are ignored. Empty names and links are kept as-is.
    pub fn index_json(&self, source: &Path, json: &str) -> BuilderResult<Vec<IndexEntry>> {
        let json_error = |source_error| BuilderError::Json {
            path: source.to_path_buf(),
            source: source_error,
        };

        let categories: Map<String, Value> = serde_json::from_str(json).map_err(json_error)?;

        let mut values = Vec::new();
        for (category, records) in categories {
            let Value::Array(records) = records else {
                debug!("Skipping non-array category '{category}'");
                continue;
            };
            let kind = JsDocMatchType::from_category(&category);
            for record in records {
                let SymbolRecord { name, link } =
                    serde_json::from_value(record).map_err(json_error)?;
                values.push(IndexEntry::new(name, kind, link));
            }
        }
        Ok(values)
    }

    fn index_file(&self, file: &Path) -> BuilderResult<Vec<IndexEntry>> {
        let json = fs::read_to_string(file)
            .map_err(|e| BuilderError::io(format!("Failed to read {}", file.display()), e))?;
        self.index_json(file, &json)
    }
}

impl DocSetParser for JsDocParser {
    fn flavor(&self) -> Flavor {
        Flavor::JsDoc
    }

    fn find_index_file(&self, doc_root: &Path) -> BuilderResult<IndexLocation> {
        ensure_directory(doc_root)?;
        debug!("Looking for {INDEX_JSON} file");

        let index_json = doc_root.join(INDEX_JSON);
        let files_to_index = if index_json.exists() {
            vec![index_json]
        } else {
            Vec::new()
        };
        let front_page = doc_root
            .join(INDEX_HTML)
            .exists()
            .then(|| INDEX_HTML.to_string());

        let location = IndexLocation::new(front_page, files_to_index);
        if !location.has_files_to_index() {
            return Err(BuilderError::no_documentation(Flavor::JsDoc, doc_root));
        }

        debug!("Found jsdoc files");
        Ok(location)
    }

    fn find_search_index_values(
        &self,
        files_to_index: &[PathBuf],
    ) -> BuilderResult<Vec<IndexEntry>> {
        let mut values = Vec::new();
        for file in files_to_index {
            values.extend(self.index_file(file)?);
        }
        info!("Found {} jsdoc entries in {} files", values.len(), files_to_index.len());
        Ok(values)
    }
}
