//! Docset creation use case
//!
//! ```no_run
//! # async fn run() -> docset_builder::domain::BuilderResult<()> {
//! use docset_builder::application::DocsetCreator;
//!
//! let docset = DocsetCreator::builder("Guava", "target/site/apidocs")
//!     .display_name("Guava 33")
//!     .keyword("guava")
//!     .output_directory("target/docsets")
//!     .build()?
//!     .make_docset()
//!     .await?;
//! println!("{}", docset.display());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{BuilderError, BuilderResult, Flavor};
use crate::infrastructure::config::BuildConfig;
use crate::infrastructure::docset_support::{
    copy_files, copy_icon_file, create_docset_structure, create_plist, db_dir, docset_root,
};
use crate::infrastructure::parsing::{DiagnosticSink, DocSetParser, StderrSink};
use crate::infrastructure::search_index::create_index;

/// Parser choice made on the builder
enum Implementation {
    Flavor(Flavor),
    Custom(Arc<dyn DocSetParser>),
}

/// Builds one docset from a documentation root
pub struct DocsetCreator {
    docset_name: String,
    display_name: String,
    keyword: String,
    icon_file: Option<PathBuf>,
    doc_root: PathBuf,
    output_directory: PathBuf,
    parser: Arc<dyn DocSetParser>,
}

pub struct DocsetCreatorBuilder {
    docset_name: String,
    doc_root: PathBuf,
    display_name: Option<String>,
    keyword: Option<String>,
    icon_file: Option<PathBuf>,
    output_directory: PathBuf,
    implementation: Implementation,
    sink: Arc<dyn DiagnosticSink>,
}

impl DocsetCreatorBuilder {
    fn new(docset_name: impl Into<String>, doc_root: impl Into<PathBuf>) -> Self {
        Self {
            docset_name: docset_name.into(),
            doc_root: doc_root.into(),
            display_name: None,
            keyword: None,
            icon_file: None,
            output_directory: PathBuf::from("."),
            implementation: Implementation::Flavor(Flavor::default()),
            sink: Arc::new(StderrSink),
        }
    }

    /// Name shown by the docset viewer; empty values are ignored
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = non_empty(display_name.into()).or(self.display_name);
        self
    }

    /// Search keyword; empty values are ignored
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = non_empty(keyword.into()).or(self.keyword);
        self
    }

    pub fn icon_file(mut self, icon_file: impl Into<PathBuf>) -> Self {
        self.icon_file = Some(icon_file.into());
        self
    }

    pub fn output_directory(mut self, output_directory: impl Into<PathBuf>) -> Self {
        self.output_directory = output_directory.into();
        self
    }

    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.implementation = Implementation::Flavor(flavor);
        self
    }

    /// Select the flavor by name; unknown names keep the current choice
    pub fn implementation(self, name: &str) -> Self {
        match Flavor::from_str(name) {
            Ok(flavor) => self.flavor(flavor),
            Err(e) => {
                warn!("Ignoring documentation implementation: {e}");
                self
            }
        }
    }

    /// Use a caller supplied parser instead of a built-in flavor
    pub fn parser(mut self, parser: Arc<dyn DocSetParser>) -> Self {
        self.implementation = Implementation::Custom(parser);
        self
    }

    /// Where per-entry diagnostics of a built-in parser go (stderr by default)
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn build(self) -> BuilderResult<DocsetCreator> {
        if self.docset_name.is_empty() {
            return Err(BuilderError::InvalidArgument(
                "The docset name must be specified".to_string(),
            ));
        }

        let parser = match self.implementation {
            Implementation::Flavor(flavor) => flavor.parser(self.sink),
            Implementation::Custom(parser) => parser,
        };

        Ok(DocsetCreator {
            display_name: self.display_name.unwrap_or_else(|| self.docset_name.clone()),
            keyword: self.keyword.unwrap_or_else(|| self.docset_name.clone()),
            docset_name: self.docset_name,
            icon_file: self.icon_file,
            doc_root: self.doc_root,
            output_directory: self.output_directory,
            parser,
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl DocsetCreator {
    pub fn builder(
        docset_name: impl Into<String>,
        doc_root: impl Into<PathBuf>,
    ) -> DocsetCreatorBuilder {
        DocsetCreatorBuilder::new(docset_name, doc_root)
    }

    /// Creator for a loaded [`BuildConfig`]
    pub fn from_config(config: &BuildConfig) -> BuilderResult<Self> {
        let mut builder = Self::builder(config.name.as_str(), config.doc_root.as_path())
            .output_directory(config.output_directory.as_path())
            .flavor(config.flavor);
        if let Some(display_name) = &config.display_name {
            builder = builder.display_name(display_name.as_str());
        }
        if let Some(keyword) = &config.keyword {
            builder = builder.keyword(keyword.as_str());
        }
        if let Some(icon) = &config.icon {
            builder = builder.icon_file(icon.as_path());
        }
        builder.build()
    }

    pub fn docset_name(&self) -> &str {
        &self.docset_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn icon_file(&self) -> Option<&Path> {
        self.icon_file.as_deref()
    }

    pub fn doc_root(&self) -> &Path {
        &self.doc_root
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn flavor(&self) -> Flavor {
        self.parser.flavor()
    }

    /// Build the docset and return the path of the created `.docset` directory
    pub async fn make_docset(&self) -> BuilderResult<PathBuf> {
        let output_directory = std::path::absolute(&self.output_directory).map_err(|e| {
            BuilderError::io(
                format!("Failed to resolve {}", self.output_directory.display()),
                e,
            )
        })?;
        let base = output_directory.join(&self.docset_name);
        debug!("Creating {} docset at {}", self.parser.flavor(), base.display());

        create_docset_structure(&base)?;
        copy_icon_file(self.icon_file.as_deref(), &base)?;
        let location = self.parser.find_index_file(&self.doc_root)?;
        copy_files(&self.doc_root, &base)?;
        create_plist(
            &self.docset_name,
            &self.display_name,
            &self.keyword,
            location.front_page_file(),
            &base,
        )?;
        let entries = self.parser.find_search_index_values(location.files_to_index())?;
        create_index(&entries, &db_dir(&base)).await?;

        let docset = docset_root(&base);
        info!("Finished creating docset: {}", docset.display());
        Ok(docset)
    }
}
