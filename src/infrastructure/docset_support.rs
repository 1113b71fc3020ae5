//! Docset bundle layout
//!
//! ```text
//! <name>.docset/
//!   icon.png
//!   Contents/
//!     Info.plist
//!     Resources/
//!       docSet.dsidx
//!       Documents/   <- copy of the documentation root
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::{BuilderError, BuilderResult};

pub const CONTENTS: &str = "Contents";
pub const RESOURCES: &str = "Resources";
pub const DOCUMENTS: &str = "Documents";
pub const PLIST_FILE: &str = "Info.plist";
pub const ICON_FILE: &str = "icon.png";
pub const DOCSET_SUFFIX: &str = ".docset";
pub const DOCSET_FAMILY: &str = "java";

/// `<base>.docset`
pub fn docset_root(base: &Path) -> PathBuf {
    let mut root = base.as_os_str().to_owned();
    root.push(DOCSET_SUFFIX);
    PathBuf::from(root)
}

/// Directory that receives the documentation files
pub fn documents_dir(base: &Path) -> PathBuf {
    db_dir(base).join(DOCUMENTS)
}

/// Directory holding the SQLite search index
pub fn db_dir(base: &Path) -> PathBuf {
    docset_root(base).join(CONTENTS).join(RESOURCES)
}

/// Create an empty docset skeleton, replacing any docset already at `base`
pub fn create_docset_structure(base: &Path) -> BuilderResult<()> {
    let root = docset_root(base);
    if root.exists() {
        debug!("A docset named {} already exists. Trying to remove.", root.display());
        fs::remove_dir_all(&root)
            .map_err(|e| BuilderError::io("Failed to delete existing docset", e))?;
    }

    fs::create_dir_all(documents_dir(base))
        .map_err(|e| BuilderError::io("Failed to create new docset directory", e))?;
    debug!("Docset directory structure created");
    Ok(())
}

/// Copy the docset icon; nothing happens without one
pub fn copy_icon_file(icon_file: Option<&Path>, base: &Path) -> BuilderResult<()> {
    let Some(icon_file) = icon_file else {
        return Ok(());
    };

    fs::copy(icon_file, docset_root(base).join(ICON_FILE))
        .map_err(|e| BuilderError::io("Failed to copy icon file to docset", e))?;
    debug!("Icon file copied");
    Ok(())
}

/// Recursively copy the documentation root into the docset.
///
/// A docset written somewhere inside `source_dir` is not copied into itself.
pub fn copy_files(source_dir: &Path, base: &Path) -> BuilderResult<()> {
    let copy_error = |e| BuilderError::io("Could not copy files into the docset", e);

    if !source_dir.is_dir() {
        return Err(copy_error(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", source_dir.display()),
        )));
    }

    let source_dir = fs::canonicalize(source_dir).map_err(copy_error)?;
    let docset = fs::canonicalize(docset_root(base)).map_err(copy_error)?;
    let target_root = documents_dir(base);

    let walker = WalkDir::new(&source_dir)
        .into_iter()
        .filter_entry(|entry| !entry.path().starts_with(&docset));
    for entry in walker {
        let entry = entry.map_err(|e| copy_error(e.into()))?;
        let Ok(relative) = entry.path().strip_prefix(&source_dir) else {
            continue;
        };
        let target = target_root.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(copy_error)?;
        } else {
            fs::copy(entry.path(), &target).map_err(copy_error)?;
        }
    }

    debug!("Copied documentation files into docset");
    Ok(())
}

/// Write `Contents/Info.plist`
pub fn create_plist(
    bundle_identifier: &str,
    display_name: &str,
    keyword: &str,
    index_file: Option<&str>,
    base: &Path,
) -> BuilderResult<()> {
    let plist = plist_dictionary(bundle_identifier, display_name, keyword, index_file);
    Value::Dictionary(plist).to_file_xml(docset_root(base).join(CONTENTS).join(PLIST_FILE))?;
    debug!("Created the plist file in the docset");
    Ok(())
}

fn plist_dictionary(
    bundle_identifier: &str,
    display_name: &str,
    keyword: &str,
    index_file: Option<&str>,
) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert("CFBundleIdentifier".into(), Value::String(bundle_identifier.into()));
    dict.insert("CFBundleName".into(), Value::String(display_name.into()));
    dict.insert("DocSetPlatformFamily".into(), Value::String(keyword.into()));
    if let Some(index_file) = index_file {
        dict.insert("dashIndexFilePath".into(), Value::String(index_file.into()));
    }
    dict.insert("DashDocSetFamily".into(), Value::String(DOCSET_FAMILY.into()));
    dict.insert("isDashDocset".into(), Value::Boolean(true));
    dict
}
