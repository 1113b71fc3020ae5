//! Search index entries

use std::fmt;

use super::match_type::{JavadocMatchType, JsDocMatchType};

/// Kind of a documented symbol, tagged with the flavor that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Javadoc(JavadocMatchType),
    JsDoc(JsDocMatchType),
}

impl EntryKind {
    /// Label stored in the `type` column of the search index
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Javadoc(kind) => kind.type_name(),
            Self::JsDoc(kind) => kind.type_name(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Javadoc(kind) => kind.fmt(f),
            Self::JsDoc(kind) => kind.fmt(f),
        }
    }
}

impl From<JavadocMatchType> for EntryKind {
    fn from(kind: JavadocMatchType) -> Self {
        Self::Javadoc(kind)
    }
}

impl From<JsDocMatchType> for EntryKind {
    fn from(kind: JsDocMatchType) -> Self {
        Self::JsDoc(kind)
    }
}

/// One documented symbol: display name, kind and link relative to the documentation root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub kind: EntryKind,
    pub path: String,
}

impl IndexEntry {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<EntryKind>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            path: path.into(),
        }
    }

    pub const fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}
