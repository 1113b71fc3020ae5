//! Closed entry-kind taxonomies, one per documentation flavor
//!
//! `type_name` is the label written to the `type` column of the search index.
//! `Display` prints the upper-case variant name used in diagnostics.

use std::fmt;

/// Kinds recognized in Javadoc index pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavadocMatchType {
    Class,
    StaticMethod,
    Field,
    Constructor,
    Method,
    Interface,
    Exception,
    Error,
    Enum,
    Notation,
    Package,
}

impl JavadocMatchType {
    pub const ALL: [Self; 11] = [
        Self::Class,
        Self::StaticMethod,
        Self::Field,
        Self::Constructor,
        Self::Method,
        Self::Interface,
        Self::Exception,
        Self::Error,
        Self::Enum,
        Self::Notation,
        Self::Package,
    ];

    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::StaticMethod | Self::Method => "Method",
            Self::Field => "Field",
            Self::Constructor => "Constructor",
            Self::Interface => "Interface",
            Self::Exception => "Exception",
            Self::Error => "Error",
            Self::Enum => "Enum",
            Self::Notation => "Notation",
            Self::Package => "Package",
        }
    }

    const fn constant_name(self) -> &'static str {
        match self {
            Self::Class => "CLASS",
            Self::StaticMethod => "STATIC_METHOD",
            Self::Field => "FIELD",
            Self::Constructor => "CONSTRUCTOR",
            Self::Method => "METHOD",
            Self::Interface => "INTERFACE",
            Self::Exception => "EXCEPTION",
            Self::Error => "ERROR",
            Self::Enum => "ENUM",
            Self::Notation => "NOTATION",
            Self::Package => "PACKAGE",
        }
    }
}

impl fmt::Display for JavadocMatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constant_name())
    }
}

/// Kinds recognized in a JSDoc `index.json`; the category key names the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsDocMatchType {
    Function,
    Namespace,
    Property,
    Class,
    Value,
}

impl JsDocMatchType {
    /// Map an `index.json` category key to its kind; unknown keys are `Value`
    pub fn from_category(category: &str) -> Self {
        match category {
            "functions" => Self::Function,
            "namespaces" => Self::Namespace,
            "properties" => Self::Property,
            "classes" => Self::Class,
            _ => Self::Value,
        }
    }

    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Function => "Function",
            Self::Namespace => "Namespace",
            Self::Property => "Property",
            Self::Class => "Class",
            Self::Value => "Value",
        }
    }

    const fn constant_name(self) -> &'static str {
        match self {
            Self::Function => "FUNCTION",
            Self::Namespace => "NAMESPACE",
            Self::Property => "PROPERTY",
            Self::Class => "CLASS",
            Self::Value => "VALUE",
        }
    }
}

impl fmt::Display for JsDocMatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constant_name())
    }
}
