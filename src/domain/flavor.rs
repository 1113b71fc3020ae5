//! Documentation flavors understood by the builder

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Generator family the documentation root was produced by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Javadoc-style HTML (`index-all.html` or `index-files/`)
    #[default]
    Javadoc,
    /// JSDoc-style `index.json`
    #[serde(alias = "JSDoc", alias = "JsDoc")]
    JsDoc,
}

impl Flavor {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Javadoc => "javadoc",
            Self::JsDoc => "jsdoc",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [Self::Javadoc, Self::JsDoc]
            .into_iter()
            .find(|flavor| flavor.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown documentation flavor '{trimmed}'"))
    }
}
