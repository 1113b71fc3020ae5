//! Domain module - core documentation index model
//!
//! Holds the value types produced by the parsing engines and consumed by the
//! bundle assembler and search index writer.
//!
//! - Each module is its own file in the domain/ directory
//! - Public exports are defined here for convenience

pub mod error;
pub mod flavor;
pub mod index_entry;
pub mod index_location;
pub mod match_type;

pub use error::{BuilderError, BuilderResult};
pub use flavor::Flavor;
pub use index_entry::{EntryKind, IndexEntry};
pub use index_location::IndexLocation;
pub use match_type::{JavadocMatchType, JsDocMatchType};
