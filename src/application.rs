//! Application layer module
//!
//! Orchestrates the parsing engines, bundle assembler and search index
//! writer into a complete docset build.

pub mod docset_creator;

pub use docset_creator::{DocsetCreator, DocsetCreatorBuilder};
