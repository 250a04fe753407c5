//! TrieMatcher Prefix Loader
//!
//! This crate turns prefix lists (files, readers, or resources embedded at
//! compile time) into the plain string sequence the core builds from.

pub mod parser;
pub mod resource;
pub mod source;

pub use parser::parse_prefix_list;
pub use resource::{load_from_resource, resource_names};
pub use source::{load_from_file, load_from_reader, LoadError};
