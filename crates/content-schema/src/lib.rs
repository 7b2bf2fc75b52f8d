//! Definitions of content types and their locale partitioning.
//!
//! A [`schema_definition::SchemaDefinition`] is produced by schema storage
//! and read everywhere else. The important call points are the field
//! iterator and the find methods with string slices; mutation outside of
//! schema storage is not recommended.

pub mod partitioning;
pub mod schema_definition;
