//! Component API manifest model and loading.
//!
//! This crate deserializes the published component manifest (a JSON document
//! with a top-level `components` array) into typed descriptor lists that the
//! renderer consumes.

pub mod loader;
pub mod schema;

pub use loader::{parse_manifest, ManifestError};
pub use schema::{ComponentEntry, EventDesc, Manifest, Method, NamedItem, Property};
