//! Manifest loading and top-level shape checks.

use crate::schema::{ComponentEntry, Manifest};

/// Errors that can occur when loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Manifest is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Manifest has no `components` field")]
    MissingComponents,

    #[error("Manifest `components` field is not an array")]
    ComponentsNotAnArray,

    #[error("Malformed component entry: {0}")]
    MalformedComponent(String),
}

/// Parse a manifest document from JSON source.
///
/// The top level must carry a `components` array; no other top-level fields
/// are read. A missing or non-array `components` field is fatal, so callers
/// can rely on either a complete manifest or no output at all.
pub fn parse_manifest(source: &str) -> Result<Manifest, ManifestError> {
    let document: serde_json::Value =
        serde_json::from_str(source).map_err(|e| ManifestError::InvalidJson(e.to_string()))?;

    let components = document
        .get("components")
        .ok_or(ManifestError::MissingComponents)?;

    if !components.is_array() {
        return Err(ManifestError::ComponentsNotAnArray);
    }

    let components: Vec<ComponentEntry> = serde_json::from_value(components.clone())
        .map_err(|e| ManifestError::MalformedComponent(e.to_string()))?;

    Ok(Manifest { components })
}
