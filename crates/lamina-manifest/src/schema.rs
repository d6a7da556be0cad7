//! Typed manifest records.
//!
//! Every descriptor field carries `#[serde(default)]`: a field absent from
//! the manifest deserializes to the empty string and renders as an empty
//! value. The policy is uniform across all descriptors.

use serde::Deserialize;

/// The manifest document: an ordered list of component entries.
///
/// Only `components` is read; other top-level fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Manifest {
    pub components: Vec<ComponentEntry>,
}

/// One UI component's documented API surface.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ComponentEntry {
    /// Namespaced tag name, e.g. `ui-button`
    #[serde(default)]
    pub tag: String,

    /// Properties, in manifest order
    #[serde(default)]
    pub props: Vec<Property>,

    /// Events, in manifest order
    #[serde(default)]
    pub events: Vec<EventDesc>,

    /// Public methods, in manifest order
    #[serde(default)]
    pub methods: Vec<Method>,

    /// CSS shadow parts
    #[serde(default)]
    pub parts: Vec<NamedItem>,

    /// CSS custom properties
    #[serde(default)]
    pub styles: Vec<NamedItem>,

    /// Slots
    #[serde(default)]
    pub slots: Vec<NamedItem>,
}

impl ComponentEntry {
    /// Tag with the namespace prefix stripped, e.g. `ui-button` → `button`.
    ///
    /// A tag that does not carry the prefix is returned whole.
    pub fn short_name(&self, prefix: &str) -> &str {
        self.tag.strip_prefix(prefix).unwrap_or(&self.tag)
    }
}

/// A documented property.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Property {
    #[serde(default)]
    pub name: String,

    /// Free text; may contain blank-line separated paragraphs
    #[serde(default)]
    pub docs: String,

    /// Serialized attribute name
    #[serde(default)]
    pub attr: String,

    /// Type expression; may contain `|` union separators
    #[serde(default, rename = "type")]
    pub ty: String,

    /// Stringified default value
    #[serde(default)]
    pub default: String,
}

/// A documented event.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EventDesc {
    /// Event name as dispatched
    #[serde(default)]
    pub event: String,

    #[serde(default)]
    pub docs: String,
}

/// A documented public method.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Method {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub docs: String,

    /// Call signature; may contain `|` union separators
    #[serde(default)]
    pub signature: String,
}

/// A named entry with docs, shared by parts, custom properties, and slots.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NamedItem {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub docs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_namespace_prefix() {
        let entry = ComponentEntry {
            tag: "ui-button".to_string(),
            ..Default::default()
        };

        assert_eq!(entry.short_name("ui-"), "button");
    }

    #[test]
    fn keeps_tag_without_prefix() {
        let entry = ComponentEntry {
            tag: "button".to_string(),
            ..Default::default()
        };

        assert_eq!(entry.short_name("ui-"), "button");
    }

    #[test]
    fn missing_descriptor_fields_default_to_empty() {
        let prop: Property = serde_json::from_str(r#"{"name": "size"}"#).unwrap();

        assert_eq!(prop.name, "size");
        assert_eq!(prop.docs, "");
        assert_eq!(prop.attr, "");
        assert_eq!(prop.ty, "");
        assert_eq!(prop.default, "");
    }

    #[test]
    fn type_field_uses_manifest_name() {
        let prop: Property =
            serde_json::from_str(r#"{"name": "size", "type": "small | large"}"#).unwrap();

        assert_eq!(prop.ty, "small | large");
    }
}
