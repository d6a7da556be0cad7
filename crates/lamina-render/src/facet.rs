//! Facet identity and rendered page values.

/// One of the six documented aspects of a component's API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Props,
    Events,
    Methods,
    Parts,
    CustomProps,
    Slots,
}

impl Facet {
    /// All facets, in render order.
    pub const ALL: [Facet; 6] = [
        Facet::Props,
        Facet::Events,
        Facet::Methods,
        Facet::Parts,
        Facet::CustomProps,
        Facet::Slots,
    ];

    /// Stable file stem the documentation site expects for this facet.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Facet::Props => "props",
            Facet::Events => "events",
            Facet::Methods => "methods",
            Facet::Parts => "parts",
            Facet::CustomProps => "custom-props",
            Facet::Slots => "slots",
        }
    }
}

/// A rendered document for one (component, facet) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Component short name (tag with the namespace prefix stripped)
    pub component: String,

    /// Which facet this page documents
    pub facet: Facet,

    /// Markdown body
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stems_are_stable() {
        let stems: Vec<&str> = Facet::ALL.iter().map(|f| f.file_stem()).collect();

        assert_eq!(
            stems,
            vec!["props", "events", "methods", "parts", "custom-props", "slots"]
        );
    }
}
