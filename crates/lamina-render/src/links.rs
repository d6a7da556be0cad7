//! Cross-component link recognition.

use regex::Regex;

/// Build a matcher for relative Markdown links to known components.
///
/// Recognizes links of the form `(../button)` or `(../card#usage)` where the
/// target is one of `names`. Capture group 1 holds the component name and
/// group 2 the optional `#fragment`. Returns `None` when no names are known,
/// since no link could refer to a component.
///
/// Intended for a link-rewriting pass over handwritten pages; the facet
/// renderers never use it.
pub fn component_link_pattern<S: AsRef<str>>(names: &[S]) -> Option<Regex> {
    if names.is_empty() {
        return None;
    }

    let alternation = names
        .iter()
        .map(|name| regex::escape(name.as_ref()))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(r"\(\.\./({alternation})/?(#[^)]+)?\)");
    Some(Regex::new(&pattern).expect("Invalid component link pattern"))
}
