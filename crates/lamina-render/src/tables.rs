//! Markdown table renderers, one per facet.
//!
//! Output is deterministic: rendering the same entry twice yields identical
//! bytes, and row order always follows manifest order. An empty descriptor
//! list renders to the empty string so the page is suppressed entirely.

use lamina_manifest::ComponentEntry;

use crate::facet::{Facet, RenderedPage};

/// Full-width vertical bar (U+FF5C). MDX renders an escaped `\|` inside an
/// inline code span incorrectly in tables, so the visually equivalent
/// full-width glyph is substituted instead.
const FULLWIDTH_BAR: &str = "\u{ff5c}";

/// Format multi-line docs for a single table cell.
///
/// Blank-line separated paragraphs become `<br /><br />`; remaining single
/// line breaks collapse to a space.
pub fn format_multiline(text: &str) -> String {
    text.replace("\n\n", "<br /><br />").replace('\n', " ")
}

/// Replace `|` with the full-width bar in a type or signature expression.
///
/// Applies only to expressions embedded in code spans, never to docs text.
fn escape_union_bars(expr: &str) -> String {
    expr.replace('|', FULLWIDTH_BAR)
}

/// Render the Properties page: one subsection per property with a
/// Description / Attribute / Type / Default key-value table.
pub fn render_properties(entry: &ComponentEntry) -> String {
    if entry.props.is_empty() {
        return String::new();
    }

    let blocks = entry
        .props
        .iter()
        .map(|prop| {
            format!(
                r#"
### {name}

| | |
| --- | --- |
| **Description** | {docs} |
| **Attribute** | `{attr}` |
| **Type** | `{ty}` |
| **Default** | `{default}` |

"#,
                name = prop.name,
                docs = format_multiline(&prop.docs),
                attr = prop.attr,
                ty = escape_union_bars(&prop.ty),
                default = prop.default,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
## Properties

{blocks}
"#
    )
}

/// Render the Events page: a single Name / Description table.
pub fn render_events(entry: &ComponentEntry) -> String {
    if entry.events.is_empty() {
        return String::new();
    }

    name_table(
        "Events",
        entry
            .events
            .iter()
            .map(|event| (event.event.as_str(), event.docs.as_str())),
    )
}

/// Render the Methods page: one subsection per method with a
/// Description / Signature key-value table.
pub fn render_methods(entry: &ComponentEntry) -> String {
    if entry.methods.is_empty() {
        return String::new();
    }

    let blocks = entry
        .methods
        .iter()
        .map(|method| {
            format!(
                r#"
### {name}

| | |
| --- | --- |
| **Description** | {docs} |
| **Signature** | `{signature}` |
"#,
                name = method.name,
                docs = format_multiline(&method.docs),
                signature = escape_union_bars(&method.signature),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
## Methods

{blocks}

"#
    )
}

/// Render the CSS Shadow Parts page.
pub fn render_parts(entry: &ComponentEntry) -> String {
    if entry.parts.is_empty() {
        return String::new();
    }

    name_table(
        "CSS Shadow Parts",
        entry
            .parts
            .iter()
            .map(|part| (part.name.as_str(), part.docs.as_str())),
    )
}

/// Render the CSS Custom Properties page.
pub fn render_custom_props(entry: &ComponentEntry) -> String {
    if entry.styles.is_empty() {
        return String::new();
    }

    name_table(
        "CSS Custom Properties",
        entry
            .styles
            .iter()
            .map(|style| (style.name.as_str(), style.docs.as_str())),
    )
}

/// Render the Slots page.
pub fn render_slots(entry: &ComponentEntry) -> String {
    if entry.slots.is_empty() {
        return String::new();
    }

    name_table(
        "Slots",
        entry
            .slots
            .iter()
            .map(|slot| (slot.name.as_str(), slot.docs.as_str())),
    )
}

/// Render a single facet of a component entry.
pub fn render_facet(entry: &ComponentEntry, facet: Facet) -> String {
    match facet {
        Facet::Props => render_properties(entry),
        Facet::Events => render_events(entry),
        Facet::Methods => render_methods(entry),
        Facet::Parts => render_parts(entry),
        Facet::CustomProps => render_custom_props(entry),
        Facet::Slots => render_slots(entry),
    }
}

/// Render every non-empty facet of a component entry.
///
/// Pages are keyed by the component's short name; empty facets produce no
/// page at all.
pub fn render_component(entry: &ComponentEntry, prefix: &str) -> Vec<RenderedPage> {
    let component = entry.short_name(prefix);

    Facet::ALL
        .iter()
        .filter_map(|&facet| {
            let body = render_facet(entry, facet);
            if body.is_empty() {
                None
            } else {
                Some(RenderedPage {
                    component: component.to_string(),
                    facet,
                    body,
                })
            }
        })
        .collect()
}

/// Render a heading plus a single Name / Description table.
///
/// Names go in code spans verbatim; docs are normalized for table cells.
fn name_table<'a>(heading: &str, rows: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let rows = rows
        .map(|(name, docs)| format!("| `{}` | {} |", name, format_multiline(docs)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
## {heading}

| Name | Description |
| --- | --- |
{rows}

"#
    )
}
