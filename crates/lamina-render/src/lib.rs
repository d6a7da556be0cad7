//! Per-facet Markdown rendering for component manifest entries.
//!
//! Each component entry renders into up to six documents: properties,
//! events, methods, CSS shadow parts, CSS custom properties, and slots.
//! The renderers are pure string transforms with no I/O; persisting the
//! output is the caller's concern.

pub mod facet;
pub mod links;
pub mod tables;

pub use facet::{Facet, RenderedPage};
pub use links::component_link_pattern;
pub use tables::{
    format_multiline, render_component, render_custom_props, render_events, render_facet,
    render_methods, render_parts, render_properties, render_slots,
};
