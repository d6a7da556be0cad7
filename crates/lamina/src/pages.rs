//! Page persistence: maps rendered pages to their on-disk locations.
//!
//! Pages land at `{root}/{component}/{facet}.md`, one directory per
//! component. The tree is regenerated from the manifest on every run and
//! should never be edited by hand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use lamina_render::RenderedPage;

/// Write one rendered page beneath the output root.
///
/// Creates the component directory if needed and returns the path written.
pub fn write_page(root: &Path, page: &RenderedPage) -> Result<PathBuf> {
    let dir = root.join(&page.component);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(format!("{}.md", page.facet.file_stem()));
    fs::write(&path, &page.body)
        .with_context(|| format!("Failed to write page: {}", path.display()))?;

    Ok(path)
}
