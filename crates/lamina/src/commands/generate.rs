//! Page generation command.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Deserialize;

use lamina_manifest::parse_manifest;
use lamina_render::render_component;

use crate::pages;

/// Configuration file structure (lamina.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    manifest: ManifestConfig,
    #[serde(default)]
    output: OutputConfig,
}

#[derive(Debug, Deserialize)]
struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    path: String,
    /// Namespace prefix stripped from component tags
    #[serde(default = "default_prefix")]
    prefix: String,
}

#[derive(Debug, Deserialize)]
struct OutputConfig {
    #[serde(default = "default_output_dir")]
    dir: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
            prefix: default_prefix(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_manifest_path() -> String {
    "api.json".to_string()
}
fn default_prefix() -> String {
    "ui-".to_string()
}
fn default_output_dir() -> String {
    "static/auto-generated".to_string()
}

/// Load configuration from lamina.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config() -> Result<ConfigFile> {
    let config_path = PathBuf::from("lamina.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read lamina.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse lamina.toml: {}", e))?;
        tracing::info!("Loaded config from lamina.toml");
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the generate command.
pub fn run(
    manifest: Option<PathBuf>,
    output: Option<PathBuf>,
    prefix: Option<String>,
) -> Result<()> {
    let start = Instant::now();

    let file_config = load_config()?;

    let manifest_path = manifest.unwrap_or_else(|| PathBuf::from(&file_config.manifest.path));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&file_config.output.dir));
    let prefix = prefix.unwrap_or(file_config.manifest.prefix);

    tracing::info!("Generating pages from {}", manifest_path.display());

    let source = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read manifest: {}", manifest_path.display()))?;

    // Parse up front so a malformed manifest aborts before anything is written
    let manifest = parse_manifest(&source)
        .with_context(|| format!("Failed to parse manifest: {}", manifest_path.display()))?;

    // Rendering is pure; each page has its own (component, facet) file,
    // so components fan out with no write contention.
    let results: Vec<Result<usize>> = manifest
        .components
        .par_iter()
        .map(|entry| {
            let rendered = render_component(entry, &prefix);
            for page in &rendered {
                pages::write_page(&output_dir, page)?;
            }
            Ok(rendered.len())
        })
        .collect();

    let mut total_pages = 0;
    for result in results {
        total_pages += result?;
    }

    tracing::info!(
        "Generated {} pages for {} components in {}ms",
        total_pages,
        manifest.components.len(),
        start.elapsed().as_millis()
    );
    tracing::info!("Output: {}", output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"{
        "components": [
            {
                "tag": "ui-button",
                "props": [
                    {
                        "name": "variant",
                        "docs": "The visual style.",
                        "attr": "variant",
                        "type": "primary|secondary",
                        "default": "primary"
                    }
                ],
                "events": [{"event": "uiClick", "docs": "Emitted on click."}]
            },
            {
                "tag": "ui-card",
                "slots": [{"name": "header", "docs": "Card header content."}]
            }
        ]
    }"#;

    #[test]
    fn generates_pages_per_component_and_facet() {
        let temp = tempdir().unwrap();
        let manifest_path = temp.path().join("api.json");
        let out = temp.path().join("generated");

        fs::write(&manifest_path, MANIFEST).unwrap();

        run(
            Some(manifest_path),
            Some(out.clone()),
            Some("ui-".to_string()),
        )
        .unwrap();

        assert!(out.join("button/props.md").exists());
        assert!(out.join("button/events.md").exists());
        assert!(out.join("card/slots.md").exists());

        // Empty facets are suppressed, not written as empty files
        assert!(!out.join("button/methods.md").exists());
        assert!(!out.join("card/props.md").exists());

        let props = fs::read_to_string(out.join("button/props.md")).unwrap();
        assert!(props.contains("### variant"));
        assert!(props.contains("`primary\u{ff5c}secondary`"));
    }

    #[test]
    fn malformed_manifest_writes_nothing() {
        let temp = tempdir().unwrap();
        let manifest_path = temp.path().join("api.json");
        let out = temp.path().join("generated");

        fs::write(&manifest_path, r#"{"version": "1.0.0"}"#).unwrap();

        let result = run(
            Some(manifest_path),
            Some(out.clone()),
            Some("ui-".to_string()),
        );

        assert!(result.is_err());
        assert!(!out.exists());
    }

    #[test]
    fn missing_manifest_file_is_an_error() {
        let temp = tempdir().unwrap();

        let result = run(
            Some(temp.path().join("nope.json")),
            Some(temp.path().join("generated")),
            None,
        );

        assert!(result.is_err());
    }
}
