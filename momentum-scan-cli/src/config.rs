//! Configuration loading and parsing
//!
//! An optional `config.toml` supplies defaults for the render, publish and
//! screenshot steps. Command-line flags override anything set here.

use anyhow::{Context, Result};
use momentum_scan::RenderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub publish: PublishConfig,
    #[serde(default)]
    pub screenshot: ScreenshotConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublishConfig {
    /// Site root; pages go to `<site_dir>/scans/`
    #[serde(default = "default_site_dir")]
    pub site_dir: PathBuf,
    /// Where git runs for `--push` (default: the site directory's parent)
    pub repo_dir: Option<PathBuf>,
}

fn default_site_dir() -> PathBuf {
    PathBuf::from("site")
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            site_dir: default_site_dir(),
            repo_dir: None,
        }
    }
}

impl PublishConfig {
    /// Directory git commands run in
    pub fn repo_dir(&self) -> PathBuf {
        match &self.repo_dir {
            Some(dir) => dir.clone(),
            None => match self.site_dir.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScreenshotConfig {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
    /// Wait after navigation before capturing
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Margin kept around the table container
    #[serde(default = "default_padding")]
    pub padding: f64,
}

fn default_viewport_width() -> u32 {
    1300
}

fn default_viewport_height() -> u32 {
    1000
}

fn default_settle_ms() -> u64 {
    500
}

fn default_padding() -> f64 {
    16.0
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            settle_ms: default_settle_ms(),
            padding: default_padding(),
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use momentum_scan::Theme;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [render]
            title = "Semis Scan"
            theme = "dark"
            emoji = ""

            [publish]
            site_dir = "docs/site"

            [screenshot]
            settle_ms = 1200
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.render.title, "Semis Scan");
        assert_eq!(config.render.theme, Theme::Dark);
        assert!(config.render.emoji.is_empty());
        assert!(config.render.subtitle.is_empty());
        assert_eq!(config.publish.site_dir, PathBuf::from("docs/site"));
        assert_eq!(config.publish.repo_dir(), PathBuf::from("docs"));
        assert_eq!(config.screenshot.settle_ms, 1200);
        assert_eq!(config.screenshot.viewport_width, 1300);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.render.title, "Momentum Scan");
        assert_eq!(config.publish.site_dir, PathBuf::from("site"));
        assert_eq!(config.publish.repo_dir(), PathBuf::from("."));
        assert_eq!(config.screenshot.padding, 16.0);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[publish]\nrepo_dir = \"/srv/repo\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.publish.repo_dir(), PathBuf::from("/srv/repo"));

        assert!(load_config(&dir.path().join("missing.toml")).is_err());
    }
}
