//! tinct configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level tinct configuration (tinct.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TinctConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Project metadata
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Output configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output directory for generated artifacts
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Platforms to generate; empty means all
    #[serde(default)]
    pub platforms: Vec<String>,
    /// CSS custom-property prefix
    #[serde(default = "default_prefix")]
    pub css_prefix: String,
}

fn default_dir() -> String {
    "dist".to_string()
}

fn default_prefix() -> String {
    "--".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            platforms: Vec::new(),
            css_prefix: default_prefix(),
        }
    }
}

/// Theme behavior configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Emit wcag theme variants and persistence hooks
    #[serde(default = "default_true")]
    pub switching: bool,
    /// Emit the dark-mode media block in the web stylesheet
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Theme backing the non-suffixed artifacts ("base" or "wcag")
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "base".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            switching: true,
            dark_mode: true,
            default_theme: default_theme(),
        }
    }
}

impl TinctConfig {
    /// Load configuration from a directory or file path (looks for
    /// tinct.toml in directories).
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("tinct.toml")
        };

        if !config_path.exists() {
            anyhow::bail!("no tinct.toml found at {}", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let config: TinctConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Load from a directory if a config file is present there, otherwise
    /// fall back to defaults.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        if dir.join("tinct.toml").exists() {
            Self::load(dir)
        } else {
            Ok(Self::default())
        }
    }
}
