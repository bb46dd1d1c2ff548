//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub url: String,
    pub language: String,

    // Content
    /// Directory holding the dated content files, relative to the base dir
    pub content_dir: String,
    /// Content file extension, without the dot
    pub extension: String,
    /// Lines starting with this prefix are directives and never rendered
    pub directive_prefix: String,
    /// Maximum excerpt length in characters
    pub excerpt_length: usize,

    // Directory
    pub public_dir: String,
    pub messages_dir: String,

    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            url: "http://example.com".to_string(),
            language: "en".to_string(),

            content_dir: "content/blog".to_string(),
            extension: "mdx".to_string(),
            directive_prefix: "import ".to_string(),
            excerpt_length: 200,

            public_dir: "public".to_string(),
            messages_dir: "messages".to_string(),

            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Code block highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
