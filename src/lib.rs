//! inkpost: dated blog content pipeline
//!
//! Discovers `<seq>_<mon>-<dd>-<yyyy>.mdx` content files, derives ordering and
//! date labels from their names, extracts titles and excerpts, and renders
//! full posts through a component-aware markdown engine.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod i18n;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentRenderer, ContentStore, MarkdownEngine, TextExtractor};

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the dated content files
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Translation files directory
    pub messages_dir: PathBuf,
}

impl Blog {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let messages_dir = base_dir.join(&config.messages_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            messages_dir,
        }
    }

    /// Path of the site configuration file
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("_config.yml")
    }

    /// Content store over the configured content directory
    pub fn store(&self) -> ContentStore {
        ContentStore::for_blog(self)
    }

    /// Extractor using the configured directive prefix and excerpt length
    pub fn extractor(&self) -> TextExtractor {
        TextExtractor::new(&self.config.directive_prefix, self.config.excerpt_length)
    }

    /// Renderer with the standard component table
    pub fn renderer(&self) -> ContentRenderer<MarkdownEngine> {
        let engine = MarkdownEngine::with_options(
            &self.config.highlight.theme,
            self.config.highlight.line_number,
        );
        ContentRenderer::with_options(
            engine,
            content::ComponentTable::standard(),
            &self.config.directive_prefix,
        )
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
