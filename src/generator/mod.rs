//! Generator module - writes the static blog pages using the built-in templates

use anyhow::Result;
use std::fs;
use std::path::Path;
use tera::Context;

use crate::content::{ContentRecord, ContentRenderer, MarkdownEngine, TextExtractor};
use crate::i18n::Catalog;
use crate::templates::{Labels, PostData, SiteData, TemplateRenderer};
use crate::Blog;

/// Template label name, translation key and built-in English text
const LABELS: [(&str, &str, &str); 7] = [
    ("home", "nav.home", "Home"),
    ("blog", "blog.title", "Blog"),
    ("empty", "blog.empty", "No blog posts yet."),
    ("read_more", "blog.readMore", "Read more"),
    ("view_all", "blog.viewAll", "View all blog posts →"),
    ("preview_heading", "blog.previewHeading", "From the Blog"),
    (
        "preview_subtitle",
        "blog.previewSubtitle",
        "Thoughts on interactive fiction, engine architecture, and the craft of game development.",
    ),
];

/// Static site generator
pub struct Generator {
    blog: Blog,
    templates: TemplateRenderer,
    renderer: ContentRenderer<MarkdownEngine>,
    extractor: TextExtractor,
    catalog: Catalog,
}

impl Generator {
    /// Create a new generator, loading the translation catalog once
    pub fn new(blog: &Blog) -> Result<Self> {
        let catalog = Catalog::load(&blog.messages_dir, &blog.config.language)?;

        Ok(Self {
            blog: blog.clone(),
            templates: TemplateRenderer::new()?,
            renderer: blog.renderer(),
            extractor: blog.extractor(),
            catalog,
        })
    }

    /// Generate the home page and the blog index from the given records
    pub fn generate(&self, records: &[ContentRecord]) -> Result<()> {
        fs::create_dir_all(&self.blog.public_dir)?;

        let posts: Vec<PostData> = records
            .iter()
            .filter_map(|record| match self.post_data(record) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!("Failed to render {}: {}", record.slug, e);
                    None
                }
            })
            .collect();

        let mut context = Context::new();
        context.insert("site", &self.site_data());
        context.insert("labels", &self.labels());

        // Home page with the latest post preview. The preview needs no
        // rendered body, so a post that fails to render still shows here.
        let latest = records.first().map(|record| self.summary_data(record));
        context.insert("latest", &latest);
        let html = self.templates.render("index.html", &context)?;
        write_page(&self.blog.public_dir.join("index.html"), &html)?;

        // Blog index with every post, newest first
        context.insert("posts", &posts);
        let html = self.templates.render("blog.html", &context)?;
        write_page(&self.blog.public_dir.join("blog").join("index.html"), &html)?;

        tracing::info!("Generated {} posts", posts.len());
        Ok(())
    }

    /// Template data for one record, without the rendered body
    fn summary_data(&self, record: &ContentRecord) -> PostData {
        PostData {
            slug: record.slug.clone(),
            anchor: record.anchor(),
            sequence: record.sequence,
            date_label: record.date_label.clone(),
            datetime: record.date().map(|d| d.format("%Y-%m-%d").to_string()),
            title: self.extractor.title(&record.raw_content),
            excerpt: self.extractor.excerpt(&record.raw_content),
            content: String::new(),
        }
    }

    /// Template data for one record, including the rendered body
    fn post_data(&self, record: &ContentRecord) -> Result<PostData> {
        Ok(PostData {
            content: self.renderer.render(&record.raw_content)?,
            ..self.summary_data(record)
        })
    }

    fn site_data(&self) -> SiteData {
        SiteData {
            title: self.blog.config.title.clone(),
            description: self.blog.config.description.clone(),
            url: self.blog.config.url.clone(),
            root: "/".to_string(),
            language: self.catalog.locale().to_string(),
        }
    }

    /// Translated labels, falling back to the built-in English strings
    fn labels(&self) -> Labels {
        LABELS
            .iter()
            .map(|(name, key, default)| {
                let value = if self.catalog.has(key) {
                    self.catalog.t(key)
                } else {
                    default.to_string()
                };
                (*name, value)
            })
            .collect()
    }
}

/// Write a page, creating parent directories
fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}
