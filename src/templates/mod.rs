//! Built-in site templates using the Tera template engine
//!
//! Templates are embedded in the binary, so a site only needs its content
//! directory and an optional `_config.yml`.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies are already HTML; text fields are escaped in the templates
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("blog.html", include_str!("site/blog.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub url: String,
    pub root: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub slug: String,
    pub anchor: String,
    pub sequence: i64,
    pub date_label: String,
    /// ISO date for `<time datetime>`, when the filename holds a real date
    pub datetime: Option<String>,
    pub title: String,
    pub excerpt: String,
    /// Rendered HTML body
    pub content: String,
}

/// Translated UI strings, keyed by template name
pub type Labels = HashMap<&'static str, String>;

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteData {
        SiteData {
            title: "Allegory".to_string(),
            description: String::new(),
            url: "http://example.com".to_string(),
            root: "/".to_string(),
            language: "en".to_string(),
        }
    }

    fn labels() -> Labels {
        [
            ("home", "Home"),
            ("blog", "Blog"),
            ("empty", "No blog posts yet."),
            ("read_more", "Read more"),
            ("view_all", "View all blog posts"),
            ("preview_heading", "From the Blog"),
            ("preview_subtitle", "Thoughts."),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    #[test]
    fn test_render_empty_blog() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("labels", &labels());
        context.insert("posts", &Vec::<PostData>::new());

        let html = renderer.render("blog.html", &context).unwrap();
        assert!(html.contains("No blog posts yet."));
        assert!(html.contains("<title>Blog | Allegory</title>"));
    }

    #[test]
    fn test_render_preview_escapes_text() {
        let renderer = TemplateRenderer::new().unwrap();
        let post = PostData {
            slug: "001_jan-01-2026".to_string(),
            anchor: "post-001_jan-01-2026".to_string(),
            sequence: 1,
            date_label: "January 1, 2026".to_string(),
            datetime: Some("2026-01-01".to_string()),
            title: "Fish & Chips".to_string(),
            excerpt: "Some text here.".to_string(),
            content: "<p>Some text here.</p>".to_string(),
        };
        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("labels", &labels());
        context.insert("latest", &Some(post));

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains("Fish &amp; Chips"));
        assert!(html.contains(r#"href="/blog/#post-001_jan-01-2026""#));
        assert!(html.contains(r#"<time datetime="2026-01-01">January 1, 2026</time>"#));
    }

    #[test]
    fn test_render_escapes_attributes() {
        let renderer = TemplateRenderer::new().unwrap();
        let post = PostData {
            slug: "1_a\"b".to_string(),
            anchor: "post-1_a\"b".to_string(),
            sequence: 1,
            date_label: "a".to_string(),
            datetime: None,
            title: "T".to_string(),
            excerpt: String::new(),
            content: String::new(),
        };
        let mut site = site();
        site.language = "en\"x".to_string();
        let mut context = Context::new();
        context.insert("site", &site);
        context.insert("labels", &labels());
        context.insert("latest", &Some(post.clone()));
        context.insert("posts", &vec![post]);

        let home = renderer.render("index.html", &context).unwrap();
        assert!(home.contains("#post-1_a&quot;b"));
        assert!(home.contains(r#"lang="en&quot;x""#));
        assert!(!home.contains("a\"b"));

        let blog = renderer.render("blog.html", &context).unwrap();
        assert!(blog.contains(r#"id="post-1_a&quot;b""#));
    }
}
