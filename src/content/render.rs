//! Content rendering
//!
//! Raw post bodies may contain directive lines (`import ...`) that only make
//! sense to the authoring tool. They are stripped here, and the remaining
//! markup is handed to a [`RenderEngine`] together with the table of
//! components a post may embed.

use indexmap::IndexMap;

use super::error::Result;
use super::extract::{is_directive, DEFAULT_DIRECTIVE_PREFIX};

/// Disclosure shown at the bottom of posts through `<BlogFooter />`
const FOOTER_NOTE: &str = r#"<h5><em>A note about AI usage:</em></h5>
<em>This article was hand-written by real individuals working on Allegory.js. While we use LLMs to great effect to help ideate, review code, and work through architectural decisions, all blog content is created by humans, and reflects the unique experiences and viewpoints of the authors.</em>"#;

/// A named block that markup can embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    /// Pre-rendered HTML inserted where the component is referenced
    pub html: String,
}

impl Component {
    pub fn new(name: &str, html: &str) -> Self {
        Self {
            name: name.to_string(),
            html: html.to_string(),
        }
    }
}

/// Components addressable from markup, keyed by name
#[derive(Debug, Clone, Default)]
pub struct ComponentTable {
    components: IndexMap<String, Component>,
}

impl ComponentTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed table used for blog posts
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert(Component::new("BlogFooter", FOOTER_NOTE));
        table
    }

    pub fn insert(&mut self, component: Component) {
        self.components.insert(component.name.clone(), component);
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }
}

/// Turns cleaned markup into HTML, resolving component references
pub trait RenderEngine {
    fn render(&self, markup: &str, components: &ComponentTable) -> Result<String>;
}

/// Strips directives and delegates to a render engine
pub struct ContentRenderer<E> {
    engine: E,
    components: ComponentTable,
    directive_prefix: String,
}

impl<E: RenderEngine> ContentRenderer<E> {
    /// Renderer with the standard component table and directive prefix
    pub fn new(engine: E) -> Self {
        Self::with_options(engine, ComponentTable::standard(), DEFAULT_DIRECTIVE_PREFIX)
    }

    pub fn with_options(engine: E, components: ComponentTable, directive_prefix: &str) -> Self {
        Self {
            engine,
            components,
            directive_prefix: directive_prefix.to_string(),
        }
    }

    /// Render a raw body. Directive lines never reach the engine.
    pub fn render(&self, raw_content: &str) -> Result<String> {
        let cleaned = strip_directives(raw_content, &self.directive_prefix);
        self.engine.render(&cleaned, &self.components)
    }
}

/// Remove every line starting with `prefix`
pub fn strip_directives(raw_content: &str, prefix: &str) -> String {
    raw_content
        .split('\n')
        .filter(|line| !is_directive(line, prefix))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Engine that records what it was given
    #[derive(Default)]
    struct RecordingEngine {
        seen: RefCell<Vec<String>>,
    }

    impl RenderEngine for &RecordingEngine {
        fn render(&self, markup: &str, components: &ComponentTable) -> Result<String> {
            self.seen.borrow_mut().push(markup.to_string());
            Ok(format!("footer: {}", components.get("BlogFooter").is_some()))
        }
    }

    #[test]
    fn test_directives_never_reach_engine() {
        let engine = RecordingEngine::default();
        let renderer = ContentRenderer::new(&engine);
        let raw = "import {BlogFooter} from './footer'\n# Title\n\nBody\nimport x from 'y'\n<BlogFooter />";

        let out = renderer.render(raw).unwrap();
        assert_eq!(out, "footer: true");

        let seen = engine.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].lines().all(|l| !l.starts_with("import ")));
        assert_eq!(seen[0], "# Title\n\nBody\n<BlogFooter />");
    }

    #[test]
    fn test_strip_keeps_indented_import() {
        let cleaned = strip_directives("  import kept\nimport gone\ntext", "import ");
        assert_eq!(cleaned, "  import kept\ntext");
    }

    #[test]
    fn test_empty_prefix_strips_nothing() {
        assert_eq!(strip_directives("a\nb", ""), "a\nb");
    }

    #[test]
    fn test_standard_table_has_footer() {
        let table = ComponentTable::standard();
        let footer = table.get("BlogFooter").unwrap();
        assert!(footer.html.contains("A note about AI usage"));
        assert!(table.get("Missing").is_none());
    }
}
