//! Internationalization (i18n) support
//!
//! Translations live in `messages/{locale}.json` (or `.yml`) as nested
//! objects and are looked up by dotted key, e.g. `blog.readMore`. The catalog
//! is loaded once and read-only afterwards.

use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Locale used when a key is missing from the active locale
const FALLBACK_LOCALE: &str = "en";

/// Read-only translation catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Active locale
    locale: String,
    /// locale -> nested message tree
    messages: HashMap<String, Value>,
}

impl Catalog {
    /// Create an empty catalog for a locale
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            messages: HashMap::new(),
        }
    }

    /// Load every message file in a directory. A missing directory is not an
    /// error, lookups then fall back to the key itself.
    pub fn load<P: AsRef<Path>>(dir: P, locale: &str) -> Result<Self> {
        let mut catalog = Self::new(locale);
        let dir = dir.as_ref();
        if !dir.exists() {
            tracing::debug!("No messages directory at {:?}", dir);
            return Ok(catalog);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("json") | Some("yml") | Some("yaml")) {
                continue;
            }

            let lang = match path.file_stem().and_then(|s| s.to_str()) {
                Some(lang) => lang.to_string(),
                None => continue,
            };

            let content = fs::read_to_string(&path)?;
            let parsed = if ext == Some("json") {
                serde_json::from_str::<Value>(&content).map_err(anyhow::Error::from)
            } else {
                serde_yaml::from_str::<Value>(&content).map_err(anyhow::Error::from)
            };

            match parsed {
                Ok(data) => {
                    tracing::debug!("Loaded messages for {:?} from {:?}", lang, path);
                    catalog.insert(&lang, data);
                }
                Err(e) => tracing::warn!("Failed to parse message file {:?}: {}", path, e),
            }
        }

        Ok(catalog)
    }

    /// Add or replace the messages of a locale
    pub fn insert(&mut self, locale: &str, messages: Value) {
        self.messages.insert(locale.to_string(), messages);
    }

    /// Active locale
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate a key, falling back to English and then to the key itself
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| {
            tracing::warn!("Translation key not found: {}", key);
            key.to_string()
        })
    }

    /// Translate a key and substitute `{name}` placeholders.
    ///
    /// Placeholders without a matching parameter are left as they are.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut value = self.t(key);
        for (name, replacement) in params {
            value = value.replace(&format!("{{{}}}", name), replacement);
        }
        value
    }

    /// Whether a key resolves in the active locale or the fallback
    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.lookup_in(&self.locale, key).or_else(|| {
            if self.locale != FALLBACK_LOCALE {
                self.lookup_in(FALLBACK_LOCALE, key)
            } else {
                None
            }
        })
    }

    fn lookup_in(&self, locale: &str, key: &str) -> Option<String> {
        let mut current = self.messages.get(locale)?;
        for part in key.split('.') {
            current = current.as_object()?.get(part)?;
        }

        match current {
            Value::String(s) => Some(s.clone()),
            _ => {
                tracing::warn!("Translation value is not a string: {}", key);
                None
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample(locale: &str) -> Catalog {
        let mut catalog = Catalog::new(locale);
        catalog.insert(
            "en",
            json!({
                "blog": {
                    "title": "Blog",
                    "empty": "No blog posts yet.",
                    "count": "{count} posts"
                },
                "nav": { "home": "Home" }
            }),
        );
        catalog.insert("es", json!({ "blog": { "title": "Blog en español" } }));
        catalog
    }

    #[test]
    fn test_nested_lookup() {
        let catalog = sample("en");
        assert_eq!(catalog.t("blog.title"), "Blog");
        assert_eq!(catalog.t("nav.home"), "Home");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let catalog = sample("en");
        assert_eq!(catalog.t("blog.nope"), "blog.nope");
        assert!(!catalog.has("blog.nope"));
    }

    #[test]
    fn test_non_string_value_returns_key() {
        let catalog = sample("en");
        assert_eq!(catalog.t("blog"), "blog");
    }

    #[test]
    fn test_locale_falls_back_to_english() {
        let catalog = sample("es");
        assert_eq!(catalog.t("blog.title"), "Blog en español");
        assert_eq!(catalog.t("blog.empty"), "No blog posts yet.");
    }

    #[test]
    fn test_params() {
        let catalog = sample("en");
        assert_eq!(catalog.t_with("blog.count", &[("count", "3")]), "3 posts");
        assert_eq!(catalog.t_with("blog.count", &[]), "{count} posts");
    }

    #[test]
    fn test_load_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("en.json"), r#"{"blog": {"readMore": "Read more"}}"#).unwrap();
        fs::write(tmp.path().join("es.yml"), "blog:\n  readMore: Leer más\n").unwrap();
        fs::write(tmp.path().join("broken.json"), "{ not json").unwrap();

        let catalog = Catalog::load(tmp.path(), "es").unwrap();
        assert_eq!(catalog.messages.len(), 2);
        assert!(!catalog.messages.contains_key("broken"));
        assert_eq!(catalog.t("blog.readMore"), "Leer más");
    }

    #[test]
    fn test_load_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::load(tmp.path().join("messages"), "en").unwrap();
        assert_eq!(catalog.t("blog.title"), "blog.title");
    }
}
