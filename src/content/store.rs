//! Content store - discovers dated content files and builds records

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::filename::SequenceError;
use super::{ContentRecord, FilenameMeta};
use crate::Blog;

/// A file that could not be turned into a record
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: ContentError,
}

/// Outcome of one discovery pass
#[derive(Debug, Default)]
pub struct Discovery {
    /// Records ordered newest first
    pub records: Vec<ContentRecord>,
    /// Files that were skipped, with the reason
    pub skipped: Vec<SkippedFile>,
}

/// Reads content records from a single flat directory.
///
/// Nothing is cached: every call scans the directory again, so a file added
/// between two calls shows up in the second one.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    extension: String,
}

impl ContentStore {
    /// Create a store over `root`, picking up files ending in `.{extension}`
    pub fn new<P: Into<PathBuf>>(root: P, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Create the store configured for a site
    pub fn for_blog(blog: &Blog) -> Self {
        Self::new(&blog.content_dir, &blog.config.extension)
    }

    /// Content root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the root and build every record, reporting files that failed
    pub fn discover(&self) -> Result<Discovery> {
        if !self.root.exists() {
            tracing::debug!("Content directory {:?} does not exist", self.root);
            return Ok(Discovery::default());
        }

        let mut discovery = Discovery::default();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ContentError::ListDir {
                        path: self.root.clone(),
                        source: e.into(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", self.root, e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !self.is_content_file(path) {
                continue;
            }

            match self.load_record(path) {
                Ok(record) => discovery.records.push(record),
                Err(error) => {
                    tracing::warn!("Skipping {:?}: {}", path, error);
                    discovery.skipped.push(SkippedFile {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            }
        }

        // Newest first
        discovery
            .records
            .sort_by(|a, b| b.sequence.cmp(&a.sequence));

        tracing::debug!(
            "Discovered {} records in {:?} ({} skipped)",
            discovery.records.len(),
            self.root,
            discovery.skipped.len()
        );

        Ok(discovery)
    }

    /// All records, newest first. A missing root yields an empty list.
    pub fn get_all(&self) -> Result<Vec<ContentRecord>> {
        Ok(self.discover()?.records)
    }

    /// The newest record, if any
    pub fn get_latest(&self) -> Result<Option<ContentRecord>> {
        Ok(self.get_all()?.into_iter().next())
    }

    /// Look a record up by slug
    pub fn get(&self, slug: &str) -> Result<Option<ContentRecord>> {
        Ok(self.get_all()?.into_iter().find(|r| r.slug == slug))
    }

    /// Build a single record from a file
    fn load_record(&self, path: &Path) -> Result<ContentRecord> {
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::MalformedFilename(path.to_string_lossy().to_string()))?;

        let meta = FilenameMeta::parse(filename, &self.extension);
        let sequence = meta.sequence.map_err(|e| match e {
            SequenceError::NotNumeric => ContentError::MalformedFilename(filename.to_string()),
            SequenceError::OutOfRange => ContentError::SequenceOutOfRange(filename.to_string()),
        })?;

        let raw_content = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let slug = super::filename::strip_extension(filename, &self.extension).to_string();

        Ok(ContentRecord {
            slug,
            sequence,
            date_token: meta.date_token,
            date_label: meta.date_label,
            raw_content,
        })
    }

    /// Check if a file has the content extension
    fn is_content_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = ContentStore::new(tmp.path().join("nope"), "mdx");
        assert!(store.get_all().unwrap().is_empty());
        assert!(store.get_latest().unwrap().is_none());
    }

    #[test]
    fn test_sorted_newest_first() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "001_jan-05-2026.mdx", "# One");
        write(tmp.path(), "003_mar-14-2026.mdx", "# Three");
        write(tmp.path(), "002_feb-08-2026.mdx", "# Two");

        let store = ContentStore::new(tmp.path(), "mdx");
        let records = store.get_all().unwrap();
        let sequences: Vec<_> = records.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![3, 2, 1]);

        let latest = store.get_latest().unwrap().unwrap();
        assert_eq!(latest, records[0]);
        assert_eq!(latest.slug, "003_mar-14-2026");
        assert_eq!(latest.date_label, "March 14, 2026");
        assert_eq!(latest.raw_content, "# Three");
    }

    #[test]
    fn test_ignores_other_extensions_and_directories() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "001_jan-05-2026.mdx", "# One");
        write(tmp.path(), "002_jan-06-2026.md", "# Not content");
        write(tmp.path(), "notes.txt", "scratch");
        fs::create_dir(tmp.path().join("004_apr-01-2026.mdx")).unwrap();

        let store = ContentStore::new(tmp.path(), "mdx");
        let records = store.get_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "001_jan-05-2026");
    }

    #[test]
    fn test_malformed_sequence_is_skipped_and_reported() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "001_jan-05-2026.mdx", "# One");
        write(tmp.path(), "draft_jan-06-2026.mdx", "# Draft");

        let store = ContentStore::new(tmp.path(), "mdx");
        let discovery = store.discover().unwrap();
        assert_eq!(discovery.records.len(), 1);
        assert_eq!(discovery.skipped.len(), 1);
        assert!(matches!(
            discovery.skipped[0].error,
            ContentError::MalformedFilename(ref name) if name == "draft_jan-06-2026.mdx"
        ));
    }

    #[test]
    fn test_unreadable_file_is_skipped_and_reported() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "001_jan-05-2026.mdx", "# One");
        // Not valid UTF-8
        fs::write(tmp.path().join("002_jan-06-2026.mdx"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let store = ContentStore::new(tmp.path(), "mdx");
        let discovery = store.discover().unwrap();
        assert_eq!(discovery.records.len(), 1);
        assert_eq!(discovery.records[0].slug, "001_jan-05-2026");
        assert_eq!(discovery.skipped.len(), 1);
        assert!(matches!(discovery.skipped[0].error, ContentError::Read { .. }));
        assert!(discovery.skipped[0].path.ends_with("002_jan-06-2026.mdx"));
    }

    #[test]
    fn test_oversized_sequence_is_reported_separately() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "99999999999999999999_jan-05-2026.mdx", "# Huge");

        let store = ContentStore::new(tmp.path(), "mdx");
        let discovery = store.discover().unwrap();
        assert!(discovery.records.is_empty());
        assert!(matches!(
            discovery.skipped[0].error,
            ContentError::SequenceOutOfRange(_)
        ));
    }

    #[test]
    fn test_get_by_slug() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "001_jan-05-2026.mdx", "# One");
        write(tmp.path(), "002_feb-08-2026.mdx", "# Two");

        let store = ContentStore::new(tmp.path(), ".mdx");
        let record = store.get("001_jan-05-2026").unwrap().unwrap();
        assert_eq!(record.sequence, 1);
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_rescans_on_every_call() {
        let tmp = TempDir::new().unwrap();
        let store = ContentStore::new(tmp.path(), "mdx");
        assert!(store.get_latest().unwrap().is_none());

        write(tmp.path(), "005_may-01-2026.mdx", "# Five");
        assert_eq!(store.get_latest().unwrap().unwrap().sequence, 5);
    }
}
