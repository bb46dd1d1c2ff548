//! Content module - dated content files, text extraction and rendering

mod error;
pub mod extract;
pub mod filename;
mod markdown;
mod record;
pub mod render;
pub mod store;

pub use error::{ContentError, Result};
pub use extract::{extract_excerpt, extract_title, TextExtractor};
pub use filename::FilenameMeta;
pub use markdown::MarkdownEngine;
pub use record::ContentRecord;
pub use render::{Component, ComponentTable, ContentRenderer, RenderEngine};
pub use store::{ContentStore, Discovery, SkippedFile};
