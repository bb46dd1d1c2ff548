//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::content::filename;
use crate::Blog;

/// Create a post dated today
pub fn run(blog: &Blog, title: &str) -> Result<PathBuf> {
    create_post(blog, title, chrono::Local::now().date_naive())
}

/// Create the next post in sequence for the given date.
///
/// The file is named `<seq>_<mon>-<dd>-<yyyy>.<ext>` where `seq` is one more
/// than the highest existing sequence number.
pub fn create_post(blog: &Blog, title: &str, date: NaiveDate) -> Result<PathBuf> {
    let records = blog.store().get_all()?;
    let sequence = records.first().map(|r| r.sequence + 1).unwrap_or(1);

    let filename = format!(
        "{:03}_{}.{}",
        sequence,
        filename::date_token(date),
        blog.config.extension
    );

    fs::create_dir_all(&blog.content_dir)?;
    let path = blog.content_dir.join(&filename);
    if path.exists() {
        anyhow::bail!("File already exists: {:?}", path);
    }

    let body = format!("# {}\n\n\n<BlogFooter />\n", title.trim());
    fs::write(&path, body)?;

    tracing::info!("Created: {:?}", path);
    println!("Created: {}", path.display());

    Ok(path)
}
