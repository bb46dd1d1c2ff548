//! Render a single post to stdout

use anyhow::Result;

use crate::Blog;

/// Print the rendered HTML of the post with the given slug
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    let record = match blog.store().get(slug)? {
        Some(record) => record,
        None => anyhow::bail!("No post with slug: {}", slug),
    };

    let html = blog.renderer().render(&record.raw_content)?;
    println!("{}", html);

    Ok(())
}
