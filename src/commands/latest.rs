//! Show a preview of the newest post

use anyhow::Result;

use crate::Blog;

/// Print date, title, excerpt and link of the latest post
pub fn run(blog: &Blog) -> Result<()> {
    let Some(record) = blog.store().get_latest()? else {
        println!("No blog posts yet.");
        return Ok(());
    };

    let extractor = blog.extractor();
    println!("{}", record.date_label);
    println!("{}", extractor.title(&record.raw_content));
    println!();
    println!("{}", extractor.excerpt(&record.raw_content));
    println!();
    println!("/blog#{}", record.anchor());

    Ok(())
}
