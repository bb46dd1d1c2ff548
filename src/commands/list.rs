//! List discovered posts

use anyhow::Result;

use crate::Blog;

/// Print every post, newest first, followed by any skipped files
pub fn run(blog: &Blog) -> Result<()> {
    let store = blog.store();
    let extractor = blog.extractor();
    let discovery = store.discover()?;

    println!(
        "Posts in {} ({}):",
        store.root().display(),
        discovery.records.len()
    );
    for record in &discovery.records {
        println!(
            "  #{:<4} {:<20} {} [{}]",
            record.sequence,
            record.date_label,
            extractor.title(&record.raw_content),
            record.slug
        );
    }

    if !discovery.skipped.is_empty() {
        println!("Skipped ({}):", discovery.skipped.len());
        for skipped in &discovery.skipped {
            println!("  {} - {}", skipped.path.display(), skipped.error);
        }
    }

    Ok(())
}
