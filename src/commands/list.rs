//! List posts, newest first

use anyhow::Result;

use crate::helpers::format_date;
use crate::Blog;

/// Print the ordered post listing, plus any files the scan skipped.
pub fn run(blog: &Blog) -> Result<()> {
    let scan = blog.store().scan()?;

    println!("Posts ({}):", scan.posts.len());
    for post in &scan.posts {
        println!(
            "  {} - {} [{}]",
            format_date(&post.date, &blog.config.date_format),
            post.title,
            post.filename
        );
    }

    if !scan.skipped.is_empty() {
        println!("Skipped ({}):", scan.skipped.len());
        for skipped in &scan.skipped {
            println!("  {:?}: {}", skipped.path, skipped.reason);
        }
    }

    Ok(())
}
