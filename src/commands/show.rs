//! Print a single post

use anyhow::Result;

use crate::helpers::full_date;
use crate::Blog;

/// Print one post by file name: title, date, author, raw body.
pub fn run(blog: &Blog, filename: &str) -> Result<()> {
    let post = blog.store().load(filename)?;

    println!("{}", post.title);
    println!("{}", full_date(&post.date));
    if let Some(author) = &post.author {
        println!("by {}", author);
    }
    println!();
    println!("{}", post.content);

    Ok(())
}

/// Print the derived clean-text summary of one post.
pub fn summary(blog: &Blog, filename: &str) -> Result<()> {
    let post = blog.store().load(filename)?;
    println!("{}", post.summary);
    Ok(())
}
