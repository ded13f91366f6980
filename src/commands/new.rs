//! Create a new post from a front-matter scaffold

use anyhow::{bail, Result};
use std::fs;

use crate::Blog;

/// Create a new post file and return its file name.
///
/// The file name defaults to the slugified title, and a missing `.md`
/// extension is appended either way. Refuses to overwrite an existing
/// post.
pub fn create_post(blog: &Blog, title: &str, filename: Option<&str>) -> Result<String> {
    blog.ensure_layout()?;

    let mut name = match filename {
        Some(name) => name.to_string(),
        None => slug::slugify(title),
    };
    if !name.ends_with(".md") {
        name.push_str(".md");
    }
    if name.contains(['/', '\\']) {
        bail!("invalid post file name: {:?}", name);
    }

    let path = blog.posts_dir.join(&name);
    if path.exists() {
        bail!("File already exists: {:?}", path);
    }

    let now = chrono::Local::now();
    let safe_title = title.replace('"', "\\\"");
    let content = format!(
        "---\ntitle: \"{}\"\ndate: {}\nauthor: {}\n---\n\n# {}\n\nStart writing here...\n",
        safe_title,
        now.format("%Y-%m-%d"),
        blog.config.author,
        title,
    );

    fs::write(&path, content)?;
    tracing::info!("Created {:?}", path);

    Ok(name)
}

/// Run the new command
pub fn run(blog: &Blog, title: &str, filename: Option<&str>) -> Result<()> {
    let name = create_post(blog, title, filename)?;
    println!("Created: {}", name);
    Ok(())
}
