//! Post repository - scans the posts directory and builds post records
//!
//! There is deliberately no cache: the filesystem owns post lifecycle,
//! so every scan re-reads every file. Single writer (the co-located
//! editor), interactive file counts; see the crate docs.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::{summary, FrontMatter, Post};
use crate::helpers::normalize_date;

/// Why a file was left out of a scan.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("unreadable file: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("malformed front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

/// A file that was present but did not become a post.
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of scanning the posts directory.
#[derive(Debug, Default)]
pub struct Scan {
    /// Posts ordered by date, newest first.
    pub posts: Vec<Post>,
    /// Files that could not be parsed, with the reason each was left
    /// out. Callers decide whether to log or surface them.
    pub skipped: Vec<Skipped>,
}

/// Loads posts from a directory of markdown files.
pub struct PostStore {
    dir: PathBuf,
}

impl PostStore {
    /// Create a store rooted at a posts directory
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Scan the posts directory and parse every markdown file in it.
    ///
    /// A missing directory is created and treated as empty. Files that
    /// fail to read or parse never abort the scan; they end up in
    /// `Scan::skipped`.
    pub fn scan(&self) -> Result<Scan> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("failed to create posts directory {:?}", self.dir))?;
            return Ok(Scan::default());
        }

        let mut scan = Scan::default();

        // Depth 1: posts/images/ and friends hold assets, not content
        for entry in WalkDir::new(&self.dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match self.parse_post(path) {
                Ok(post) => scan.posts.push(post),
                Err(reason) => scan.skipped.push(Skipped {
                    path: path.to_path_buf(),
                    reason,
                }),
            }
        }

        // Stable sort, newest first; date ties keep discovery order
        scan.posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(scan)
    }

    /// Scan and return just the ordered posts, logging skipped files.
    pub fn posts(&self) -> Result<Vec<Post>> {
        let scan = self.scan()?;
        for skipped in &scan.skipped {
            tracing::warn!("Skipping {:?}: {}", skipped.path, skipped.reason);
        }
        Ok(scan.posts)
    }

    /// Load a single post by its file name.
    pub fn load(&self, filename: &str) -> Result<Post> {
        let path = self.post_path(filename)?;
        if !path.exists() {
            bail!("no such post: {}", filename);
        }
        self.parse_post(&path)
            .with_context(|| format!("failed to load {}", filename))
    }

    /// Raw file contents of a post, for editing.
    pub fn raw(&self, filename: &str) -> Result<String> {
        let path = self.post_path(filename)?;
        fs::read_to_string(&path).with_context(|| format!("failed to read {:?}", path))
    }

    /// Write raw contents back to a post file.
    pub fn save(&self, filename: &str, contents: &str) -> Result<()> {
        let path = self.post_path(filename)?;
        fs::write(&path, contents).with_context(|| format!("failed to write {:?}", path))
    }

    /// Sorted markdown file names in the posts directory.
    pub fn filenames(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_markdown_file(&path) {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Parse one file into a post record
    fn parse_post(&self, path: &Path) -> Result<Post, SkipReason> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Post {
            title: fm.title.unwrap_or_else(|| "Untitled".to_string()),
            date: normalize_date(fm.date.as_ref()),
            author: fm.author,
            content: body.trim().to_string(),
            summary: summary::summarize(body),
            filename,
        })
    }

    /// Resolve a file name inside the posts directory.
    ///
    /// Post keys are base names; anything that could walk out of the
    /// directory is rejected.
    fn post_path(&self, filename: &str) -> Result<PathBuf> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename == ".." {
            bail!("invalid post file name: {:?}", filename);
        }
        Ok(self.dir.join(filename))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate};

    fn write_post(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_scan_sorts_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "a.md", "---\ntitle: A\ndate: 2024-01-01\n---\nBody A\n");
        write_post(tmp.path(), "b.md", "---\ntitle: B\ndate: 2023-06-15\n---\nBody B\n");
        write_post(tmp.path(), "c.md", "---\ntitle: C\ndate: 2024-06-01\n---\nBody C\n");

        let scan = PostStore::new(tmp.path()).scan().unwrap();
        assert!(scan.skipped.is_empty());

        let dates: Vec<NaiveDate> = scan.posts.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![ymd(2024, 6, 1), ymd(2024, 1, 1), ymd(2023, 6, 15)]);
    }

    #[test]
    fn test_missing_directory_is_created_and_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("posts");

        let scan = PostStore::new(&dir).scan().unwrap();
        assert!(scan.posts.is_empty());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "undated.md", "---\ntitle: No Date\n---\nBody\n");

        let posts = PostStore::new(tmp.path()).posts().unwrap();
        assert_eq!(posts[0].date, Local::now().date_naive());
    }

    #[test]
    fn test_missing_title_defaults_to_untitled() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "anon.md", "---\ndate: 2024-03-01\n---\nBody\n");

        let posts = PostStore::new(tmp.path()).posts().unwrap();
        assert_eq!(posts[0].title, "Untitled");
        assert_eq!(posts[0].filename, "anon.md");
    }

    #[test]
    fn test_malformed_frontmatter_is_skipped_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "good.md", "---\ntitle: Fine\ndate: 2024-02-02\n---\nBody\n");
        write_post(tmp.path(), "bad.md", "---\ntitle: \"unterminated\n---\nBody\n");

        let scan = PostStore::new(tmp.path()).scan().unwrap();
        assert_eq!(scan.posts.len(), 1);
        assert_eq!(scan.posts[0].title, "Fine");
        assert_eq!(scan.skipped.len(), 1);
        assert!(scan.skipped[0].path.ends_with("bad.md"));
        assert!(matches!(scan.skipped[0].reason, SkipReason::FrontMatter(_)));
    }

    #[test]
    fn test_post_fields_are_derived_from_body() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(
            tmp.path(),
            "post.md",
            "---\ntitle: Fields\ndate: 2024-05-05\nauthor: Jane\n---\n\n# Heading\n\nSome **bold** prose.\n",
        );

        let post = PostStore::new(tmp.path()).load("post.md").unwrap();
        assert_eq!(post.author.as_deref(), Some("Jane"));
        assert_eq!(post.content, "# Heading\n\nSome **bold** prose.");
        assert_eq!(post.summary, "Heading\n\nSome bold prose.…");
    }

    #[test]
    fn test_non_markdown_and_subdirectories_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "real.md", "---\ntitle: R\ndate: 2024-01-01\n---\nBody\n");
        write_post(tmp.path(), "notes.txt", "not a post");
        fs::create_dir(tmp.path().join("images")).unwrap();
        write_post(
            &tmp.path().join("images"),
            "nested.md",
            "---\ntitle: Hidden\ndate: 2024-01-02\n---\nBody\n",
        );

        let posts = PostStore::new(tmp.path()).posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].filename, "real.md");
    }

    #[test]
    fn test_load_missing_post_errors() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(PostStore::new(tmp.path()).load("ghost.md").is_err());
    }

    #[test]
    fn test_path_escapes_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PostStore::new(tmp.path());
        assert!(store.raw("../outside.md").is_err());
        assert!(store.save("a/b.md", "x").is_err());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PostStore::new(tmp.path());

        store
            .save("draft.md", "---\ntitle: Draft\ndate: 2024-04-04\n---\nWork in progress.\n")
            .unwrap();

        let post = store.load("draft.md").unwrap();
        assert_eq!(post.title, "Draft");
        assert_eq!(post.date, ymd(2024, 4, 4));

        let raw = store.raw("draft.md").unwrap();
        assert!(raw.starts_with("---\ntitle: Draft"));
    }

    #[test]
    fn test_filenames_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "b.md", "b");
        write_post(tmp.path(), "a.md", "a");
        write_post(tmp.path(), "c.markdown", "c");

        let names = PostStore::new(tmp.path()).filenames().unwrap();
        assert_eq!(names, vec!["a.md", "b.md", "c.markdown"]);
    }
}
