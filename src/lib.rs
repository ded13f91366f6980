//! inkpost: a markdown-file-backed personal blog engine
//!
//! Posts live as individual markdown files with YAML front-matter in a
//! posts directory. There is no cache layer: every read re-scans and
//! re-parses from disk, so a post exists exactly as long as its file
//! does. This crate covers the content pipeline (discovery,
//! front-matter, dates, summaries) and the filesystem side of the
//! companion post editor; rendering is left to the presentation layer.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use content::PostStore;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
    /// Media assets directory
    pub images_dir: PathBuf,
}

impl Blog {
    /// Create a new blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let images_dir = base_dir.join(&config.images_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            images_dir,
        })
    }

    /// Create the posts and images directories if they are missing.
    ///
    /// The images directory is mounted by the (external) static file
    /// layer under `config.images_public_root`, so it has to exist even
    /// before the first asset is dropped in.
    pub fn ensure_layout(&self) -> Result<()> {
        fs::create_dir_all(&self.posts_dir)?;
        fs::create_dir_all(&self.images_dir)?;
        tracing::debug!(
            "Media in {:?} served under {}",
            self.images_dir,
            self.config.images_public_root
        );
        Ok(())
    }

    /// Post store rooted at this blog's posts directory
    pub fn store(&self) -> PostStore {
        PostStore::new(&self.posts_dir)
    }
}
