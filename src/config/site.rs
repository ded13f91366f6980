//! Site configuration (config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    /// Default author stamped into new-post scaffolds
    pub author: String,

    // Landing page
    #[serde(default)]
    pub links: Vec<SiteLink>,

    // Directory
    pub posts_dir: String,
    pub images_dir: String,
    /// Public path prefix the images directory is served under
    pub images_public_root: String,

    // Date display format (chrono)
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// A landing-page navigation link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            subtitle: "A personal blog".to_string(),
            author: "John Doe".to_string(),

            links: Vec::new(),

            posts_dir: "posts".to_string(),
            images_dir: "posts/images".to_string(),
            images_public_root: "/post/images".to_string(),

            date_format: "%B %d, %Y".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.images_public_root, "/post/images");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Home Lab Notes
subtitle: Servers and software
author: Test User
links:
  - name: GitHub
    url: https://github.com/someone
    icon: code
  - name: Blog
    url: /blog
    icon: article
date_format: "%Y-%m-%d"
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Home Lab Notes");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.links.len(), 2);
        assert_eq!(config.links[0].name, "GitHub");
        assert_eq!(config.links[1].url, "/blog");
        assert_eq!(config.date_format, "%Y-%m-%d");
        // Unchanged defaults survive a partial file
        assert_eq!(config.posts_dir, "posts");
    }
}
