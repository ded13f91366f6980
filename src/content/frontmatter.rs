//! Front-matter parsing

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front-matter data from a post file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// Kept as a raw YAML value; the date normalizer decides what to
    /// make of strings, numbers, or anything else.
    pub date: Option<serde_yaml::Value>,
    pub author: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from the raw file contents.
    /// Returns (front_matter, body).
    ///
    /// A file with no `---` header, or with an unterminated one, is a
    /// valid post with default metadata and the whole file as body.
    /// Invalid YAML between the delimiters is an error; callers skip
    /// the file.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.trim_start();

        if !content.starts_with("---") {
            return Ok((FrontMatter::default(), content));
        }

        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        if let Some(end_pos) = rest.find("\n---") {
            let header = &rest[..end_pos];
            let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

            if header.trim().is_empty() {
                return Ok((FrontMatter::default(), body));
            }

            let fm = serde_yaml::from_str::<FrontMatter>(header)?;
            Ok((fm, body))
        } else {
            // No closing delimiter, the whole file is body
            Ok((FrontMatter::default(), content))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15
author: Jane
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.author, Some("Jane".to_string()));
        assert_eq!(
            fm.date,
            Some(serde_yaml::Value::String("2024-01-15".to_string()))
        );
        assert!(body.starts_with("This is the content."));
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let content = "---\ntitle: T\ntags:\n  - rust\n  - blog\n---\nBody\n";

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.extra.contains_key("tags"));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a body, no header.\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(body, "Just a body, no header.\n");
    }

    #[test]
    fn test_unterminated_header_is_body() {
        let content = "---\ntitle: Half a header\n\nAnd then prose.\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(body.contains("Half a header"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let content = "---\ntitle: \"unterminated\ndate: 2024-01-01\n---\nBody\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_non_mapping_header_is_an_error() {
        let content = "---\njust a scalar line\n---\nBody\n";
        assert!(FrontMatter::parse(content).is_err());
    }
}
