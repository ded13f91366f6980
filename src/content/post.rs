//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post derived from one markdown file.
///
/// Records are rebuilt from disk on every scan; nothing here outlives
/// the file it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    pub date: NaiveDate,

    /// Post author
    pub author: Option<String>,

    /// Raw markdown body, trimmed of surrounding whitespace
    pub content: String,

    /// Clean-text excerpt derived from the body
    pub summary: String,

    /// File base name; unique key within the posts directory
    pub filename: String,
}
