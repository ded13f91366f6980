//! Markdown stripping and summary derivation
//!
//! Summaries are plain text for listings and search engines, produced
//! by peeling markdown syntax off the raw body with a fixed sequence
//! of regex passes. Pure text transforms, no I/O.

use lazy_static::lazy_static;
use regex::Regex;

/// Characters of stripped text kept in a summary.
const SUMMARY_LEN: usize = 126;

/// Marker appended to every summary, even when nothing was cut.
const ELLIPSIS: char = '…';

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"(?m)^#+\s+").unwrap();
    static ref BOLD_STARS: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref BOLD_UNDERSCORES: Regex = Regex::new(r"__(.*?)__").unwrap();
    static ref EMPHASIS_STAR: Regex = Regex::new(r"\*(.*?)\*").unwrap();
    static ref EMPHASIS_UNDERSCORE: Regex = Regex::new(r"_(.*?)_").unwrap();
    static ref IMAGE: Regex = Regex::new(r"!\[(.*?)\]\(.*?\)").unwrap();
    static ref LINK: Regex = Regex::new(r"\[(.*?)\]\(.*?\)").unwrap();
    static ref CODE_BLOCK: Regex = Regex::new(r"(?s)`{3}.*?`{3}").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`(.*?)`").unwrap();
    static ref BLOCKQUOTE: Regex = Regex::new(r"(?m)^>\s+").unwrap();
}

/// Remove common markdown syntax, keeping the prose.
///
/// The pass order is load-bearing: doubled emphasis markers must go
/// before single ones, images before links (a link pattern would also
/// match the tail of an image), and fenced code blocks before inline
/// code. Fenced blocks are dropped wholesale, contents included;
/// everything else keeps its inner text.
pub fn strip_markdown(text: &str) -> String {
    let text = HEADING.replace_all(text, "");
    let text = BOLD_STARS.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORES.replace_all(&text, "$1");
    let text = EMPHASIS_STAR.replace_all(&text, "$1");
    let text = EMPHASIS_UNDERSCORE.replace_all(&text, "$1");
    let text = IMAGE.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let text = CODE_BLOCK.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = BLOCKQUOTE.replace_all(&text, "");
    text.trim().to_string()
}

/// Derive a listing summary from a raw markdown body.
///
/// Takes the first 126 characters of the stripped text and appends the
/// ellipsis marker unconditionally, word boundaries and short bodies
/// notwithstanding.
pub fn summarize(markdown: &str) -> String {
    let text = strip_markdown(markdown);
    let mut summary: String = text.chars().take(SUMMARY_LEN).collect();
    summary.push(ELLIPSIS);
    summary
}
