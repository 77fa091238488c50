//! Quote marker patterns
//!
//! Recognizes the textual markers mail clients put in front of quoted
//! replies and forwarded messages:
//! - `>` prefixed lines
//! - Reply headers (`On ... wrote:`, `2025年1月1日 ... 写道：`)
//! - Forward headers (`From:`, `Sent:`)
//! - Separator rules (`----- Original Message -----`, `_____`, `=====`)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Category of a quote marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteKind {
    /// `>` prefixed quoted line
    Prefix,
    /// Reply attribution header
    Header,
    /// Forwarded message header field
    Forward,
    /// Horizontal rule separating the original message
    Separator,
}

/// Marker table, checked in order
static QUOTE_PATTERNS: Lazy<Vec<(Regex, QuoteKind)>> = Lazy::new(|| {
    [
        (r"^>+\s", QuoteKind::Prefix),
        (r"^On .+wrote:", QuoteKind::Header),
        (r"^\d{4}年\d{1,2}月\d{1,2}日.+写道：", QuoteKind::Header),
        (r"^From:\s", QuoteKind::Forward),
        (r"^Sent:\s", QuoteKind::Forward),
        (r"^-{5,}\s*Original Message\s*-{5,}", QuoteKind::Separator),
        (r"^_{10,}", QuoteKind::Separator),
        (r"^={10,}", QuoteKind::Separator),
    ]
    .into_iter()
    .map(|(pattern, kind)| (Regex::new(pattern).unwrap(), kind))
    .collect()
});

/// Classify a single line, returning the category of the first matching marker
///
/// Blank lines (empty after trimming) are never quotes.
pub fn classify_line(line: &str) -> Option<QuoteKind> {
    if line.trim().is_empty() {
        return None;
    }

    QUOTE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(line))
        .map(|(_, kind)| *kind)
}

/// Check if a line is part of a quote
pub fn is_quote_line(line: &str) -> bool {
    classify_line(line).is_some()
}
