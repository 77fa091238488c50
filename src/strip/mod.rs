//! Quote stripping engine for mailquote
//!
//! Removes redundant quoted content from email replies while preserving:
//! - New content (non-quoted text), untouched
//! - The first N lines of every quote block, for context
//!
//! Oversized quote blocks are cut after N lines and followed by an elision
//! marker stating how many lines were dropped. An optional hard cap is then
//! applied to the whole result.

pub mod patterns;
pub mod segment;

use serde::{Deserialize, Serialize};

use crate::config::app_config::keep_lines_from_env;
use crate::error::StripError;

pub use patterns::{classify_line, is_quote_line, QuoteKind};
pub use segment::{split_blocks, Block, BlockKind};

/// Default number of lines kept per quote block
pub const DEFAULT_KEEP_QUOTE_LINES: usize = 10;

/// Elision marker inserted after a truncated quote block
pub fn elision_marker(omitted: usize) -> String {
    format!("[... {} 行引用内容已省略 ...]", omitted)
}

/// Statistics about a stripping run
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripMetadata {
    /// Characters in the original text
    pub original_length: usize,
    /// Characters in the returned text
    pub stripped_length: usize,
    /// Quote lines removed across all blocks
    pub quote_lines_stripped: usize,
    /// Quote lines retained across all blocks
    pub quote_lines_kept: usize,
    /// Whether the hard length cap cut the result
    pub hard_truncated: bool,
}

impl StripMetadata {
    /// Size reduction as a percentage of the original length
    pub fn reduction_percent(&self) -> f64 {
        if self.original_length == 0 {
            0.0
        } else {
            (1.0 - self.stripped_length as f64 / self.original_length as f64) * 100.0
        }
    }
}

/// Stripped text plus statistics
///
/// `metadata` is `None` only for empty input, which is returned untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripResult {
    pub text: String,
    pub metadata: Option<StripMetadata>,
}

/// Quote stripper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteStripper {
    keep_quote_lines: usize,
}

impl Default for QuoteStripper {
    fn default() -> Self {
        Self::new(DEFAULT_KEEP_QUOTE_LINES)
    }
}

impl QuoteStripper {
    /// Create a stripper keeping `keep_quote_lines` lines of each quote block
    ///
    /// Zero is accepted and reduces every quote block to its marker.
    pub fn new(keep_quote_lines: usize) -> Self {
        Self { keep_quote_lines }
    }

    pub fn keep_quote_lines(&self) -> usize {
        self.keep_quote_lines
    }

    /// Strip redundant quotes from email text
    ///
    /// `max_length` of 0 means unlimited; any other value caps the result at
    /// that many characters.
    pub fn strip(&self, text: &str, max_length: usize) -> StripResult {
        if text.is_empty() {
            return StripResult {
                text: String::new(),
                metadata: None,
            };
        }

        let original_length = text.chars().count();
        let blocks = split_blocks(text);

        let mut parts: Vec<String> = Vec::with_capacity(blocks.len() + 1);
        let mut quote_lines_stripped = 0;
        let mut quote_lines_kept = 0;

        for block in &blocks {
            if !block.is_quote() || block.line_count() <= self.keep_quote_lines {
                if block.is_quote() {
                    quote_lines_kept += block.line_count();
                }
                parts.push(block.text());
                continue;
            }

            let omitted = block.line_count() - self.keep_quote_lines;
            parts.push(block.lines[..self.keep_quote_lines].join("\n"));
            parts.push(format!("\n{}\n", elision_marker(omitted)));

            quote_lines_stripped += omitted;
            quote_lines_kept += self.keep_quote_lines;
        }

        let mut result = parts.join("\n");

        let hard_truncated = max_length > 0 && truncate_chars(&mut result, max_length);

        tracing::debug!(
            blocks = blocks.len(),
            quote_lines_kept,
            quote_lines_stripped,
            hard_truncated,
            "stripped email quotes"
        );

        let stripped_length = result.chars().count();
        StripResult {
            text: result,
            metadata: Some(StripMetadata {
                original_length,
                stripped_length,
                quote_lines_stripped,
                quote_lines_kept,
                hard_truncated,
            }),
        }
    }
}

/// Cut `text` to its first `max_chars` characters, returning whether it was cut
fn truncate_chars(text: &mut String, max_chars: usize) -> bool {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            text.truncate(byte_idx);
            true
        }
        None => false,
    }
}

/// Convenience function to strip quotes from email text
///
/// When `keep_quote_lines` is `None` the count comes from the
/// `MAIL_KEEP_QUOTE_LINES` environment variable, defaulting to 10.
pub fn strip_email_quotes(
    text: &str,
    max_length: usize,
    keep_quote_lines: Option<usize>,
) -> Result<StripResult, StripError> {
    let keep = match keep_quote_lines {
        Some(n) => n,
        None => keep_lines_from_env()?,
    };

    Ok(QuoteStripper::new(keep).strip(text, max_length))
}
