//! mailquote: quote-aware truncation of email reply bodies
//!
//! Long reply chains repeat every earlier message as quoted text. This
//! library keeps the new text of a reply intact and shortens each quoted
//! block to its first few lines, replacing the rest with an elision marker.
//!
//! # Features
//!
//! - Quote detection for `>` prefixes, reply headers (English and Chinese),
//!   forward headers and separator rules
//! - Per-block truncation with a configurable keep-count
//! - Optional hard cap on the output length in characters
//! - TOML and environment-variable configuration
//!
//! # Modules
//!
//! - `strip`: Line classification, block segmentation and truncation
//! - `config`: Configuration file, environment overrides and path helpers
//! - `error`: Validation errors for out-of-range configuration
//!
//! # Example
//!
//! ```
//! use mailquote::QuoteStripper;
//!
//! let body = "Sounds good.\n> earlier line 1\n> earlier line 2\n> earlier line 3";
//! let result = QuoteStripper::new(1).strip(body, 0);
//!
//! assert!(result.text.starts_with("Sounds good.\n> earlier line 1\n"));
//! assert_eq!(result.metadata.unwrap().quote_lines_stripped, 2);
//! ```

pub mod config;
pub mod error;
pub mod strip;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::StripError;
pub use strip::{strip_email_quotes, QuoteStripper, StripMetadata, StripResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
