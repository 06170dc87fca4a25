//! errors.rs - Custom error types for the scrub-core library.
//!
//! Build-time failures (bad patterns, bad scores, unreadable configuration) are reported
//! through [`ScrubError`]. Scanning itself is total over any text and never fails, so a
//! text with no findings is an empty result rather than an error.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `scrub-core` library.
///
/// New variants may be added as the library grows, hence `#[non_exhaustive]`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompilationError(String, regex::Error),

    #[error("Pattern '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Pattern '{0}': score {1} is outside the range [0, 1]")]
    InvalidScore(String, f64),

    #[error("Failed to build recognizer '{0}':\n{1}")]
    RecognizerBuildError(String, String),

    #[error("Failed to parse configuration '{0}': {1}")]
    ConfigParseError(String, String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = ScrubError> = std::result::Result<T, E>;
