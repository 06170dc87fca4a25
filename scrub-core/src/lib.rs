// scrub-core/src/lib.rs
//! # Scrub Core Library
//!
//! `scrub-core` provides the platform-independent detection and redaction engine behind
//! the `scrub` command. It finds sensitive substrings (UK phone numbers, company and
//! project names, deny-listed terms, internal URLs) and replaces each with a type label
//! such as `<UK_PHONE_NUMBER>`.
//!
//! The library does no I/O beyond reading and writing configuration files at paths it is
//! handed. Clipboards, stdin and default config locations belong to the front end.
//!
//! ## Modules
//!
//! * `config`: The YAML configuration document and the four term lists.
//! * `recognizer`: The `Recognizer` trait every detector implements.
//! * `recognizers`: The regex-driven `PatternRecognizer` and the concrete recognizers.
//! * `registry`: Builds and runs the active recognizer set.
//! * `resolver`: Merges overlapping candidates into a disjoint, ordered set.
//! * `anonymizer`: Replaces resolved spans with labels.
//! * `scrubber`: The full pipeline behind one type.
//! * `span`: Span records and PII-safe debug logging.
//! * `errors`: The `ScrubError` type.
//!
//! ## Pipeline
//!
//! `Registry::scan` → `resolve` → `apply`. Analysis (dry-run) stops after `resolve`.
//!
//! ## Usage Example
//!
//! ```rust
//! use scrub_core::{RecognizerConfig, TextScrubber};
//!
//! fn main() -> Result<(), scrub_core::ScrubError> {
//!     let config = RecognizerConfig {
//!         company_names: vec!["Acme Corp".to_string()],
//!         project_names: vec!["Project Phoenix".to_string()],
//!         ..Default::default()
//!     };
//!     let scrubber = TextScrubber::new(&config)?;
//!
//!     let input = "Call 07911 123456 about Project Phoenix.";
//!     let result = scrubber.scrub(input);
//!     assert_eq!(result.text, "Call <UK_PHONE_NUMBER> about <PROJECT_NAME>.");
//!
//!     for span in scrubber.analyze(input) {
//!         println!("{} at {}..{} (score {:.2})", span.entity_type, span.start, span.end, span.score);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Building a registry compiles every pattern and fails with [`ScrubError`] on bad input.
//! Scanning never fails; a text without findings yields an empty span list.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod anonymizer;
pub mod config;
pub mod errors;
pub mod recognizer;
pub mod recognizers;
pub mod registry;
pub mod resolver;
pub mod scrubber;
pub mod span;

/// Re-exports the configuration model.
pub use config::{RecognizerConfig, ScrubConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ScrubError;

/// Re-exports the recognizer seam and the generic pattern machinery.
pub use recognizer::Recognizer;
pub use recognizers::{
    Pattern, PatternRecognizer, CORPORATE_NAME, DENY_LIST, INTERNAL_DOMAIN, MAX_PATTERN_LENGTH,
    PROJECT_NAME, UK_PHONE_NUMBER,
};

/// Re-exports the pipeline stages.
pub use anonymizer::{apply, RedactionResult};
pub use registry::Registry;
pub use resolver::resolve;
pub use scrubber::{scrub_text, TextScrubber};
pub use span::{format_label, redact_sensitive, CandidateSpan, ResolvedSpan, Span};
