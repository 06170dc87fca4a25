// scrub-core/src/recognizers/mod.rs
//! Concrete recognizers.
//!
//! `pattern` holds the generic regex-driven `PatternRecognizer`; the other modules only
//! decide which patterns to build from configuration (or, for UK phone numbers, from
//! built-in definitions).
//!
//! License: MIT OR APACHE 2.0

pub mod domain;
pub mod literal;
pub mod pattern;
pub mod uk_phone;

pub use domain::{internal_domain_recognizer, INTERNAL_DOMAIN};
pub use literal::{
    corporate_name_recognizer, deny_list_recognizer, literal_term_recognizer,
    project_name_recognizer, CORPORATE_NAME, DENY_LIST, PROJECT_NAME,
};
pub use pattern::{CompiledPattern, Pattern, PatternRecognizer, MAX_PATTERN_LENGTH};
pub use uk_phone::{uk_phone_recognizer, UK_PHONE_NUMBER};
