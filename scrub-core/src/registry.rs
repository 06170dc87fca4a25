// scrub-core/src/registry.rs
//! The active recognizer set.
//!
//! A `Registry` is built once per configuration and then shared, read-only, by every scan.
//! Building is where all pattern compilation happens, so a bad configuration fails here
//! rather than halfway through a scan.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use crate::config::RecognizerConfig;
use crate::errors::Result;
use crate::recognizer::Recognizer;
use crate::recognizers::literal::usable_terms;
use crate::recognizers::{
    corporate_name_recognizer, deny_list_recognizer, internal_domain_recognizer,
    project_name_recognizer, uk_phone_recognizer,
};
use crate::span::CandidateSpan;

#[derive(Default)]
pub struct Registry {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("recognizers", &self.recognizer_names())
            .finish()
    }
}

impl Registry {
    /// An empty registry. Most callers want [`Registry::build`] instead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the recognizer set for `config`.
    ///
    /// Registration order: corporate names, internal domains, project names, deny list,
    /// then UK phone numbers. The four configurable recognizers are skipped when their list
    /// has no usable terms; the UK phone recognizer is always present.
    pub fn build(config: &RecognizerConfig) -> Result<Self> {
        let mut registry = Self::new();

        if !usable_terms(&config.company_names).is_empty() {
            registry.register(Box::new(corporate_name_recognizer(&config.company_names)?));
        }
        if !usable_terms(&config.domains).is_empty() {
            registry.register(Box::new(internal_domain_recognizer(&config.domains)?));
        }
        if !usable_terms(&config.project_names).is_empty() {
            registry.register(Box::new(project_name_recognizer(&config.project_names)?));
        }
        if !usable_terms(&config.deny_list).is_empty() {
            registry.register(Box::new(deny_list_recognizer(&config.deny_list)?));
        }
        registry.register(Box::new(uk_phone_recognizer()?));

        info!(
            "Registry built with {} recognizer(s): {}",
            registry.len(),
            registry.recognizer_names().join(", ")
        );
        Ok(registry)
    }

    /// Appends a recognizer; it runs after every recognizer registered before it.
    pub fn register(&mut self, recognizer: Box<dyn Recognizer>) {
        debug!("Registering recognizer '{}'.", recognizer.name());
        self.recognizers.push(recognizer);
    }

    /// Runs every recognizer over `text`, concatenating candidates in registration order.
    /// No deduplication happens here.
    pub fn scan(&self, text: &str) -> Vec<CandidateSpan> {
        let mut candidates = Vec::new();
        for recognizer in &self.recognizers {
            let found = recognizer.scan(text);
            debug!(
                "Recognizer '{}' produced {} candidate(s).",
                recognizer.name(),
                found.len()
            );
            candidates.extend(found);
        }
        candidates
    }

    pub fn recognizer_names(&self) -> Vec<&str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }
}
