//! Configuration management for `scrub-core`.
//!
//! The configuration is a YAML document with a single `corporate` section holding four
//! term lists. Every part of it is optional: a missing file, an empty document, a missing
//! section or a `null` list all mean "no terms", which is a valid configuration (the
//! built-in UK phone recognizer still runs).
//!
//! Locating the file on disk is the caller's concern; this module only reads, parses and
//! writes documents at paths it is given.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::errors::{Result, ScrubError};
use crate::recognizers::literal::usable_terms;

/// The four term lists that drive the configurable recognizers.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Company and organization names, redacted as `CORPORATE_NAME`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_names: Vec<String>,
    /// Internal domains, redacted as `INTERNAL_DOMAIN` when they appear in a URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: Vec<String>,
    /// Project and product names, redacted as `PROJECT_NAME`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_names: Vec<String>,
    /// Arbitrary terms, redacted as `DENY_LIST`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub deny_list: Vec<String>,
}

impl RecognizerConfig {
    /// True when no list holds a usable (non-blank) term.
    pub fn is_empty(&self) -> bool {
        self.total_terms() == 0
    }

    /// Number of usable terms across all four lists.
    pub fn total_terms(&self) -> usize {
        [&self.company_names, &self.domains, &self.project_names, &self.deny_list]
            .iter()
            .map(|list| usable_terms(list.as_slice()).len())
            .sum()
    }
}

/// Top-level configuration document.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ScrubConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub corporate: RecognizerConfig,
}

/// Treats an explicit YAML `null` (e.g. `deny_list:` with nothing after it) like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ScrubConfig {
    /// Parses a configuration document. Blank input yields the empty configuration.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::parse(text, "<inline>")
    }

    fn parse(text: &str, origin: &str) -> Result<Self> {
        if text.trim().is_empty() {
            debug!("Configuration '{}' is empty; using no terms.", origin);
            return Ok(Self::default());
        }
        let config: Option<ScrubConfig> = serde_yml::from_str(text)
            .map_err(|e| ScrubError::ConfigParseError(origin.to_string(), e.to_string()))?;
        Ok(config.unwrap_or_default())
    }

    /// Loads a configuration document from `path`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let config = Self::parse(&text, &path.display().to_string())?;
        info!(
            "Loaded {} term(s) from {}.",
            config.corporate.total_terms(),
            path.display()
        );
        Ok(config)
    }

    /// Like [`ScrubConfig::load_from_file`], but a missing file yields the empty configuration.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No configuration at {}; using no terms.", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// The sample configuration written by `scrub --init-config`.
    pub fn example() -> Self {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            corporate: RecognizerConfig {
                company_names: to_vec(&["Example Corp", "Example Inc"]),
                domains: to_vec(&["example.com", "internal.example.io"]),
                project_names: to_vec(&["Project Phoenix", "Codename Titan"]),
                deny_list: to_vec(&["confidential-system-name", "internal-tool-v2"]),
            },
        }
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yml::to_string(self)
            .map_err(|e| ScrubError::ConfigParseError("<serialize>".to_string(), e.to_string()))
    }

    /// Writes this configuration to `path`, creating parent directories as needed.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_yaml_string()?)?;
        info!("Wrote configuration to {}.", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let yaml = r#"
corporate:
  company_names: ["Acme Corp"]
  domains: ["internal.acme.io"]
  project_names: ["Project Phoenix"]
  deny_list: ["secret-thing"]
"#;
        let config = ScrubConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.corporate.company_names, vec!["Acme Corp"]);
        assert_eq!(config.corporate.domains, vec!["internal.acme.io"]);
        assert_eq!(config.corporate.project_names, vec!["Project Phoenix"]);
        assert_eq!(config.corporate.deny_list, vec!["secret-thing"]);
        assert_eq!(config.corporate.total_terms(), 4);
    }

    #[test]
    fn test_missing_and_null_lists_are_empty() {
        let yaml = "corporate:\n  company_names:\n  deny_list: [\"x\"]\n";
        let config = ScrubConfig::from_yaml_str(yaml).unwrap();
        assert!(config.corporate.company_names.is_empty());
        assert!(config.corporate.domains.is_empty());
        assert_eq!(config.corporate.deny_list, vec!["x"]);
    }

    #[test]
    fn test_blank_or_sectionless_documents_are_empty() {
        assert_eq!(ScrubConfig::from_yaml_str("").unwrap(), ScrubConfig::default());
        assert_eq!(ScrubConfig::from_yaml_str("  \n").unwrap(), ScrubConfig::default());
        assert_eq!(ScrubConfig::from_yaml_str("corporate:\n").unwrap(), ScrubConfig::default());
        assert_eq!(ScrubConfig::from_yaml_str("other: 1\n").unwrap(), ScrubConfig::default());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = ScrubConfig::from_yaml_str("corporate: [unclosed").unwrap_err();
        assert!(matches!(err, ScrubError::ConfigParseError(_, _)));
    }

    #[test]
    fn test_blank_terms_do_not_count() {
        let config = RecognizerConfig {
            company_names: vec!["".into(), "  ".into()],
            ..Default::default()
        };
        assert!(config.is_empty());
    }

    #[test]
    fn test_example_round_trips_through_yaml() {
        let example = ScrubConfig::example();
        let yaml = example.to_yaml_string().unwrap();
        assert!(yaml.starts_with("corporate:"));
        assert_eq!(ScrubConfig::from_yaml_str(&yaml).unwrap(), example);
    }
}
