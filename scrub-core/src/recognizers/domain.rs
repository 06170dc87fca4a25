//! Internal domain recognizer.
//!
//! Only URLs are matched: `http(s)://<domain>` optionally followed by a path. Bare domain
//! mentions, email addresses and file paths that contain the domain are left alone.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::Result;
use crate::recognizers::literal::usable_terms;
use crate::recognizers::pattern::{Pattern, PatternRecognizer};

pub const INTERNAL_DOMAIN: &str = "INTERNAL_DOMAIN";
pub const INTERNAL_DOMAIN_SCORE: f64 = 0.9;

/// `https?://<escaped domain>\b(?:/\S*)?`
///
/// The `\b` after the domain stops `example.com` from matching the front of
/// `example.community`.
pub fn internal_url_regex(domain: &str) -> String {
    format!(r"https?://{}\b(?:/\S*)?", regex::escape(domain))
}

pub fn internal_domain_recognizer<S: AsRef<str>>(domains: &[S]) -> Result<PatternRecognizer> {
    let patterns = usable_terms(domains)
        .into_iter()
        .enumerate()
        .map(|(i, domain)| {
            Pattern::new(
                format!("internal_url_{}", i),
                internal_url_regex(domain),
                INTERNAL_DOMAIN_SCORE,
            )
        })
        .collect();
    PatternRecognizer::from_escaped_literals("internal_domain", INTERNAL_DOMAIN, patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::Recognizer;

    fn matches(text: &str) -> Vec<String> {
        let r = internal_domain_recognizer(&["internal.example.io"]).unwrap();
        r.scan(text)
            .into_iter()
            .map(|s| text[s.start..s.end].to_string())
            .collect()
    }

    #[test]
    fn test_matches_url_with_path() {
        assert_eq!(
            matches("see https://internal.example.io/path for details"),
            vec!["https://internal.example.io/path"]
        );
    }

    #[test]
    fn test_matches_plain_http_without_path() {
        assert_eq!(matches("http://internal.example.io"), vec!["http://internal.example.io"]);
        assert_eq!(
            matches("HTTPS://Internal.Example.IO/a?b=c#d"),
            vec!["HTTPS://Internal.Example.IO/a?b=c#d"]
        );
    }

    #[test]
    fn test_ignores_email_addresses() {
        assert!(matches("mail user@internal.example.io today").is_empty());
    }

    #[test]
    fn test_ignores_bare_domain_and_paths() {
        assert!(matches("host internal.example.io is down").is_empty());
        assert!(matches("/Users/me/internal.example.io/notes.txt").is_empty());
    }

    #[test]
    fn test_dot_is_escaped() {
        assert!(matches("https://internalXexample.io/").is_empty());
    }

    #[test]
    fn test_does_not_match_longer_host() {
        let r = internal_domain_recognizer(&["example.com"]).unwrap();
        assert!(r.scan("https://example.community/").is_empty());
        assert_eq!(r.scan("https://example.com.").len(), 1);
    }

    #[test]
    fn test_path_stops_at_whitespace() {
        let text = "open https://internal.example.io/a/b and then";
        let r = internal_domain_recognizer(&["internal.example.io"]).unwrap();
        let spans = r.scan(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "https://internal.example.io/a/b");
        assert_eq!(spans[0].entity_type, INTERNAL_DOMAIN);
        assert_eq!(spans[0].score, INTERNAL_DOMAIN_SCORE);
    }
}
