use regex::Regex;
use std::sync::LazyLock;

use crate::constants::HOSTNAME_PATTERN;

static HOSTNAME_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(HOSTNAME_PATTERN).ok());

/// Check whether `text` has the shape of a domain name.
///
/// A pattern that fails to compile rejects everything.
pub fn is_valid_hostname(text: &str) -> bool {
    HOSTNAME_REGEX
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

/// Keep only the candidates that look like hostnames
pub fn filter_hostnames<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .filter(|text| !text.is_empty() && is_valid_hostname(text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hostnames() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("a-b.c-d.example.co"));
        assert!(is_valid_hostname("ec2-3-4-5-6.compute-1.amazonaws.com"));
        assert!(is_valid_hostname("UPPER.Example.ORG"));
    }

    #[test]
    fn test_invalid_hostnames() {
        assert!(!is_valid_hostname("not a hostname!"));
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("localhost"));
        assert!(!is_valid_hostname("10.0.0.1"));
        assert!(!is_valid_hostname("example.c"));
        assert!(!is_valid_hostname("-bad.example.com"));
        assert!(!is_valid_hostname("bad-.example.com"));
        assert!(!is_valid_hostname("example..com"));
        assert!(!is_valid_hostname("example.com."));
        assert!(!is_valid_hostname("bücher.de"));
    }

    #[test]
    fn test_filter_hostnames() {
        let candidates = vec![
            "example.com".to_string(),
            "not a hostname!".to_string(),
            String::new(),
            "mail.example.org".to_string(),
        ];
        assert_eq!(
            filter_hostnames(candidates),
            vec!["example.com".to_string(), "mail.example.org".to_string()]
        );
    }
}
