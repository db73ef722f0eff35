use regex::Regex;
use std::collections::BTreeSet;

/// The candidate-email pattern: local part of letters/digits/`._%+-`, an
/// `@`, domain labels of letters/digits/`.-`, and a TLD of two or more
/// letters. Purely syntactic; case is preserved and nothing beyond the
/// match is validated.
const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Compiled email matcher shared by all strategies
///
/// Extraction is pure: any text in, a set of distinct matches out, with no
/// failure modes. A `BTreeSet` keeps iteration order deterministic so
/// joined output is stable across runs.
#[derive(Debug, Clone)]
pub struct EmailPattern {
    matcher: Regex,
    anchored: Regex,
}

impl EmailPattern {
    /// Compiles the email pattern
    pub fn new() -> Self {
        let matcher = Regex::new(EMAIL_PATTERN).unwrap();
        let anchored = Regex::new(&format!("^{}$", EMAIL_PATTERN)).unwrap();
        Self { matcher, anchored }
    }

    /// Returns the set of distinct email-shaped substrings in `text`
    ///
    /// Empty or non-matching text yields an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailsift::extract::EmailPattern;
    ///
    /// let pattern = EmailPattern::new();
    /// let found = pattern.extract("Contact a@example.com or b@example.com.");
    /// assert_eq!(found.len(), 2);
    /// ```
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        self.matcher
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Returns true if `candidate` is exactly one email-shaped string
    ///
    /// Used by the mailto strategy, which accepts a single address per
    /// anchor rather than re-running the general matcher over free text.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.anchored.is_match(candidate)
    }
}

impl Default for EmailPattern {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple() {
        let pattern = EmailPattern::new();
        let found = pattern.extract("write to info@example.com today");
        assert_eq!(found.len(), 1);
        assert!(found.contains("info@example.com"));
    }

    #[test]
    fn test_extract_deduplicates() {
        let pattern = EmailPattern::new();
        let found = pattern.extract("a@x.com a@x.com a@x.com");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_extract_preserves_case() {
        let pattern = EmailPattern::new();
        let found = pattern.extract("Admin@Example.COM and admin@example.com");
        // Look-alikes differing only by case are distinct members
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_extract_empty_and_garbage() {
        let pattern = EmailPattern::new();
        assert!(pattern.extract("").is_empty());
        assert!(pattern.extract("no emails here @ all").is_empty());
        assert!(pattern.extract("missing@tld").is_empty());
    }

    #[test]
    fn test_extract_special_local_part() {
        let pattern = EmailPattern::new();
        let found = pattern.extract("first.last+tag%x-y_z@mail.example.co.uk");
        assert!(found.contains("first.last+tag%x-y_z@mail.example.co.uk"));
    }

    #[test]
    fn test_extract_every_member_matches_pattern() {
        let pattern = EmailPattern::new();
        let found = pattern.extract("a@x.com, noise, b@y.org; c@@bad");
        for email in &found {
            assert!(pattern.is_match(email), "{} should match anchored", email);
        }
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_anchored_match_rejects_embedded() {
        let pattern = EmailPattern::new();
        assert!(pattern.is_match("a@example.com"));
        assert!(!pattern.is_match("mailto:a@example.com"));
        assert!(!pattern.is_match("a@example.com?subject=hi"));
        assert!(!pattern.is_match(""));
    }
}
