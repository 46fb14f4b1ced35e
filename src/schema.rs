use regex::Regex;

use crate::error::{ReleaseError, Result};

/// Default schema when none is configured: every tag is a candidate.
const MATCH_ALL: &str = ".*";

/// Filters tag names against the configured naming schema.
///
/// The schema is a regular expression matched against the whole tag name,
/// not searched as a substring. An empty or unset schema is replaced by a
/// match-all default.
#[derive(Debug, Clone)]
pub struct TagSchemaMatcher {
    pattern: String,
    regex: Regex,
}

impl TagSchemaMatcher {
    /// Compile a matcher from the configured schema pattern.
    ///
    /// An invalid pattern is a configuration error reported here, at
    /// resolution time, never silently ignored.
    pub fn new(pattern: &str) -> Result<Self> {
        let effective = if pattern.is_empty() { MATCH_ALL } else { pattern };

        // Wrap in a non-capturing group so anchors apply to alternations too.
        let anchored = format!("^(?:{})$", effective);
        let regex =
            Regex::new(&anchored).map_err(|e| ReleaseError::InvalidSchemaPattern {
                pattern: effective.to_string(),
                reason: e.to_string(),
            })?;

        Ok(TagSchemaMatcher {
            pattern: effective.to_string(),
            regex,
        })
    }

    /// The effective schema pattern (after defaulting).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether a single tag name fully matches the schema.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Return the subsequence of names that fully match the schema,
    /// preserving their original relative order.
    ///
    /// An empty input yields an empty result; the caller treats that as
    /// "no candidate found", not as an error.
    pub fn filter<'a, I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .filter(|name| self.matches(name))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_string_match_not_substring() {
        let matcher = TagSchemaMatcher::new(r"1\.0\.\d+").unwrap();
        assert!(matcher.matches("1.0.3"));
        assert!(!matcher.matches("v1.0.3"));
        assert!(!matcher.matches("1.0.3-rc1"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let matcher = TagSchemaMatcher::new(r"1\.0\.\d+").unwrap();
        let names = vec!["v1", "1.0.0", "1.0.1", "release-x"];
        let filtered = matcher.filter(names);
        assert_eq!(filtered, vec!["1.0.0", "1.0.1"]);
    }

    #[test]
    fn test_filter_is_subsequence() {
        let matcher = TagSchemaMatcher::new(r"\d+\.\d+").unwrap();
        let names = vec!["2.1", "x", "1.0", "0.9", "y"];
        let filtered = matcher.filter(names.clone());
        // every returned element matches and appears in input order
        let mut cursor = names.iter();
        for name in &filtered {
            assert!(matcher.matches(name));
            assert!(cursor.any(|n| n == name));
        }
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let matcher = TagSchemaMatcher::new(r"1\.0\.\d+").unwrap();
        let filtered = matcher.filter(std::iter::empty());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_pattern_matches_all() {
        let matcher = TagSchemaMatcher::new("").unwrap();
        assert_eq!(matcher.pattern(), ".*");
        let names = vec!["v1", "anything", "1.0.0"];
        assert_eq!(matcher.filter(names.clone()).len(), names.len());
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let err = TagSchemaMatcher::new("(unclosed").unwrap_err();
        match err {
            ReleaseError::InvalidSchemaPattern { pattern, .. } => {
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("expected InvalidSchemaPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_alternation_is_anchored_on_both_sides() {
        let matcher = TagSchemaMatcher::new("a|b").unwrap();
        assert!(matcher.matches("a"));
        assert!(matcher.matches("b"));
        assert!(!matcher.matches("ab"));
        assert!(!matcher.matches("xa"));
    }
}
