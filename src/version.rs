use crate::error::{ReleaseError, Result};

/// Default segment separator when none is configured.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Compute the next tag name by incrementing the trailing numeric segment.
///
/// The tag name is split on the separator as a literal delimiter (never as a
/// pattern, so separators like `.` need no escaping), the last segment is
/// parsed as a non-negative integer and incremented by exactly 1, and the
/// segments are rejoined in their original order. The incremented value is
/// rendered without padding: `1.0.9` becomes `1.0.10`, not `1.0.09`.
///
/// Only the trailing segment is treated as a counter; this supports common
/// `MAJOR.MINOR.PATCH`-style schemas without asking the caller which segment
/// to bump.
///
/// # Arguments
/// * `tag` - The latest matching tag name
/// * `separator` - Segment delimiter; empty falls back to `.`
///
/// # Returns
/// * `Ok(String)` - The next tag name
/// * `Err(MalformedTag)` - If the tag yields no segments
/// * `Err(NonNumericSegment)` - If the trailing segment is not an integer
///
/// # Example
/// ```
/// # use release_tagger::version::next_tag_name;
/// assert_eq!(next_tag_name("1.0.3", ".").unwrap(), "1.0.4");
/// assert_eq!(next_tag_name("release-7", "-").unwrap(), "release-8");
/// ```
pub fn next_tag_name(tag: &str, separator: &str) -> Result<String> {
    let separator = if separator.is_empty() {
        DEFAULT_SEPARATOR
    } else {
        separator
    };

    if tag.is_empty() {
        return Err(ReleaseError::MalformedTag {
            tag: tag.to_string(),
        });
    }

    let segments: Vec<&str> = tag.split(separator).collect();

    let last = segments.last().ok_or_else(|| ReleaseError::MalformedTag {
        tag: tag.to_string(),
    })?;

    let counter: u64 = last.parse().map_err(|_| ReleaseError::NonNumericSegment {
        tag: tag.to_string(),
        segment: last.to_string(),
    })?;

    let next = counter
        .checked_add(1)
        .ok_or_else(|| ReleaseError::MalformedTag {
            tag: tag.to_string(),
        })?;

    let prefix = &segments[..segments.len() - 1];
    if prefix.is_empty() {
        Ok(next.to_string())
    } else {
        Ok(format!("{}{}{}", prefix.join(separator), separator, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increments_trailing_segment() {
        assert_eq!(next_tag_name("1.0.3", ".").unwrap(), "1.0.4");
        assert_eq!(next_tag_name("2.5.0", ".").unwrap(), "2.5.1");
    }

    #[test]
    fn test_no_width_padding() {
        assert_eq!(next_tag_name("1.0.9", ".").unwrap(), "1.0.10");
        assert_eq!(next_tag_name("1.0.09", ".").unwrap(), "1.0.10");
    }

    #[test]
    fn test_single_segment_tag() {
        assert_eq!(next_tag_name("41", ".").unwrap(), "42");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(next_tag_name("release-1-4", "-").unwrap(), "release-1-5");
        assert_eq!(next_tag_name("1_2_3", "_").unwrap(), "1_2_4");
    }

    #[test]
    fn test_separator_is_literal_not_pattern() {
        // '+' is regex-significant but must be treated literally
        assert_eq!(next_tag_name("1+2", "+").unwrap(), "1+3");
    }

    #[test]
    fn test_empty_separator_defaults_to_dot() {
        assert_eq!(next_tag_name("1.0.3", "").unwrap(), "1.0.4");
    }

    #[test]
    fn test_non_numeric_trailing_segment_fails() {
        let err = next_tag_name("1.0.rc1", ".").unwrap_err();
        match err {
            ReleaseError::NonNumericSegment { tag, segment } => {
                assert_eq!(tag, "1.0.rc1");
                assert_eq!(segment, "rc1");
            }
            other => panic!("expected NonNumericSegment, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_trailing_segment_fails() {
        assert!(matches!(
            next_tag_name("1.0.-3", ".").unwrap_err(),
            ReleaseError::NonNumericSegment { .. }
        ));
    }

    #[test]
    fn test_empty_tag_is_malformed() {
        assert!(matches!(
            next_tag_name("", ".").unwrap_err(),
            ReleaseError::MalformedTag { .. }
        ));
    }

    #[test]
    fn test_trailing_separator_yields_empty_segment() {
        // "1.0." splits to ["1", "0", ""]; the empty segment is non-numeric
        assert!(matches!(
            next_tag_name("1.0.", ".").unwrap_err(),
            ReleaseError::NonNumericSegment { .. }
        ));
    }

    #[test]
    fn test_rejoin_preserves_non_counter_segments() {
        assert_eq!(next_tag_name("v2.beta.7", ".").unwrap(), "v2.beta.8");
    }
}
