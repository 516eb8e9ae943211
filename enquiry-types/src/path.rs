use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error type for parsing textual paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePathError {
    /// The path text was empty.
    #[error("empty path")]
    Empty,

    /// A segment was not a plain base-10 index.
    #[error("invalid path segment {segment:?}")]
    InvalidSegment { segment: String },
}

/// A path to a node in an enquiry tree, e.g. `"1.2.3"`.
///
/// A path is a non-empty sequence of zero-based indices. The first segment
/// selects a root question; subsequent segments alternate between a choice
/// option index and an index into that option's nested questions. How a
/// segment is interpreted is up to the node being traversed, not fixed here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionPath {
    segments: Vec<usize>,
}

impl QuestionPath {
    /// Create a path from raw segments. Fails on an empty sequence.
    pub fn new(segments: Vec<usize>) -> Result<Self, ParsePathError> {
        if segments.is_empty() {
            return Err(ParsePathError::Empty);
        }
        Ok(Self { segments })
    }

    /// The single-segment path selecting a root question by index.
    pub fn root(index: usize) -> Self {
        Self {
            segments: vec![index],
        }
    }

    /// Append an index to this path, returning a new path.
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(index);
        Self { segments }
    }

    /// Get the segments of this path.
    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    /// Get the number of segments in this path (at least 1).
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Split into the first segment and the remaining tail.
    pub fn split_first(&self) -> (usize, &[usize]) {
        (self.segments[0], &self.segments[1..])
    }
}

impl FromStr for QuestionPath {
    type Err = ParsePathError;

    /// Parse a dot-separated sequence of base-10 indices.
    ///
    /// Strict by contract: no sign, no whitespace, no empty segments.
    /// `"1.2.3"` parses; `""`, `"1..2"`, `"a.b"` and `"+1"` do not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePathError::Empty);
        }
        let mut segments = Vec::new();
        for token in s.split('.') {
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParsePathError::InvalidSegment {
                    segment: token.to_string(),
                });
            }
            let index = token
                .parse::<usize>()
                .map_err(|_| ParsePathError::InvalidSegment {
                    segment: token.to_string(),
                })?;
            segments.push(index);
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for QuestionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            write!(f, "{first}")?;
        }
        for segment in segments {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let path: QuestionPath = "1.2.3".parse().unwrap();
        assert_eq!(path.segments(), &[1, 2, 3]);
    }

    #[test]
    fn parse_single_segment() {
        let path: QuestionPath = "0".parse().unwrap();
        assert_eq!(path.segments(), &[0]);
        assert_eq!(path.depth(), 1);
    }

    #[test]
    fn empty_path_is_rejected() {
        assert_eq!("".parse::<QuestionPath>(), Err(ParsePathError::Empty));
    }

    #[test]
    fn empty_segment_is_rejected() {
        assert_eq!(
            "1..2".parse::<QuestionPath>(),
            Err(ParsePathError::InvalidSegment {
                segment: String::new()
            })
        );
    }

    #[test]
    fn non_numeric_segment_is_rejected() {
        assert_eq!(
            "a.b".parse::<QuestionPath>(),
            Err(ParsePathError::InvalidSegment {
                segment: "a".to_string()
            })
        );
    }

    #[test]
    fn signed_segment_is_rejected() {
        // usize::from_str would accept a leading '+'; the path format does not.
        assert!("+1".parse::<QuestionPath>().is_err());
        assert!("-1".parse::<QuestionPath>().is_err());
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(" 1".parse::<QuestionPath>().is_err());
        assert!("1 .2".parse::<QuestionPath>().is_err());
    }

    #[test]
    fn no_segments_is_rejected() {
        assert_eq!(QuestionPath::new(Vec::new()), Err(ParsePathError::Empty));
    }

    #[test]
    fn child() {
        let path = QuestionPath::root(0).child(1).child(0);
        assert_eq!(path.segments(), &[0, 1, 0]);
    }

    #[test]
    fn display_round_trip() {
        let path: QuestionPath = "0.1.0".parse().unwrap();
        assert_eq!(path.to_string(), "0.1.0");
    }

    #[test]
    fn split_first() {
        let path: QuestionPath = "2.0.1".parse().unwrap();
        let (first, rest) = path.split_first();
        assert_eq!(first, 2);
        assert_eq!(rest, &[0, 1]);
    }
}
