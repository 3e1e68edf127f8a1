//! Error types for the supplementary tag APIs.
//!
//! Parsing itself is total; these errors only arise when a caller asks for
//! a tag-count limit or hands the live adapter a bad caret position.

use std::fmt;
use thiserror::Error;

/// Details of a tag-count limit that was exceeded.
///
/// # Examples
/// ```
/// use tagstring::TagLimitInfo;
/// let info = TagLimitInfo::new(2, 3);
/// assert_eq!(info.to_string(), "this field can only have 2 arguments");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLimitInfo {
    /// Largest number of distinct tags allowed.
    pub max: usize,
    /// Number of distinct tags the input produced.
    pub found: usize,
}

impl TagLimitInfo {
    /// Describe a limit of `max` tags that `found` tags exceeded.
    #[must_use]
    pub fn new(max: usize, found: usize) -> Self {
        Self { max, found }
    }
}

impl fmt::Display for TagLimitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.max == 1 { "argument" } else { "arguments" };
        write!(f, "this field can only have {} {noun}", self.max)
    }
}

/// Errors surfaced by limit-aware parsing and the live-input adapter.
///
/// # Examples
/// ```
/// use tagstring::{TagError, TagLimitInfo};
/// let err = TagError::TooManyTags(TagLimitInfo::new(1, 4));
/// assert_eq!(err.to_string(), "this field can only have 1 argument");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The input held more distinct tags than the configured limit.
    #[error("{0}")]
    TooManyTags(TagLimitInfo),
    /// The caret lies beyond the end of the field value.
    #[error("caret at byte {caret} is past the end of a {len}-byte value")]
    CaretOutOfBounds {
        /// Offending caret offset in bytes.
        caret: usize,
        /// Length of the field value in bytes.
        len: usize,
    },
    /// The caret splits a multi-byte character.
    #[error("caret at byte {caret} does not fall on a character boundary")]
    CaretNotOnCharBoundary {
        /// Offending caret offset in bytes.
        caret: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_singular_limit() {
        let info = TagLimitInfo::new(1, 3);
        assert_eq!(info.to_string(), "this field can only have 1 argument");
    }

    #[test]
    fn formats_plural_limit() {
        let info = TagLimitInfo::new(2, 3);
        assert_eq!(info.to_string(), "this field can only have 2 arguments");
    }

    #[test]
    fn formats_caret_errors() {
        let err = TagError::CaretOutOfBounds { caret: 9, len: 4 };
        assert_eq!(
            err.to_string(),
            "caret at byte 9 is past the end of a 4-byte value"
        );
        let err = TagError::CaretNotOnCharBoundary { caret: 1 };
        assert_eq!(
            err.to_string(),
            "caret at byte 1 does not fall on a character boundary"
        );
    }
}
