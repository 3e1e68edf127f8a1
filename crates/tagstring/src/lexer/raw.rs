//! Raw-mode results used by live, keystroke-driven callers.

use std::ops::Range;

use super::automaton::Lexeme;

/// What followed a tag in the source string.
///
/// With the `serde` feature a closed remainder serialises as a string and
/// [`Remainder::Incomplete`] as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Remainder<'a> {
    /// The tag was closed by a delimiter; holds the input after it.
    Closed(&'a str),
    /// The input ended before the tag was closed; the user may still be
    /// typing it.
    Incomplete,
}

impl<'a> Remainder<'a> {
    /// Whether the tag is still being typed.
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete)
    }

    /// Return the remaining input, if the tag was closed.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Closed(rest) => Some(*rest),
            Self::Incomplete => None,
        }
    }
}

/// A tag parsed in raw mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RawTag<'a> {
    /// Unescaped tag text.
    pub name: String,
    /// Input following the delimiter that closed this tag.
    pub remainder: Remainder<'a>,
    /// Source bytes of the tag's segment, excluding its closing delimiter.
    pub span: Range<usize>,
}

/// Tags in encounter order, neither sorted nor deduplicated.
///
/// # Examples
///
/// ```
/// use tagstring::{Remainder, parse_raw};
///
/// let raw = parse_raw("chris,adam,brian", true);
/// assert_eq!(raw.names(), vec!["chris", "adam", "brian"]);
/// assert_eq!(
///     raw.remainders(),
///     vec![
///         Remainder::Closed("adam,brian"),
///         Remainder::Closed("brian"),
///         Remainder::Incomplete,
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct RawTags<'a> {
    entries: Vec<RawTag<'a>>,
}

impl<'a> RawTags<'a> {
    pub(crate) fn from_lexemes(input: &'a str, lexemes: Vec<Lexeme>) -> Self {
        let entries = lexemes
            .into_iter()
            .map(|lexeme| {
                let remainder = if lexeme.closed {
                    Remainder::Closed(input.get(lexeme.span.end + 1..).unwrap_or_default())
                } else {
                    Remainder::Incomplete
                };
                RawTag {
                    name: lexeme.name,
                    remainder,
                    span: lexeme.span,
                }
            })
            .collect();
        Self { entries }
    }

    /// Number of tags parsed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tags were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the parsed tags.
    pub fn iter(&self) -> std::slice::Iter<'_, RawTag<'a>> {
        self.entries.iter()
    }

    /// The last tag parsed, typically the one under the caret.
    #[must_use]
    pub fn last(&self) -> Option<&RawTag<'a>> {
        self.entries.last()
    }

    /// Tag names in encounter order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|tag| tag.name.as_str()).collect()
    }

    /// Remainders, index-aligned with [`names`](Self::names).
    #[must_use]
    pub fn remainders(&self) -> Vec<Remainder<'a>> {
        self.entries.iter().map(|tag| tag.remainder).collect()
    }

    /// Split into index-aligned tag and remainder sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<Remainder<'a>>) {
        self.entries
            .into_iter()
            .map(|tag| (tag.name, tag.remainder))
            .unzip()
    }

    /// Consume the result, yielding the individual tags.
    #[must_use]
    pub fn into_entries(self) -> Vec<RawTag<'a>> {
        self.entries
    }
}

impl<'a> IntoIterator for RawTags<'a> {
    type Item = RawTag<'a>;
    type IntoIter = std::vec::IntoIter<RawTag<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s RawTags<'a> {
    type Item = &'s RawTag<'a>;
    type IntoIter = std::slice::Iter<'s, RawTag<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
