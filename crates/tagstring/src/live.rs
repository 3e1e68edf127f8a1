//! Live-input helpers for fields edited one keystroke at a time.
//!
//! Everything here works on the raw parse of the whole field value. The
//! value is never sorted or deduplicated while being edited; use
//! [`normalise`](crate::normalise) on commit for that.

use std::ops::Range;

use crate::errors::TagError;
use crate::lexer::{QUOTE, RawTag, Remainder, parse_raw};
use crate::render::render_tag;

/// The tag under the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTag<'a> {
    /// Unescaped tag text, used to match suggestions.
    pub name: String,
    /// Source text of the tag without surrounding spaces.
    pub text: &'a str,
    /// Byte range of [`text`](Self::text) within the field value.
    pub span: Range<usize>,
    /// Whether a delimiter already closes the tag.
    pub closed: bool,
}

/// A field value after an edit, with the caret to restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The new field value.
    pub value: String,
    /// Caret position in bytes, directly after the inserted tag.
    pub caret: usize,
}

/// Find the tag whose segment contains `caret`.
///
/// The caret belongs to a tag when it lies anywhere in the tag's segment,
/// including directly after its last character. Returns `None` when the
/// caret sits in an empty segment.
///
/// # Errors
/// Returns [`TagError::CaretOutOfBounds`] or
/// [`TagError::CaretNotOnCharBoundary`] when `caret` is not a valid
/// position in `value`.
///
/// # Examples
///
/// ```
/// use tagstring::active_tag;
///
/// # fn main() -> Result<(), tagstring::TagError> {
/// let active = active_tag("adam, bri", 9, true)?;
/// assert_eq!(active.map(|tag| tag.name), Some("bri".to_string()));
/// # Ok(())
/// # }
/// ```
pub fn active_tag(
    value: &str,
    caret: usize,
    space_delimiter: bool,
) -> Result<Option<ActiveTag<'_>>, TagError> {
    check_caret(value, caret)?;
    let raw = parse_raw(value, space_delimiter);
    let found = raw
        .iter()
        .find(|tag| tag.span.start <= caret && caret <= tag.span.end)
        .map(|tag| {
            let span = text_span(value, tag);
            ActiveTag {
                name: tag.name.clone(),
                text: value.get(span.clone()).unwrap_or_default(),
                span,
                closed: !tag.remainder.is_incomplete(),
            }
        });
    Ok(found)
}

/// Replace the tag under the caret with an accepted suggestion.
///
/// Only the active tag's text is replaced; every other tag and separator is
/// left as typed. The suggestion is escaped and quoted as the renderer
/// would. With no tag under the caret the suggestion is inserted at the
/// caret.
///
/// # Errors
/// Returns a caret error under the same conditions as [`active_tag`].
///
/// # Examples
///
/// ```
/// use tagstring::accept_suggestion;
///
/// # fn main() -> Result<(), tagstring::TagError> {
/// let edit = accept_suggestion("chris, adam, bri", 14, "brian one", true)?;
/// assert_eq!(edit.value, "chris, adam, \"brian one\"");
/// assert_eq!(edit.caret, edit.value.len());
/// # Ok(())
/// # }
/// ```
pub fn accept_suggestion(
    value: &str,
    caret: usize,
    suggestion: &str,
    space_delimiter: bool,
) -> Result<Edit, TagError> {
    let target = active_tag(value, caret, space_delimiter)?.map_or(caret..caret, |tag| tag.span);
    let token = render_tag(suggestion).unwrap_or_default();
    let mut edited = String::with_capacity(value.len() + token.len());
    edited.push_str(value.get(..target.start).unwrap_or_default());
    edited.push_str(&token);
    edited.push_str(value.get(target.end..).unwrap_or_default());
    Ok(Edit {
        value: edited,
        caret: target.start + token.len(),
    })
}

/// Tags split off a term by [`tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tokenized<'a> {
    /// Tags the user has finished typing.
    pub completed: Vec<String>,
    /// Text to leave in the input for further typing.
    pub remainder: &'a str,
}

/// Split completed tags off the text typed into a tag widget's input.
///
/// A single unfinished tag stays in the input. When more than one tag is
/// present the text was pasted, so every tag is treated as complete.
///
/// # Examples
///
/// ```
/// use tagstring::tokenize;
///
/// let typing = tokenize("adam", true);
/// assert!(typing.completed.is_empty());
/// assert_eq!(typing.remainder, "adam");
///
/// let closed = tokenize("adam,", true);
/// assert_eq!(closed.completed, vec!["adam"]);
/// assert_eq!(closed.remainder, "");
///
/// let pasted = tokenize("adam brian", true);
/// assert_eq!(pasted.completed, vec!["adam", "brian"]);
/// assert_eq!(pasted.remainder, "");
/// ```
#[must_use]
pub fn tokenize(term: &str, space_delimiter: bool) -> Tokenized<'_> {
    let mut tags = parse_raw(term, space_delimiter).into_entries();
    if tags.len() < 2 && tags.last().is_some_and(|tag| tag.remainder.is_incomplete()) {
        tags.pop();
    }
    let remainder = match tags.last().map(|tag| tag.remainder) {
        None => term,
        Some(Remainder::Closed(rest)) => rest,
        Some(Remainder::Incomplete) => "",
    };
    Tokenized {
        completed: tags.into_iter().map(|tag| tag.name).collect(),
        remainder,
    }
}

/// Strip one unescaped quote from each end of a typed term.
///
/// Dropdown entries built from the raw term would otherwise keep the
/// opening and closing quotes of a quoted tag. Both outer quote runs must
/// be of odd length and enclose something other than quotes.
///
/// # Examples
///
/// ```
/// use tagstring::trim_outer_quotes;
///
/// assert_eq!(trim_outer_quotes(" \"adam one\" "), "adam one");
/// assert_eq!(trim_outer_quotes("\"\"adam\"\""), "\"\"adam\"\"");
/// assert_eq!(trim_outer_quotes("\"adam"), "\"adam");
/// ```
#[must_use]
pub fn trim_outer_quotes(term: &str) -> &str {
    let term = term.trim();
    let leading = term.len() - term.trim_start_matches(QUOTE).len();
    let trailing = term.len() - term.trim_end_matches(QUOTE).len();
    let quoted = leading & 1 == 1 && trailing & 1 == 1 && leading + trailing < term.len();
    if quoted {
        term.get(1..term.len() - 1).unwrap_or(term)
    } else {
        term
    }
}

fn check_caret(value: &str, caret: usize) -> Result<(), TagError> {
    if caret > value.len() {
        return Err(TagError::CaretOutOfBounds {
            caret,
            len: value.len(),
        });
    }
    if !value.is_char_boundary(caret) {
        return Err(TagError::CaretNotOnCharBoundary { caret });
    }
    Ok(())
}

/// Narrow a tag's segment to its text by dropping surrounding spaces.
fn text_span(value: &str, tag: &RawTag<'_>) -> Range<usize> {
    let segment = value.get(tag.span.clone()).unwrap_or_default();
    let start = tag.span.start + (segment.len() - segment.trim_start_matches(' ').len());
    let end = tag.span.start + segment.trim_end_matches(' ').len();
    start..end.max(start)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests fail loudly on caret errors")]
mod tests {
    use super::*;
    use rstest::rstest;

    fn active_name(value: &str, caret: usize) -> Option<String> {
        active_tag(value, caret, true)
            .expect("caret should be valid")
            .map(|tag| tag.name)
    }

    #[rstest]
    #[case("adam brian", 0, Some("adam"))]
    #[case("adam brian", 4, Some("adam"))]
    #[case("adam brian", 5, Some("brian"))]
    #[case("adam, brian chris", 14, Some("brian chris"))]
    #[case("adam, , brian", 6, None)]
    #[case("", 0, None)]
    fn finds_tag_under_caret(
        #[case] value: &str,
        #[case] caret: usize,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(active_name(value, caret).as_deref(), expected);
    }

    #[test]
    fn active_tag_reports_its_source_text() {
        let tag = active_tag("adam,  \"brian one\"  , chris", 10, true)
            .expect("caret should be valid")
            .expect("caret is inside a tag");
        assert_eq!(tag.name, "brian one");
        assert_eq!(tag.text, "\"brian one\"");
        assert_eq!(tag.span, 7..18);
        assert!(tag.closed);
    }

    #[test]
    fn rejects_invalid_carets() {
        assert_eq!(
            active_tag("adam", 5, true),
            Err(TagError::CaretOutOfBounds { caret: 5, len: 4 })
        );
        assert_eq!(
            active_tag("é", 1, true),
            Err(TagError::CaretNotOnCharBoundary { caret: 1 })
        );
    }

    #[test]
    fn accepting_a_suggestion_leaves_other_tags_untouched() {
        let edit = accept_suggestion("chris,  ad ,brian", 9, "adam", true)
            .expect("caret should be valid");
        assert_eq!(edit.value, "chris,  adam ,brian");
        assert_eq!(edit.caret, 12);
    }

    #[test]
    fn accepting_a_suggestion_in_an_empty_segment_inserts_it() {
        let edit = accept_suggestion("adam, ", 6, "brian", true).expect("caret should be valid");
        assert_eq!(edit.value, "adam, brian");
        assert_eq!(edit.caret, 11);
    }

    #[rstest]
    #[case("", &[], "")]
    #[case("adam", &[], "adam")]
    #[case("adam,", &["adam"], "")]
    #[case("adam, ", &["adam"], " ")]
    #[case("adam, bri", &["adam", "bri"], "")]
    #[case("adam,brian,chris", &["adam", "brian", "chris"], "")]
    #[case("\"adam, one", &[], "\"adam, one")]
    fn tokenizes_terms(#[case] term: &str, #[case] completed: &[&str], #[case] remainder: &str) {
        let tokens = tokenize(term, true);
        assert_eq!(tokens.completed, completed);
        assert_eq!(tokens.remainder, remainder);
    }

    #[rstest]
    #[case("\"adam\"", "adam")]
    #[case("\"\"\"adam\"\"\"", "\"\"adam\"\"")]
    #[case("\"adam\"\"", "\"adam\"\"")]
    #[case("\"\"\"", "\"\"\"")]
    #[case("adam", "adam")]
    fn trims_outer_quotes(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(trim_outer_quotes(term), expected);
    }
}
