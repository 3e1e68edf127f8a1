//! Tag-string lexing: the quote-aware automaton and its entry points.

mod automaton;
mod prefix;
mod raw;

use crate::errors::{TagError, TagLimitInfo};
use crate::options::ParseOptions;

use automaton::Lexer;

pub use raw::{RawTag, RawTags, Remainder};

pub(crate) const QUOTE: char = '"';

/// Parse a tag string into unique tags sorted by code point.
///
/// Spaces delimit tags until the first unquoted comma, after which only
/// commas do. With `space_delimiter` disabled, commas delimit throughout.
/// Parsing never fails: unbalanced quotes are treated as literal text.
///
/// # Examples
///
/// ```
/// use tagstring::parse_tags;
///
/// assert_eq!(parse_tags("adam, brian chris", true), vec!["adam", "brian chris"]);
/// assert_eq!(parse_tags("adam brian chris", false), vec!["adam brian chris"]);
/// ```
#[must_use]
pub fn parse_tags(input: &str, space_delimiter: bool) -> Vec<String> {
    let mut tags: Vec<String> = lex(input, space_delimiter)
        .into_iter()
        .map(|lexeme| lexeme.name)
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}

/// Parse a tag string according to `options`, enforcing any tag limit.
///
/// # Errors
/// Returns [`TagError::TooManyTags`] when the number of distinct tags
/// exceeds [`ParseOptions::max_count`].
///
/// # Examples
///
/// ```
/// use tagstring::{ParseOptions, parse_tags_with};
///
/// let options = ParseOptions::default().with_max_count(2);
/// assert!(parse_tags_with("adam, brian", &options).is_ok());
/// let err = parse_tags_with("adam, brian, chris", &options).unwrap_err();
/// assert_eq!(err.to_string(), "this field can only have 2 arguments");
/// ```
pub fn parse_tags_with(input: &str, options: &ParseOptions) -> Result<Vec<String>, TagError> {
    let tags = parse_tags(input, options.space_delimiter);
    match options.max_count {
        Some(max) if tags.len() > max => {
            Err(TagError::TooManyTags(TagLimitInfo::new(max, tags.len())))
        }
        _ => Ok(tags),
    }
}

/// Parse a tag string in raw mode for interactive callers.
///
/// Tags keep their encounter order and duplicates. Each carries the input
/// that followed its delimiter, or [`Remainder::Incomplete`] when the input
/// ended before the tag was closed.
#[must_use]
pub fn parse_raw(input: &str, space_delimiter: bool) -> RawTags<'_> {
    RawTags::from_lexemes(input, lex(input, space_delimiter))
}

fn lex(input: &str, space_delimiter: bool) -> Vec<automaton::Lexeme> {
    if input.is_empty() {
        return Vec::new();
    }
    let delimiter = ParseOptions::default()
        .with_space_delimiter(space_delimiter)
        .initial_delimiter();
    Lexer::new(input, delimiter).run()
}
