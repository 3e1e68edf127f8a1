//! Rendering tags back into a canonical tag string.

use crate::errors::TagError;
use crate::lexer::parse_tags_with;
use crate::options::ParseOptions;

/// Separator placed between rendered tags.
pub const SEPARATOR: &str = ", ";

/// Render a single tag as it would appear in a tag string.
///
/// Quotes are doubled, and the result is wrapped in quotes when it contains
/// a comma or a space. Returns `None` for an empty tag.
///
/// # Examples
///
/// ```
/// use tagstring::render_tag;
///
/// assert_eq!(render_tag("adam").as_deref(), Some("adam"));
/// assert_eq!(render_tag("ad\"am").as_deref(), Some("ad\"\"am"));
/// assert_eq!(render_tag("adam brian").as_deref(), Some("\"adam brian\""));
/// assert_eq!(render_tag(""), None);
/// ```
#[must_use]
pub fn render_tag(tag: &str) -> Option<String> {
    let escaped = tag.replace('"', "\"\"");
    if escaped.is_empty() {
        return None;
    }
    if escaped.contains([',', ' ']) {
        Some(format!("\"{escaped}\""))
    } else {
        Some(escaped)
    }
}

/// Render tags into one canonical string.
///
/// Tokens are sorted by code point after escaping and quoting, then joined
/// with [`SEPARATOR`].
///
/// # Examples
///
/// ```
/// use tagstring::render_tags;
///
/// assert_eq!(
///     render_tags(["ed", "chris, dave", "adam brian"]),
///     "\"adam brian\", \"chris, dave\", ed"
/// );
/// ```
#[must_use]
pub fn render_tags<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens: Vec<String> = tags
        .into_iter()
        .filter_map(|tag| render_tag(tag.as_ref()))
        .collect();
    tokens.sort_unstable();
    tokens.join(SEPARATOR)
}

/// Parse and re-render a tag string into its canonical form.
///
/// This is the commit step for a live field: the value is sorted and
/// deduplicated, which never happens while the user is typing.
///
/// # Errors
/// Returns [`TagError::TooManyTags`] when the input exceeds the configured
/// tag limit.
pub fn normalise(input: &str, options: &ParseOptions) -> Result<String, TagError> {
    parse_tags_with(input, options).map(render_tags)
}
