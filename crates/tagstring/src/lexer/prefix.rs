//! Re-derivation of the scanned prefix when the delimiter is promoted.
//!
//! Everything read before the first unquoted comma was tokenised on spaces.
//! Once the comma arrives that prefix is reinterpreted as a single tag, as
//! though commas had been the delimiter from the start.

use super::QUOTE;

/// Rebuild the prefix preceding the promoting comma as one provisional tag.
///
/// Outer quote runs are stripped and each contributes half its length as
/// literal quotes; doubled quotes in between collapse to one. A run of odd
/// length keeps one extra literal quote when the opposite run is even,
/// since such a quote never paired up with a closing one.
pub(crate) fn rederive_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim();
    let body = trimmed.trim_start_matches(QUOTE);
    let leading = trimmed.len() - body.len();
    let inner = body.trim_end_matches(QUOTE);
    let trailing = body.len() - inner.len();

    let mut tag = String::with_capacity(trimmed.len());
    if is_odd(leading) && !is_odd(trailing) {
        tag.push(QUOTE);
    }
    push_quotes(&mut tag, leading >> 1);
    tag.push_str(&inner.replace("\"\"", "\""));
    push_quotes(&mut tag, trailing >> 1);
    if is_odd(trailing) && !is_odd(leading) {
        tag.push(QUOTE);
    }
    tag
}

pub(crate) const fn is_odd(count: usize) -> bool {
    count & 1 == 1
}

pub(crate) fn push_quotes(buffer: &mut String, count: usize) {
    buffer.extend(std::iter::repeat_n(QUOTE, count));
}
