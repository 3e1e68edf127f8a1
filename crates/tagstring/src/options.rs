//! Parser configuration shared by the batch and live entry points.

/// Field delimiter recognised outside quoted segments.
///
/// A parse starts on [`Delimiter::Space`] unless space delimiting is
/// disabled. The first unquoted comma promotes it to [`Delimiter::Comma`]
/// for the rest of that parse; promotion never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// Tags are separated by spaces.
    Space,
    /// Tags are separated by commas; spaces are part of the tag.
    Comma,
}

impl Delimiter {
    /// Return the character this delimiter matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstring::Delimiter;
    ///
    /// assert_eq!(Delimiter::Space.as_char(), ' ');
    /// assert_eq!(Delimiter::Comma.as_char(), ',');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Space => ' ',
            Self::Comma => ',',
        }
    }
}

/// Options controlling how a tag string is parsed.
///
/// Defaults to space delimiting with no limit on the number of tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Whether spaces separate tags until the first unquoted comma.
    pub space_delimiter: bool,
    /// Maximum number of distinct tags accepted by
    /// [`parse_tags_with`](crate::parse_tags_with).
    pub max_count: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            space_delimiter: true,
            max_count: None,
        }
    }
}

impl ParseOptions {
    /// Create options with the given space-delimiting behaviour.
    #[must_use]
    pub fn with_space_delimiter(mut self, enabled: bool) -> Self {
        self.space_delimiter = enabled;
        self
    }

    /// Create options limiting the number of distinct tags.
    ///
    /// A limit of zero is treated as "no limit".
    #[must_use]
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = (max_count > 0).then_some(max_count);
        self
    }

    /// Delimiter a parse starts with.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstring::{Delimiter, ParseOptions};
    ///
    /// let options = ParseOptions::default().with_space_delimiter(false);
    /// assert_eq!(options.initial_delimiter(), Delimiter::Comma);
    /// ```
    #[must_use]
    pub const fn initial_delimiter(&self) -> Delimiter {
        if self.space_delimiter {
            Delimiter::Space
        } else {
            Delimiter::Comma
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_space_delimiter_without_limit() {
        let options = ParseOptions::default();
        assert!(options.space_delimiter);
        assert_eq!(options.max_count, None);
        assert_eq!(options.initial_delimiter(), Delimiter::Space);
    }

    #[test]
    fn zero_max_count_means_unlimited() {
        let options = ParseOptions::default().with_max_count(0);
        assert_eq!(options.max_count, None);
        let options = options.with_max_count(3);
        assert_eq!(options.max_count, Some(3));
    }
}
