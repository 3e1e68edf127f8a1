//! Error types for the `tagstr` front end.

use thiserror::Error;

/// Errors raised while configuring or running a `tagstr` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input could not be parsed under the configured options.
    #[error(transparent)]
    Tag(#[from] tagstring::TagError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagstring::{TagError, TagLimitInfo};

    #[test]
    fn invalid_config_error_displays_message() {
        let error = CliError::InvalidConfig("unknown log level".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: unknown log level"
        );
    }

    #[test]
    fn tag_errors_keep_their_message() {
        let error: CliError = TagError::TooManyTags(TagLimitInfo::new(1, 2)).into();
        assert_eq!(error.to_string(), "this field can only have 1 argument");
    }

    #[test]
    fn io_error_converts_from_std_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "stdin closed");
        let error: CliError = io_err.into();
        assert!(error.to_string().contains("stdin closed"));
    }
}
