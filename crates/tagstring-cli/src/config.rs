//! Front-end configuration parsed from environment variables.
//!
//! Every setting can be given through an environment variable prefixed
//! with `TAGSTRING_` and overridden on the command line.

use std::env;
use std::str::FromStr;

use tagstring::ParseOptions;

use crate::error::CliError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so command output is not interleaved with chatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every pushed tag.
    Trace,
    /// Debug-level information such as delimiter promotion.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "TAGSTRING_LOG_LEVEL";
/// Environment variable toggling space delimiting.
pub const SPACE_DELIMITER_VAR: &str = "TAGSTRING_SPACE_DELIMITER";
/// Environment variable holding the tag limit.
pub const MAX_COUNT_VAR: &str = "TAGSTRING_MAX_COUNT";

/// Configuration for the `tagstr` binary.
///
/// # Environment Variables
///
/// - `TAGSTRING_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `TAGSTRING_SPACE_DELIMITER`: whether spaces separate tags before the
///   first comma (true/false, yes/no, 1/0)
/// - `TAGSTRING_MAX_COUNT`: maximum number of tags, `0` for no limit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Options handed to the parser.
    pub parse: ParseOptions,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value. Missing values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let mut parse = ParseOptions::default();
        if let Some(val) = lookup(SPACE_DELIMITER_VAR) {
            parse = parse.with_space_delimiter(parse_flag(SPACE_DELIMITER_VAR, &val)?);
        }
        if let Some(val) = lookup(MAX_COUNT_VAR) {
            let max = val.trim().parse().map_err(|_| {
                CliError::InvalidConfig(format!(
                    "invalid {MAX_COUNT_VAR} value '{val}', expected a non-negative integer"
                ))
            })?;
            parse = parse.with_max_count(max);
        }

        Ok(Self { log_level, parse })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// Command-line flags take precedence over environment-based values.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        space_delimiter: Option<bool>,
        max_count: Option<usize>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(enabled) = space_delimiter {
            self.parse = self.parse.with_space_delimiter(enabled);
        }
        if let Some(max) = max_count {
            self.parse = self.parse.with_max_count(max);
        }
        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, CliError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CliError::InvalidConfig(format!(
            "invalid {name} value '{value}', expected true or false"
        ))),
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, CliError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, val)| ((*key).to_string(), (*val).to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("Error", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let err = "loud".parse::<LogLevel>().expect_err("unknown level");
        assert!(err.to_string().contains("unknown log level"));
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = load(&[]).expect("empty environment is valid");
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.parse.space_delimiter);
        assert_eq!(config.parse.max_count, None);
    }

    #[test]
    fn environment_values_are_read() {
        let config = load(&[
            (LOG_LEVEL_VAR, "debug"),
            (SPACE_DELIMITER_VAR, "no"),
            (MAX_COUNT_VAR, "3"),
        ])
        .expect("valid environment");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.parse.space_delimiter);
        assert_eq!(config.parse.max_count, Some(3));
    }

    #[test]
    fn zero_max_count_means_unlimited() {
        let config = load(&[(MAX_COUNT_VAR, "0")]).expect("valid environment");
        assert_eq!(config.parse.max_count, None);
    }

    #[rstest]
    #[case(SPACE_DELIMITER_VAR, "maybe")]
    #[case(MAX_COUNT_VAR, "-1")]
    #[case(MAX_COUNT_VAR, "lots")]
    #[case(LOG_LEVEL_VAR, "chatty")]
    fn invalid_environment_values_are_rejected(#[case] key: &str, #[case] value: &str) {
        let err = load(&[(key, value)]).expect_err("invalid value");
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = CliConfig::default().apply_overrides(Some(LogLevel::Error), Some(false), Some(2));
        assert_eq!(config.log_level, LogLevel::Error);
        assert!(!config.parse.space_delimiter);
        assert_eq!(config.parse.max_count, Some(2));

        let config = CliConfig::default().apply_overrides(None, None, None);
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn with_log_level_builder() {
        let config = CliConfig::default().with_log_level(LogLevel::Trace);
        assert_eq!(config.log_level, LogLevel::Trace);
    }
}
