//! Command-line definitions for `tagstr`.

use clap::{Args, Parser, Subcommand};

use crate::config::{CliConfig, LogLevel};

/// Parse and render quote-aware tag strings.
#[derive(Parser, Debug)]
#[command(name = "tagstr", version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    /// Only commas separate tags; spaces are part of a tag.
    #[arg(long, global = true)]
    pub no_space_delimiter: bool,
    /// Maximum number of distinct tags, 0 for no limit.
    #[arg(long, global = true)]
    pub max_count: Option<usize>,
    /// Emit JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Layer the flags given on the command line over `config`.
    #[must_use]
    pub fn apply_to(&self, config: CliConfig) -> CliConfig {
        config.apply_overrides(
            self.log_level,
            self.no_space_delimiter.then_some(false),
            self.max_count,
        )
    }
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sorted, deduplicated tags in a tag string.
    Parse(InputArgs),
    /// Print each tag with the text that follows it, in input order.
    Raw(InputArgs),
    /// Render tags into a canonical tag string.
    Render(RenderArgs),
    /// Parse a tag string and render it canonically.
    #[command(visible_alias = "normalise")]
    Normalize(InputArgs),
    /// Split completed tags off a term typed into a tag widget.
    Tokenize(InputArgs),
}

impl Commands {
    /// Name of the command, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Raw(_) => "raw",
            Self::Render(_) => "render",
            Self::Normalize(_) => "normalize",
            Self::Tokenize(_) => "tokenize",
        }
    }
}

/// Arguments for commands reading a single tag string.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Tag string to read; stdin is used when omitted.
    pub input: Option<String>,
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Tags to render; read one per line from stdin when omitted.
    pub tags: Vec<String>,
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["tagstr", "parse", "adam", "--max-count", "2", "--json"])
            .expect("valid arguments");
        assert!(cli.json);
        assert_eq!(cli.max_count, Some(2));
        assert!(matches!(cli.command, Commands::Parse(InputArgs { input: Some(_) })));
    }

    #[test]
    fn flags_override_configuration() {
        let cli = Cli::try_parse_from([
            "tagstr",
            "--log-level",
            "debug",
            "--no-space-delimiter",
            "normalise",
        ])
        .expect("valid arguments");
        let config = cli.apply_to(CliConfig::default());
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.parse.space_delimiter);
        assert_eq!(cli.command.name(), "normalize");
    }

    #[test]
    fn absent_flags_keep_configuration() {
        let cli = Cli::try_parse_from(["tagstr", "render"]).expect("valid arguments");
        let base = CliConfig::default().with_log_level(LogLevel::Trace);
        assert_eq!(cli.apply_to(base.clone()), base);
    }

    #[test]
    fn rejects_unknown_log_levels() {
        let result = Cli::try_parse_from(["tagstr", "--log-level", "loud", "parse"]);
        assert!(result.is_err());
    }
}
