//! Command dispatch and output formatting for `tagstr`.

use std::io::{Read, Write};

use eyre::{Context, Result};
use serde::Serialize;
use tagstring::{Remainder, normalise, parse_raw, parse_tags_with, render_tags, tokenize};
use tracing::debug;

use crate::cli::{Cli, Commands, InputArgs, RenderArgs};
use crate::config::CliConfig;
use crate::error::CliError;

/// Run the command selected by `cli`, reading from `stdin` when no input
/// argument was given and writing results to `out`.
///
/// # Errors
///
/// Returns an error if input cannot be read, the tag string exceeds the
/// configured limit, or output cannot be written.
pub fn run(cli: &Cli, config: &CliConfig, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    debug!(command = cli.command.name(), json = cli.json, "running command");
    let space_delimiter = config.parse.space_delimiter;
    match &cli.command {
        Commands::Parse(args) => {
            let input = read_input(args, stdin)?;
            let tags = parse_tags_with(&input, &config.parse).map_err(CliError::from)?;
            if cli.json {
                write_json(out, &tags)?;
            } else {
                write_lines(out, &tags)?;
            }
        }
        Commands::Raw(args) => {
            let input = read_input(args, stdin)?;
            let raw = parse_raw(&input, space_delimiter);
            if cli.json {
                write_json(out, &raw)?;
            } else {
                for tag in &raw {
                    let rest = match tag.remainder {
                        Remainder::Closed(rest) => format!("{rest:?}"),
                        Remainder::Incomplete => "incomplete".to_string(),
                    };
                    writeln!(out, "{}\t{rest}", tag.name)
                        .wrap_err_with(|| format!("failed to write raw tag {:?}", tag.name))?;
                }
            }
        }
        Commands::Render(args) => {
            let tags = read_tags(args, stdin)?;
            write_string(out, &render_tags(&tags), cli.json)?;
        }
        Commands::Normalize(args) => {
            let input = read_input(args, stdin)?;
            let canonical = normalise(&input, &config.parse).map_err(CliError::from)?;
            write_string(out, &canonical, cli.json)?;
        }
        Commands::Tokenize(args) => {
            let input = read_input(args, stdin)?;
            let tokens = tokenize(&input, space_delimiter);
            if cli.json {
                write_json(out, &tokens)?;
            } else {
                for tag in &tokens.completed {
                    writeln!(out, "tag\t{tag}").wrap_err("failed to write completed tag")?;
                }
                writeln!(out, "remainder\t{}", tokens.remainder)
                    .wrap_err("failed to write tokenizer remainder")?;
            }
        }
    }
    out.flush().wrap_err("failed to flush output")
}

/// Read the tag string from the argument, or from `stdin` without its
/// trailing line break.
fn read_input(args: &InputArgs, stdin: &mut dyn Read) -> Result<String, CliError> {
    if let Some(input) = &args.input {
        return Ok(input.clone());
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    let end = trim_line_break(&buffer).len();
    buffer.truncate(end);
    Ok(buffer)
}

fn read_tags(args: &RenderArgs, stdin: &mut dyn Read) -> Result<Vec<String>, CliError> {
    if !args.tags.is_empty() {
        return Ok(args.tags.clone());
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer.lines().map(str::to_owned).collect())
}

fn trim_line_break(text: &str) -> &str {
    text.strip_suffix('\n')
        .map_or(text, |line| line.strip_suffix('\r').unwrap_or(line))
}

fn write_lines(out: &mut dyn Write, tags: &[String]) -> Result<()> {
    tags.iter().try_for_each(|tag| {
        writeln!(out, "{tag}").wrap_err_with(|| format!("failed to write tag {tag:?}"))
    })
}

fn write_string(out: &mut dyn Write, text: &str, json: bool) -> Result<()> {
    if json {
        write_json(out, text)
    } else {
        writeln!(out, "{text}").wrap_err("failed to write tag string")
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value).wrap_err("failed to serialize output to JSON")?;
    writeln!(out).wrap_err("failed to terminate JSON output with newline")
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use clap::Parser;
    use rstest::rstest;

    fn run_args(args: &[&str], stdin: &str) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("tagstr").chain(args.iter().copied()))
            .expect("valid arguments");
        let config = cli.apply_to(CliConfig::default());
        let mut out = Vec::new();
        run(&cli, &config, &mut stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).expect("output is UTF-8"))
    }

    #[rstest]
    #[case(&["parse", "chris adam, brian"], "", "brian\nchris adam\n")]
    #[case(&["parse"], "adam brian\n", "adam\nbrian\n")]
    #[case(&["parse", "--no-space-delimiter", "adam brian"], "", "adam brian\n")]
    #[case(&["render", "adam brian", "chris"], "", "\"adam brian\", chris\n")]
    #[case(&["render"], "ed\nchris, dave\n", "\"chris, dave\", ed\n")]
    #[case(&["normalize", "chris adam chris"], "", "adam, chris\n")]
    #[case(&["normalise"], "\"adam\"\"one\"\r\n", "adam\"\"one\n")]
    #[case(&["raw", "adam,bri"], "", "adam\t\"bri\"\nbri\tincomplete\n")]
    #[case(&["tokenize", "adam, "], "", "tag\tadam\nremainder\t \n")]
    fn writes_text_output(#[case] args: &[&str], #[case] stdin: &str, #[case] expected: &str) {
        let output = run_args(args, stdin).expect("command succeeds");
        assert_eq!(output, expected);
    }

    #[rstest]
    #[case(&["parse", "--json", "b a"], serde_json::json!(["a", "b"]))]
    #[case(&["normalize", "--json", "b a"], serde_json::json!("a, b"))]
    #[case(
        &["tokenize", "--json", "adam,bri"],
        serde_json::json!({"completed": ["adam", "bri"], "remainder": ""})
    )]
    #[case(
        &["raw", "--json", "adam "],
        serde_json::json!([{"name": "adam", "remainder": "", "span": {"start": 0, "end": 4}}])
    )]
    fn writes_json_output(#[case] args: &[&str], #[case] expected: serde_json::Value) {
        let output = run_args(args, "").expect("command succeeds");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn tag_limit_is_reported() {
        let err = run_args(&["parse", "--max-count", "1", "adam brian"], "")
            .expect_err("limit exceeded");
        assert_eq!(err.to_string(), "this field can only have 1 argument");
    }

    #[rstest]
    #[case("adam\n", "adam")]
    #[case("adam\r\n", "adam")]
    #[case("adam\n\n", "adam\n")]
    #[case("adam", "adam")]
    fn strips_one_line_break(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(trim_line_break(text), expected);
    }
}
