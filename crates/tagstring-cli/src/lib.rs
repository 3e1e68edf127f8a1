//! Command-line front end for the `tagstring` parser.
//!
//! The `tagstr` binary parses, renders and normalises tag strings given as
//! an argument or on stdin. Configuration comes from `TAGSTRING_*`
//! environment variables, overridden by command-line flags.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
