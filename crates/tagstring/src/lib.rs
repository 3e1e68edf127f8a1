//! Quote-aware parsing and rendering of free-form tag strings.
//!
//! A tag string is what a user types into a tag field, such as
//! `adam, "brian chris", dave`. [`parse_tags`] turns it into a sorted set of
//! tags and [`render_tags`] turns tags back into the canonical string.
//!
//! The grammar decides its own delimiter: spaces separate tags until the
//! first unquoted comma, at which point everything typed so far is
//! reinterpreted as comma-delimited. Quotes group text containing
//! delimiters, and a doubled quote is a literal quote. Every input parses.
//!
//! [`parse_raw`] and the helpers in [`live`] serve fields edited one
//! keystroke at a time, where the caller needs to know which tag is still
//! being typed.
//!
//! ```
//! use tagstring::{parse_tags, render_tags};
//!
//! let tags = parse_tags("adam, \"brian, chris\", dave", true);
//! assert_eq!(tags, vec!["adam", "brian, chris", "dave"]);
//! assert_eq!(render_tags(&tags), "\"brian, chris\", adam, dave");
//! ```

mod errors;
mod lexer;
pub mod live;
mod options;
mod render;
mod suggest;

pub use errors::{TagError, TagLimitInfo};
pub use lexer::{RawTag, RawTags, Remainder, parse_raw, parse_tags, parse_tags_with};
pub use live::{
    ActiveTag, Edit, Tokenized, accept_suggestion, active_tag, tokenize, trim_outer_quotes,
};
pub use options::{Delimiter, ParseOptions};
pub use render::{SEPARATOR, normalise, render_tag, render_tags};
pub use suggest::{KnownTags, Lookup, LookupOptions, SuggestionCache};
