//! Character automaton splitting a tag string into lexemes.

use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

use crate::options::Delimiter;

use super::QUOTE;
use super::prefix::{is_odd, push_quotes, rederive_prefix};

/// A tag recognised by the automaton together with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub name: String,
    /// Bytes from the start of the tag's segment up to, but excluding, the
    /// delimiter that closed it (or the end of input).
    pub span: Range<usize>,
    /// Whether a delimiter followed the tag before the input ended.
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    InQuote,
}

pub(crate) struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    delimiter: Delimiter,
    mode: Mode,
    buffer: String,
    segment_start: usize,
    lexemes: Vec<Lexeme>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str, delimiter: Delimiter) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            delimiter,
            mode: Mode::Normal,
            buffer: String::new(),
            segment_start: 0,
            lexemes: Vec::new(),
        }
    }

    /// Consume the whole input and return the lexemes in encounter order.
    pub(crate) fn run(mut self) -> Vec<Lexeme> {
        while let Some((index, ch)) = self.chars.next() {
            if ch == QUOTE {
                self.quote_run();
                continue;
            }
            if self.mode == Mode::Normal && self.delimit(index, ch) {
                continue;
            }
            self.buffer.push(ch);
        }
        self.finish()
    }

    /// Handle a run of quotes whose first character was just consumed.
    fn quote_run(&mut self) {
        let mut count = 1;
        while self.chars.next_if(|&(_, ch)| ch == QUOTE).is_some() {
            count += 1;
        }

        if self.buffer.is_empty() && is_odd(count) {
            self.mode = Mode::InQuote;
            push_quotes(&mut self.buffer, count >> 1);
            return;
        }

        push_quotes(&mut self.buffer, count >> 1);
        if !is_odd(count) {
            return;
        }
        if self.closes_quote() {
            self.mode = Mode::Normal;
        } else {
            self.buffer.push(QUOTE);
        }
    }

    /// Decide whether an odd trailing quote ends a quoted segment.
    ///
    /// A space closes only while spaces delimit; a comma closes even when it
    /// sits behind a run of spaces.
    fn closes_quote(&self) -> bool {
        let mut ahead = self.chars.clone();
        match ahead.peek().map(|&(_, ch)| ch) {
            None | Some(',') => true,
            Some(' ') if self.delimiter == Delimiter::Space => true,
            _ => matches!(ahead.find(|&(_, ch)| ch != ' '), None | Some((_, ','))),
        }
    }

    /// Apply delimiter rules to an unquoted character.
    ///
    /// Returns `true` when the character was consumed as structure rather
    /// than tag content.
    fn delimit(&mut self, index: usize, ch: char) -> bool {
        if ch == ',' && self.delimiter == Delimiter::Space {
            self.promote(index);
        }
        if ch == self.delimiter.as_char() {
            self.close_tag(index);
            return true;
        }
        ch == ' ' && self.buffer.is_empty()
    }

    /// Switch to comma delimiting and fold everything scanned so far into
    /// the current tag.
    fn promote(&mut self, index: usize) {
        let prefix = self.input.get(..index).unwrap_or_default();
        log::debug!(
            "promoting tag delimiter to comma at byte {index}; discarding {} space-delimited tag(s)",
            self.lexemes.len()
        );
        self.lexemes.clear();
        self.buffer = rederive_prefix(prefix);
        self.segment_start = 0;
        self.delimiter = Delimiter::Comma;
    }

    fn close_tag(&mut self, index: usize) {
        trim_trailing_spaces(&mut self.buffer);
        if !self.buffer.is_empty() {
            self.push(index, true);
        }
        self.segment_start = index + 1;
    }

    fn finish(mut self) -> Vec<Lexeme> {
        trim_trailing_spaces(&mut self.buffer);
        if !self.buffer.is_empty() {
            if self.mode == Mode::InQuote {
                self.buffer.insert(0, QUOTE);
            }
            self.push(self.input.len(), false);
        }
        self.lexemes
    }

    fn push(&mut self, end: usize, closed: bool) {
        let name = std::mem::take(&mut self.buffer);
        log::trace!("lexed tag {name:?} (closed: {closed})");
        self.lexemes.push(Lexeme {
            name,
            span: self.segment_start..end,
            closed,
        });
    }
}

fn trim_trailing_spaces(buffer: &mut String) {
    let len = buffer.trim_end_matches(' ').len();
    buffer.truncate(len);
}
