//! Splits a command-line string on whitespace and double quotes.
//!
//! The scan runs left to right, one character at a time, with two independent
//! boundary trackers: one for bare words, one for quoted regions. A quote
//! immediately preceded by a backslash is inert (it changes neither tracker
//! and stays in the token as a literal quote after unescaping). Everything
//! else follows from four transition rules, checked in priority order at each
//! character; see [`SplitIter::next`].

use std::iter::FusedIterator;
use std::str::CharIndices;

/// Tracks whether a non-quoted token is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordBoundary {
    TokenStart,
    InWord,
}

/// Tracks whether the scan position is inside a double-quoted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteBoundary {
    Outside,
    Inside,
}

/// Splits a string into a sequence of tokens based on whitespace and
/// quotation marks.
///
/// The splitter itself is stateless; all scan state lives in the iterator
/// returned by [`Splitter::split`], so a single shared instance is safe to
/// use from concurrent call sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter;

impl Splitter {
    pub const fn new() -> Self {
        Splitter
    }

    /// Splits `line` into tokens, lazily.
    ///
    /// Empty or all-whitespace input yields an empty sequence. Tokens come
    /// back in input order. The only way to obtain an empty token is an
    /// explicit empty quoted region (`""`).
    #[tracing::instrument(level = "debug", skip(self, line))]
    pub fn split<'a>(&self, line: &'a str) -> SplitIter<'a> {
        SplitIter {
            line,
            chars: line.char_indices(),
            word: WordBoundary::TokenStart,
            quote: QuoteBoundary::Outside,
            token_start: 0,
            prev: None,
            done: false,
        }
    }
}

/// Lazy token iterator returned by [`Splitter::split`]. Owns its own cursor;
/// not restartable.
#[derive(Debug, Clone)]
pub struct SplitIter<'a> {
    line: &'a str,
    chars: CharIndices<'a>,
    word: WordBoundary,
    quote: QuoteBoundary,
    token_start: usize,
    prev: Option<char>,
    done: bool,
}

impl Iterator for SplitIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        for (pos, c) in self.chars.by_ref() {
            let escaped = self.prev == Some('\\');
            self.prev = Some(c);

            if c.is_whitespace() && self.quote == QuoteBoundary::Outside {
                if self.word == WordBoundary::InWord {
                    // word end; leading and repeated separators collapse
                    self.word = WordBoundary::TokenStart;
                    return Some(unescape(&self.line[self.token_start..pos]));
                }
            } else if c == '"' && !escaped {
                match (self.word, self.quote) {
                    (WordBoundary::TokenStart, QuoteBoundary::Inside) => {
                        // closing quote: emit everything since the opening one
                        self.quote = QuoteBoundary::Outside;
                        let token = unescape(&self.line[self.token_start..pos]);
                        self.token_start = pos + c.len_utf8();
                        return Some(token);
                    }
                    (WordBoundary::TokenStart, QuoteBoundary::Outside) => {
                        // opening quote; deliberately does not open a word,
                        // so `"a b"c` lexes as `a b`, `c`
                        self.token_start = pos + c.len_utf8();
                        self.quote = QuoteBoundary::Inside;
                    }
                    (WordBoundary::InWord, _) => {
                        // quote inside a bare word toggles the region without
                        // moving token boundaries
                        self.quote = match self.quote {
                            QuoteBoundary::Outside => QuoteBoundary::Inside,
                            QuoteBoundary::Inside => QuoteBoundary::Outside,
                        };
                    }
                }
            } else if self.word == WordBoundary::TokenStart && self.quote == QuoteBoundary::Outside
            {
                self.word = WordBoundary::InWord;
                self.token_start = pos;
            }
        }

        self.done = true;

        // a token open at end of input, quoted or not, is emitted best-effort
        if self.word == WordBoundary::InWord || self.quote == QuoteBoundary::Inside {
            Some(unescape(&self.line[self.token_start..]))
        } else {
            None
        }
    }
}

impl FusedIterator for SplitIter<'_> {}

/// Post-processes a raw token slice: `\"` collapses to a literal `"`
/// (left to right, one backslash consumed per quote, not recursively), and
/// any remaining unescaped quote is stripped. Backslashes not immediately
/// preceding a quote are preserved verbatim.
fn unescape(raw: &str) -> String {
    let mut token = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                token.push('"');
            }
            '"' => {}
            _ => token.push(c),
        }
    }
    token
}
