//! Pull tokenizer for free-form date/time strings.
//!
//! The scanner has no grammar: it classifies runs of characters on the fly
//! and only decides a run's symbol when the run is flushed. Every decision
//! looks at the current character plus at most one neighbour on either side
//! (see [`Cursor::peek`] and [`Cursor::prev`]).
//!
//! # Dispatch
//!
//! | Class | Action |
//! |---|---|
//! | `a A p P m M W` | extend the run (LETTER) |
//! | `t T` | before a digit: emit `CHARACTER`; otherwise extend the run (no kind) |
//! | digit | after a letter: flush the run as `CHARACTER`; otherwise extend (DIGIT) and flush once the next character is not a digit |
//! | `:` `/` `@` space tab | flush a pending run first, then emit the punctuation on the next pull |
//! | `.` | a `DOT`, a fraction opener between digits, or part of a meridian run |
//! | `-` | sign prefix (joins the run) when not after a digit and before one; otherwise like `/` |
//! | anything else | abandon a pending run as `CHARACTER`, else emit the character as `CHARACTER` |
//!
//! A flush that does not consume the current character leaves it for the next
//! pull, so the token stream stays ordered and gap-free.

use std::str::Chars;

use tracing::{debug, trace};

use crate::char_class::CharClass;
use crate::classifier::classify;
use crate::decode::{parse_signed, DecodeError};
use crate::patterns::FieldPattern;
use crate::run_buffer::{RunBuffer, RunKinds};
use crate::{Cursor, EncodingIssue, LexError, SourceBuffer, Symbol, Token};

/// Single-use tokenizer bound to one input string.
///
/// Call [`next_token`](Self::next_token) until it returns a token with
/// [`Symbol::Eof`]; every later call returns `Eof` again. The tokenizer also
/// implements [`Iterator`], yielding each token before `Eof`.
pub struct Tokenizer<'a> {
    source: SourceBuffer<'a>,
    cursor: Cursor<'a>,
    run: RunBuffer,
    /// First classification failure; returned again on every later pull.
    failure: Option<LexError>,
    /// Set once the iterator has yielded `Eof` or an error.
    exhausted: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let source = SourceBuffer::new(input);
        let cursor = source.cursor();
        Tokenizer {
            source,
            cursor,
            run: RunBuffer::new(),
            failure: None,
            exhausted: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns [`LexError::Unclassifiable`] when a flushed run matches no
    /// classification rule. That aborts the pass: the same error is returned
    /// on every later call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        match self.scan() {
            Ok(token) => {
                trace!(
                    symbol = %token.symbol,
                    start = token.start,
                    len = token.len,
                    "token"
                );
                Ok(token)
            }
            Err(err) => {
                debug!(error = %err, "tokenization aborted");
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        loop {
            if self.cursor.is_eof() {
                return if self.run.is_pending() {
                    self.flush()
                } else {
                    Ok(Token::EOF)
                };
            }

            let pos = self.cursor.pos();
            let byte = self.cursor.current();
            let emitted = match CharClass::of(byte) {
                CharClass::MeridianLetter => {
                    self.letter(pos, byte);
                    None
                }
                CharClass::Marker => self.marker(pos, byte)?,
                CharClass::Digit => self.digit(pos, byte)?,
                CharClass::Colon => Some(self.punctuation(pos, Symbol::Colon)?),
                CharClass::Dot => self.dot(pos)?,
                CharClass::Slash => Some(self.punctuation(pos, Symbol::Slash)?),
                CharClass::At => Some(self.punctuation(pos, Symbol::At)?),
                CharClass::Minus => self.minus(pos)?,
                CharClass::Space => Some(self.punctuation(pos, Symbol::Space)?),
                CharClass::Other => Some(self.other(pos)),
            };
            if let Some(token) = emitted {
                return Ok(token);
            }
        }
    }

    // ─── Dispatch arms ─────────────────────────────────────────────

    fn letter(&mut self, pos: u32, byte: u8) {
        self.run.push(pos, byte, RunKinds::LETTER);
        self.cursor.advance();
    }

    /// `t`/`T`: a bare separator before a digit (`2024-01-05T12`), otherwise
    /// part of the run without contributing a kind.
    fn marker(&mut self, pos: u32, byte: u8) -> Result<Option<Token>, LexError> {
        if self.cursor.peek().is_ascii_digit() {
            if self.run.is_pending() {
                return self.flush().map(Some);
            }
            self.cursor.advance();
            return Ok(Some(Token::new(Symbol::Character, pos, 1)));
        }
        self.run.push(pos, byte, RunKinds::empty());
        self.cursor.advance();
        Ok(None)
    }

    fn digit(&mut self, pos: u32, byte: u8) -> Result<Option<Token>, LexError> {
        if self.run.last_byte().is_ascii_alphabetic() {
            // Letter run interrupted by a digit; the digit starts the next run.
            return Ok(Some(self.emit_run(Symbol::Character)));
        }
        self.run.push(pos, byte, RunKinds::DIGIT);
        self.cursor.advance();
        if self.cursor.current().is_ascii_digit() {
            Ok(None)
        } else {
            self.flush().map(Some)
        }
    }

    /// `.` handling.
    ///
    /// With no pending run the dot is a `DOT` token, unless it sits between
    /// two digits, where it opens a fraction run (`45.123`). With a pending
    /// run the dot joins it, and the character before it decides:
    /// - `a A p P`: keep scanning for the rest of `p.m.`
    /// - `m M`: flush as `MERIDIAN` if the run is a complete meridian
    /// - anything else: flush through the classifier
    fn dot(&mut self, pos: u32) -> Result<Option<Token>, LexError> {
        if !self.run.is_pending() {
            // Departs from the plain `DOT` rule: a digit-bounded dot opens a
            // fraction run, otherwise no run could ever classify as `FRACTION`.
            if self.cursor.prev().is_ascii_digit() && self.cursor.peek().is_ascii_digit() {
                self.run.push(pos, b'.', RunKinds::PUNCTUATION);
                self.cursor.advance();
                return Ok(None);
            }
            self.cursor.advance();
            return Ok(Some(Token::new(Symbol::Dot, pos, 1)));
        }

        let before = self.run.last_byte();
        self.run.push(pos, b'.', RunKinds::PUNCTUATION);
        self.cursor.advance();
        match before {
            b'a' | b'A' | b'p' | b'P' => Ok(None),
            b'm' | b'M' => {
                if FieldPattern::Meridian.matches(self.run.as_str()) {
                    Ok(Some(self.emit_run(Symbol::Meridian)))
                } else {
                    Ok(None)
                }
            }
            _ => self.flush().map(Some),
        }
    }

    /// `-` is a sign when it does not follow a digit and precedes one. A sign
    /// joins the pending run, if any, without recording a kind.
    fn minus(&mut self, pos: u32) -> Result<Option<Token>, LexError> {
        if !self.cursor.prev().is_ascii_digit() && self.cursor.peek().is_ascii_digit() {
            self.run.push(pos, b'-', RunKinds::empty());
            self.cursor.advance();
            return Ok(None);
        }
        self.punctuation(pos, Symbol::Minus).map(Some)
    }

    /// Single-character punctuation. A pending run is flushed first and the
    /// punctuation is revisited on the next pull.
    fn punctuation(&mut self, pos: u32, symbol: Symbol) -> Result<Token, LexError> {
        if self.run.is_pending() {
            return self.flush();
        }
        self.cursor.advance();
        Ok(Token::new(symbol, pos, 1))
    }

    fn other(&mut self, pos: u32) -> Token {
        if self.run.is_pending() {
            return self.emit_run(Symbol::Character);
        }
        let width = self.cursor.advance_char();
        Token::new(Symbol::Character, pos, width)
    }

    // ─── Flushing ──────────────────────────────────────────────────

    /// Classify the pending run and emit it.
    fn flush(&mut self) -> Result<Token, LexError> {
        let kinds = self.run.kinds();
        match classify(self.run.as_str(), kinds) {
            Some(symbol) => Ok(self.emit_run(symbol)),
            None => {
                debug!(run = self.run.as_str(), ?kinds, "no rule matches run");
                Err(LexError::Unclassifiable {
                    text: self.run.as_str().to_owned(),
                    start: self.run_start(),
                })
            }
        }
    }

    /// Emit the pending run as `symbol` and reset the buffer.
    fn emit_run(&mut self, symbol: Symbol) -> Token {
        debug_assert!(self.run.is_pending(), "emit without a pending run");
        let token = Token::new(symbol, self.run_start(), self.run.len());
        self.run.reset();
        token
    }

    fn run_start(&self) -> u32 {
        self.run.start().unwrap_or_else(|| self.cursor.pos())
    }

    // ─── Reading tokens ────────────────────────────────────────────

    /// The input this tokenizer was built from.
    pub fn source(&self) -> &'a str {
        self.source.as_str()
    }

    /// Current cursor offset.
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    /// Encoding issues found in the input.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        self.source.encoding_issues()
    }

    /// The text covered by `token`, borrowed from the input.
    pub fn text(&self, token: Token) -> Result<&'a str, LexError> {
        self.text_at(token.start, token.len)
    }

    /// The text of an arbitrary span, borrowed from the input.
    pub fn text_at(&self, start: u32, len: u32) -> Result<&'a str, LexError> {
        start
            .checked_add(len)
            .and_then(|end| self.cursor.slice(start, end))
            .ok_or(LexError::InvalidSpan { start, len })
    }

    /// An owned copy of the text covered by `token`.
    pub fn read_string(&self, token: Token) -> Result<String, LexError> {
        self.text(token).map(str::to_owned)
    }

    /// A read-only character view of `token`.
    pub fn chars(&self, token: Token) -> Result<Chars<'a>, LexError> {
        self.text(token).map(str::chars)
    }

    /// First character of `token`.
    pub fn read_char(&self, token: Token) -> Result<char, LexError> {
        self.text(token)?
            .chars()
            .next()
            .ok_or(LexError::InvalidSpan {
                start: token.start,
                len: token.len,
            })
    }

    /// Decode a `Digits` token, sign included.
    ///
    /// Any other symbol is a caller error ([`LexError::NotDigits`]), even when
    /// its text happens to be numeric.
    pub fn read_long(&self, token: Token) -> Result<i64, LexError> {
        if token.symbol != Symbol::Digits {
            return Err(LexError::NotDigits {
                symbol: token.symbol,
                start: token.start,
            });
        }
        self.decode(token.start, token.len)
    }

    /// [`read_long`](Self::read_long) narrowed to `i32`.
    pub fn read_int(&self, token: Token) -> Result<i32, LexError> {
        let value = self.read_long(token)?;
        self.narrow(value, token.start, token.len)
    }

    /// Decode an arbitrary span as a signed integer, e.g. the year inside a
    /// compact `20240105` token.
    pub fn read_int_at(&self, start: u32, len: u32) -> Result<i32, LexError> {
        let value = self.decode(start, len)?;
        self.narrow(value, start, len)
    }

    fn decode(&self, start: u32, len: u32) -> Result<i64, LexError> {
        let text = self.text_at(start, len)?;
        parse_signed(text).map_err(|err| match err {
            DecodeError::Invalid => LexError::InvalidDigits {
                text: text.to_owned(),
                start,
            },
            DecodeError::Overflow => LexError::IntegerOverflow {
                text: text.to_owned(),
                start,
            },
        })
    }

    fn narrow(&self, value: i64, start: u32, len: u32) -> Result<i32, LexError> {
        i32::try_from(value).map_err(|_| LexError::IntegerOverflow {
            text: self.text_at(start, len).unwrap_or_default().to_owned(),
            start,
        })
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}
