//! Token symbols and the token value type.
//!
//! A [`Token`] never copies text: it is a [`Symbol`] plus a byte range into
//! the input the tokenizer was built from. Use the read helpers on
//! [`Tokenizer`](crate::Tokenizer) to get at the text.

use std::fmt;
use std::ops::Range;

/// Closed set of token symbols.
///
/// `Hour12` and `TwoDigits` are both two-digit numeric runs; they differ only
/// in the numeric range the digits satisfy. `Digits` is every other digit
/// run, optionally sign-prefixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Symbol {
    /// End of input. Returned on every pull once the input is drained.
    Eof = 0,
    /// A raw character (or abandoned letter run) with no finer role.
    Character = 1,
    /// A digit run that is not a one- or two-digit hour.
    Digits = 2,
    /// One digit, or two digits in `01`-`12` (leading zero optional).
    Hour12 = 3,
    /// Two digits in `00`-`24` that are not a 12-hour hour.
    TwoDigits = 4,
    /// `.` followed by digits, e.g. the `.123` in `12:30:45.123`.
    Fraction = 5,
    /// AM/PM designator such as `pm` or `p.m.`.
    Meridian = 6,
    Colon = 7,
    Dot = 8,
    Slash = 9,
    At = 10,
    Minus = 11,
    /// A single space or tab.
    Space = 12,
}

impl Symbol {
    /// Human-readable name, used in diagnostics and trace output.
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Eof => "end of input",
            Symbol::Character => "character",
            Symbol::Digits => "digits",
            Symbol::Hour12 => "12-hour hour",
            Symbol::TwoDigits => "two digits",
            Symbol::Fraction => "fraction",
            Symbol::Meridian => "meridian",
            Symbol::Colon => "`:`",
            Symbol::Dot => "`.`",
            Symbol::Slash => "`/`",
            Symbol::At => "`@`",
            Symbol::Minus => "`-`",
            Symbol::Space => "space",
        }
    }

    /// The fixed source text for single-character punctuation symbols.
    ///
    /// `Space` has no fixed lexeme since it covers both space and tab.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Symbol::Colon => Some(":"),
            Symbol::Dot => Some("."),
            Symbol::Slash => Some("/"),
            Symbol::At => Some("@"),
            Symbol::Minus => Some("-"),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of the input.
///
/// # Invariant
///
/// `start + len <= input length`, except for [`Token::EOF`] which carries no
/// meaningful range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub symbol: Symbol,
    /// Byte offset of the first character.
    pub start: u32,
    /// Length in bytes.
    pub len: u32,
}

/// Size assertion: `Token` should stay at 12 bytes.
const _: () = assert!(std::mem::size_of::<Token>() <= 12);

impl Token {
    /// The end-of-input sentinel.
    pub const EOF: Token = Token {
        symbol: Symbol::Eof,
        start: 0,
        len: 0,
    };

    pub const fn new(symbol: Symbol, start: u32, len: u32) -> Self {
        Token { symbol, start, len }
    }

    /// Byte offset one past the last character.
    pub const fn end(self) -> u32 {
        self.start.saturating_add(self.len)
    }

    pub const fn is_eof(self) -> bool {
        matches!(self.symbol, Symbol::Eof)
    }

    /// The covered byte range, for slicing the original input.
    pub fn range(self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            f.write_str(self.symbol.name())
        } else {
            write!(f, "{}@{}..{}", self.symbol.name(), self.start, self.end())
        }
    }
}

#[cfg(test)]
mod tests;
