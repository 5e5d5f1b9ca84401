//! Tokenizer errors.
//!
//! None of these are soft: the tokenizer never substitutes a fallback symbol
//! or a default value. `Unclassifiable` aborts the tokenization pass; the
//! others are returned by the read helpers and leave the tokenizer usable.

use thiserror::Error;

use crate::Symbol;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum LexError {
    /// A run matched none of the classification rules when it was flushed.
    #[error("cannot classify run {text:?} at offset {start}")]
    Unclassifiable { text: String, start: u32 },

    /// Integer decode requested on a token that is not `Digits`.
    #[error("cannot read {symbol} at offset {start} as an integer")]
    NotDigits { symbol: Symbol, start: u32 },

    /// The digits do not fit the requested integer type.
    #[error("integer {text:?} at offset {start} is out of range")]
    IntegerOverflow { text: String, start: u32 },

    /// A span passed to a raw decode contains something other than an
    /// optional sign followed by digits.
    #[error("{text:?} at offset {start} is not a signed digit sequence")]
    InvalidDigits { text: String, start: u32 },

    /// A span lies outside the input or splits a character.
    #[error("span {start}+{len} is outside the input")]
    InvalidSpan { start: u32, len: u32 },
}
