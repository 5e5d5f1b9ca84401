//! Byte cursor with one-character lookahead and lookbehind.
//!
//! Every read outside `0..source_len` returns `0x00`, the virtual sentinel.
//! The scanner relies on this: "next character is a digit" is simply
//! `peek().is_ascii_digit()`, with no bounds check at the call site.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an interior null and is scanned like any
//! other unclassified character; a null at `pos >= source_len` is EOF.
//! [`Cursor::is_eof`] distinguishes the two.

/// Cursor over the bytes of a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`], so lookahead helpers can be written as pure
/// functions of `(input, offset)`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: u32,
    /// Length of the visible source content.
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, source_len: u32) -> Self {
        debug_assert!(
            source_len as usize <= source.len(),
            "source_len {source_len} exceeds source length {}",
            source.len()
        );
        Self {
            source,
            pos: 0,
            source_len,
        }
    }

    /// Byte at `pos`, or `0x00` when `pos` is outside the content.
    #[inline]
    fn byte_at(&self, pos: Option<u32>) -> u8 {
        match pos {
            Some(p) if p < self.source_len => self.source.as_bytes()[p as usize],
            _ => 0,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF. Interior null bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(Some(self.pos))
    }

    /// Lookahead: the byte one position after current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.checked_add(1))
    }

    /// Lookbehind: the byte one position before current.
    ///
    /// Returns `0x00` at position 0.
    #[inline]
    pub fn prev(&self) -> u8 {
        self.byte_at(self.pos.checked_sub(1))
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` once every byte of the content has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns `None` when `start..end` is out of range or does not fall on
    /// character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> Option<&'a str> {
        if end > self.source_len {
            return None;
        }
        self.source.get(start as usize..end as usize)
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character, returning its width.
    #[inline]
    pub fn advance_char(&mut self) -> u32 {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
        width
    }
}
