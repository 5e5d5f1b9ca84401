//! Borrowed view over the input string plus encoding diagnostics.
//!
//! The tokenizer never copies the input: every [`Token`](crate::Token) is an
//! offset/length pair into the string handed to [`SourceBuffer::new`]. Reads
//! past the end of the content yield the null byte, which gives the scanner
//! a virtual sentinel for its one-character lookahead and lookbehind.
//!
//! # Encoding Detection
//!
//! During construction the buffer records:
//! - a UTF-8 BOM at the start of the input
//! - interior null bytes (U+0000)
//!
//! Neither stops scanning; both characters are emitted as `CHARACTER`
//! tokens. Callers that care can inspect [`SourceBuffer::encoding_issues`].

use crate::Cursor;

/// Borrowed input with a virtual `0x00` sentinel after the last byte.
#[derive(Clone, Debug)]
pub struct SourceBuffer<'a> {
    source: &'a str,
    /// Length of the source content, saturated to `u32::MAX`.
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// Null byte (U+0000) inside the content.
    InteriorNull,
}

impl<'a> SourceBuffer<'a> {
    /// Wrap `source` and scan it for encoding issues.
    ///
    /// Inputs longer than `u32::MAX` bytes are accepted but only the first
    /// `u32::MAX` bytes are visible to the scanner.
    pub fn new(source: &'a str) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source.as_bytes(), &mut encoding_issues);

        Self {
            source,
            source_len,
            encoding_issues,
        }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.source, self.source_len)
    }

    /// The wrapped input.
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
    detect_interior_nulls(source, issues);
}

/// Uses `memchr` for the null byte search instead of a byte loop.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}

#[cfg(test)]
mod tests;
