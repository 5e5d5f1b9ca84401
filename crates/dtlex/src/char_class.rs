//! Character classes the scanner dispatches on.

/// Lexical class of a single input byte.
///
/// Non-ASCII lead bytes, continuation bytes and interior nulls all fall into
/// [`CharClass::Other`]; the scanner consumes them a whole UTF-8 character at
/// a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a A p P m M W`: letters that may start or continue a meridian run.
    MeridianLetter,
    /// `t T`: the date/time separator literal.
    Marker,
    /// `0`-`9`.
    Digit,
    /// `:`.
    Colon,
    /// `.`.
    Dot,
    /// `/`.
    Slash,
    /// `@`.
    At,
    /// `-`.
    Minus,
    /// Space or tab.
    Space,
    /// Anything else.
    Other,
}

impl CharClass {
    /// Classify one byte.
    #[inline]
    pub fn of(byte: u8) -> Self {
        match byte {
            b'a' | b'A' | b'p' | b'P' | b'm' | b'M' | b'W' => CharClass::MeridianLetter,
            b't' | b'T' => CharClass::Marker,
            b'0'..=b'9' => CharClass::Digit,
            b':' => CharClass::Colon,
            b'.' => CharClass::Dot,
            b'/' => CharClass::Slash,
            b'@' => CharClass::At,
            b'-' => CharClass::Minus,
            b' ' | b'\t' => CharClass::Space,
            _ => CharClass::Other,
        }
    }
}
